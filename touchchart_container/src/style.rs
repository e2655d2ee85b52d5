// Copyright 2025 the Touchchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation of web style records into native drawing props.
//!
//! Web chart components describe paint as loosely typed key/value pairs: CSS
//! colour strings, numbers that may arrive as text, and dash patterns written
//! as `"5, 5"`. Native drawing wants typed values, so [`NativeStyle::from_web`]
//! parses each property it knows and drops the web-only ones (pointer events,
//! cursor, user select and the like).

use core::fmt;

use peniko::Color;
use peniko::color::{Srgb, parse_color};
use smallvec::SmallVec;

/// Dash pattern lengths, in pixels.
pub type DashArray = SmallVec<[f64; 4]>;

/// One value of a web style record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleValue<'a> {
    /// A number.
    Number(f64),
    /// A string, as written in the web style.
    Text(&'a str),
}

impl From<f64> for StyleValue<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<'a> From<&'a str> for StyleValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

/// A web style record: property names as the web components spell them
/// (`fillOpacity`, `strokeDasharray`), with loosely typed values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WebStyle<'a> {
    entries: SmallVec<[(&'a str, StyleValue<'a>); 8]>,
}

impl<'a> WebStyle<'a> {
    /// An empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property`, replacing an earlier value.
    #[must_use]
    pub fn with(mut self, property: &'a str, value: impl Into<StyleValue<'a>>) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
        self
    }

    /// The value of `property`, if set.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<StyleValue<'a>> {
        self.entries
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| *v)
    }

    /// Properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, StyleValue<'a>)> + '_ {
        self.entries.iter().copied()
    }
}

/// Error returned when a web style value cannot be translated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleError {
    /// The value is not a colour.
    InvalidColor {
        /// Property that carried the value.
        property: &'static str,
    },
    /// The value is not a number.
    InvalidNumber {
        /// Property that carried the value.
        property: &'static str,
    },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor { property } => write!(f, "`{property}` is not a valid colour"),
            Self::InvalidNumber { property } => write!(f, "`{property}` is not a valid number"),
        }
    }
}

impl core::error::Error for StyleError {}

/// Typed paint props for native drawing primitives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NativeStyle {
    /// Fill colour.
    pub fill: Option<Color>,
    /// Fill opacity in `0.0..=1.0`.
    pub fill_opacity: Option<f64>,
    /// Stroke colour.
    pub stroke: Option<Color>,
    /// Stroke opacity in `0.0..=1.0`.
    pub stroke_opacity: Option<f64>,
    /// Stroke width in pixels.
    pub stroke_width: Option<f64>,
    /// Dash pattern.
    pub stroke_dasharray: Option<DashArray>,
    /// Whole-element opacity.
    pub opacity: Option<f64>,
}

impl NativeStyle {
    /// Sets the fill colour.
    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Sets the fill opacity.
    #[must_use]
    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }

    /// Sets the stroke colour.
    #[must_use]
    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Translates a web style record.
    ///
    /// Unknown properties are ignored. A dash pattern given as a number
    /// becomes a one-element pattern.
    pub fn from_web(web: &WebStyle<'_>) -> Result<Self, StyleError> {
        let mut style = Self::default();
        for (property, value) in web.iter() {
            match property {
                "fill" => style.fill = Some(color("fill", value)?),
                "stroke" => style.stroke = Some(color("stroke", value)?),
                "fillOpacity" => style.fill_opacity = Some(number("fillOpacity", value)?),
                "strokeOpacity" => style.stroke_opacity = Some(number("strokeOpacity", value)?),
                "strokeWidth" => style.stroke_width = Some(number("strokeWidth", value)?),
                "opacity" => style.opacity = Some(number("opacity", value)?),
                "strokeDasharray" => style.stroke_dasharray = Some(dash_array(value)?),
                _ => {}
            }
        }
        Ok(style)
    }
}

fn color(property: &'static str, value: StyleValue<'_>) -> Result<Color, StyleError> {
    match value {
        StyleValue::Text(s) => parse_color(s.trim())
            .map(|c| c.to_alpha_color::<Srgb>())
            .map_err(|_| StyleError::InvalidColor { property }),
        StyleValue::Number(_) => Err(StyleError::InvalidColor { property }),
    }
}

fn number(property: &'static str, value: StyleValue<'_>) -> Result<f64, StyleError> {
    match value {
        StyleValue::Number(n) => Ok(n),
        StyleValue::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| StyleError::InvalidNumber { property }),
    }
}

/// Parses `"5, 5"`, `"5 5"` or a bare number.
fn dash_array(value: StyleValue<'_>) -> Result<DashArray, StyleError> {
    const PROPERTY: &str = "strokeDasharray";
    match value {
        StyleValue::Number(n) => Ok(SmallVec::from_slice(&[n])),
        StyleValue::Text(s) => s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse()
                    .map_err(|_| StyleError::InvalidNumber { property: PROPERTY })
            })
            .collect(),
    }
}

//! Text styles
//!
//! Titles and a-b-c labels carry a [`TextStyle`], a set of optional properties
//! that are merged on top of each other: a property left to `None` never clobbers
//! a property already set. Properties unknown to this crate are kept in
//! [`TextStyle::extra`] and handed over untouched to the rendering backend.
//!
//! [`apply_style`] resolves a [`StyledText`] into a flat [`TextCommand`],
//! including the pseudo "border" and "bbox" properties.
use std::collections::BTreeMap;

use crate::color::{self, ColorU8};
use crate::geom::Point;
use crate::loc::{HAlign, VAlign};

pub(crate) mod defaults;

/// A loosely typed property value, for properties passed through to the backend
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A boolean value
    Bool(bool),
    /// A numeric value
    Number(f64),
    /// A string value
    Str(String),
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Number(value as f64)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(value)
    }
}

impl StyleValue {
    /// The value as a boolean, if it is one
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StyleValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The value as a number, if it is one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The value as a string, if it is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            _ => None,
        }
    }

    fn as_color(&self) -> Option<ColorU8> {
        self.as_str().and_then(|s| s.parse().ok())
    }
}

/// Free-form properties, as passed to legends and colorbars
pub type Props = BTreeMap<String, StyleValue>;

/// Style of a text object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyle {
    /// Text color
    pub color: Option<ColorU8>,
    /// Font size in points
    pub size: Option<f32>,
    /// Font weight (e.g. "normal", "bold")
    pub weight: Option<String>,
    /// Font family
    pub family: Option<String>,
    /// Whether to draw a border (a stroke) around the glyphs
    pub border: Option<bool>,
    /// Color of the border
    pub border_color: Option<ColorU8>,
    /// Width of the border in points
    pub border_width: Option<f32>,
    /// Swap the text color and the border color
    pub border_invert: Option<bool>,
    /// Whether to draw a box behind the text
    pub bbox: Option<bool>,
    /// Face color of the box
    pub bbox_color: Option<ColorU8>,
    /// Box style (e.g. "round", "square")
    pub bbox_style: Option<String>,
    /// Opacity of the box
    pub bbox_alpha: Option<f32>,
    /// Padding of the box, in font size units
    pub bbox_pad: Option<f32>,
    /// Properties unknown to this crate, passed through to the backend
    pub extra: Props,
}

impl TextStyle {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color and return self for chaining
    pub fn with_color(self, color: ColorU8) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    /// Set the font size and return self for chaining
    pub fn with_size(self, size: f32) -> Self {
        Self {
            size: Some(size),
            ..self
        }
    }

    /// Set the font weight and return self for chaining
    pub fn with_weight(self, weight: impl Into<String>) -> Self {
        Self {
            weight: Some(weight.into()),
            ..self
        }
    }

    /// Set the font family and return self for chaining
    pub fn with_family(self, family: impl Into<String>) -> Self {
        Self {
            family: Some(family.into()),
            ..self
        }
    }

    /// Enable or disable the text border and return self for chaining
    pub fn with_border(self, border: bool) -> Self {
        Self {
            border: Some(border),
            ..self
        }
    }

    /// Enable or disable the text box and return self for chaining
    pub fn with_bbox(self, bbox: bool) -> Self {
        Self {
            bbox: Some(bbox),
            ..self
        }
    }

    /// Set a property by name and return self for chaining.
    ///
    /// Known names and their usual aliases (`fontsize`, `c`, ...) fill the typed fields.
    /// Anything else, including known names with a value of unexpected type,
    /// lands in [`TextStyle::extra`].
    pub fn with(mut self, key: &str, value: impl Into<StyleValue>) -> Self {
        self.set(key, value.into());
        self
    }

    /// Set a property by name. See [`TextStyle::with`].
    pub fn set(&mut self, key: &str, value: StyleValue) {
        let accepted = match key {
            "color" | "c" | "fontcolor" => value.as_color().map(|c| self.color = Some(c)),
            "size" | "fontsize" => value.as_f64().map(|s| self.size = Some(s as f32)),
            "weight" | "fontweight" => value.as_str().map(|w| self.weight = Some(w.to_string())),
            "family" | "fontfamily" | "fontname" | "name" => {
                value.as_str().map(|f| self.family = Some(f.to_string()))
            }
            "border" => value.as_bool().map(|b| self.border = Some(b)),
            "bordercolor" => value.as_color().map(|c| self.border_color = Some(c)),
            "borderwidth" => value.as_f64().map(|w| self.border_width = Some(w as f32)),
            "borderinvert" => value.as_bool().map(|b| self.border_invert = Some(b)),
            "bbox" => value.as_bool().map(|b| self.bbox = Some(b)),
            "bboxcolor" => value.as_color().map(|c| self.bbox_color = Some(c)),
            "bboxstyle" => value.as_str().map(|s| self.bbox_style = Some(s.to_string())),
            "bboxalpha" => value.as_f64().map(|a| self.bbox_alpha = Some(a as f32)),
            "bboxpad" => value.as_f64().map(|p| self.bbox_pad = Some(p as f32)),
            _ => None,
        };
        if accepted.is_none() {
            log::debug!("passing text property {:?} through to backend", key);
            self.extra.insert(key.to_string(), value);
        }
    }

    /// Merge `other` on top of self. Properties set in `other` win.
    pub fn merge(&mut self, other: &TextStyle) {
        fn over<T: Clone>(dst: &mut Option<T>, src: &Option<T>) {
            if let Some(v) = src {
                *dst = Some(v.clone());
            }
        }
        over(&mut self.color, &other.color);
        over(&mut self.size, &other.size);
        over(&mut self.weight, &other.weight);
        over(&mut self.family, &other.family);
        over(&mut self.border, &other.border);
        over(&mut self.border_color, &other.border_color);
        over(&mut self.border_width, &other.border_width);
        over(&mut self.border_invert, &other.border_invert);
        over(&mut self.bbox, &other.bbox);
        over(&mut self.bbox_color, &other.bbox_color);
        over(&mut self.bbox_style, &other.bbox_style);
        over(&mut self.bbox_alpha, &other.bbox_alpha);
        over(&mut self.bbox_pad, &other.bbox_pad);
        self.extra
            .extend(other.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    /// Return a copy of self merged with `other`
    pub fn merged(&self, other: &TextStyle) -> TextStyle {
        let mut res = self.clone();
        res.merge(other);
        res
    }

    /// The color and font properties only (color, size, weight and family)
    pub fn font_props(&self) -> TextStyle {
        TextStyle {
            color: self.color,
            size: self.size,
            weight: self.weight.clone(),
            family: self.family.clone(),
            ..TextStyle::default()
        }
    }

    /// The properties moving along with a title transferred to another slot:
    /// color and font properties, and the pass-through properties.
    /// Border and box properties belong to the slot location and stay behind.
    pub fn transfer_props(&self) -> TextStyle {
        TextStyle {
            extra: self.extra.clone(),
            ..self.font_props()
        }
    }

    /// The border and box properties only
    pub fn decoration_props(&self) -> TextStyle {
        TextStyle {
            border: self.border,
            border_color: self.border_color,
            border_width: self.border_width,
            border_invert: self.border_invert,
            bbox: self.bbox,
            bbox_color: self.bbox_color,
            bbox_style: self.bbox_style.clone(),
            bbox_alpha: self.bbox_alpha,
            bbox_pad: self.bbox_pad,
            ..TextStyle::default()
        }
    }
}

/// A text string along with its style
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledText {
    /// The text content. Empty when nothing is to be drawn.
    pub text: String,
    /// The text style
    pub style: TextStyle,
}

impl StyledText {
    /// Build a styled text
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        StyledText {
            text: text.into(),
            style,
        }
    }

    /// Whether there is something to draw.
    /// Whitespace only text counts as empty.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Stroke drawn around glyphs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color
    pub color: ColorU8,
    /// Stroke width in points
    pub width: f32,
}

/// Box drawn behind a text
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    /// Edge color
    pub edge: ColorU8,
    /// Face color, opacity included
    pub face: ColorU8,
    /// Box style name
    pub style: String,
    /// Padding in font size units
    pub pad: f32,
}

/// A text ready to be handed to the rendering backend.
///
/// Coordinates are axes-relative: (0, 0) is the bottom-left corner of the axes
/// and (1, 1) the top-right corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    /// The text
    pub text: String,
    /// Anchor position in axes-relative coordinates
    pub pos: Point,
    /// Offset from the anchor, in points
    pub offset: (f32, f32),
    /// Horizontal alignment relative to the anchor
    pub ha: HAlign,
    /// Vertical alignment relative to the anchor
    pub va: VAlign,
    /// Glyphs color
    pub color: ColorU8,
    /// Font size in points
    pub size: f32,
    /// Font weight
    pub weight: String,
    /// Font family
    pub family: String,
    /// Optional stroke around glyphs
    pub stroke: Option<Stroke>,
    /// Optional box behind the text
    pub bbox: Option<TextBox>,
    /// Properties passed through to the backend
    pub extra: Props,
}

/// Where and how to place a text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Anchor position in axes-relative coordinates
    pub pos: Point,
    /// Offset from the anchor, in points
    pub offset: (f32, f32),
    /// Horizontal alignment
    pub ha: HAlign,
    /// Vertical alignment
    pub va: VAlign,
}

/// Resolve a styled text into a rendering command.
///
/// `default_bbox_pad` is used when the box padding is not set in the style.
pub fn apply_style(text: &StyledText, placement: &Placement, default_bbox_pad: f32) -> TextCommand {
    let style = &text.style;
    let mut color = style.color.unwrap_or(color::BLACK);

    let stroke = if style.border.unwrap_or(false) {
        let mut bg = style.border_color.unwrap_or(color::WHITE);
        if style.border_invert.unwrap_or(false) {
            std::mem::swap(&mut color, &mut bg);
        }
        Some(Stroke {
            color: bg,
            width: style.border_width.unwrap_or(defaults::BORDER_WIDTH),
        })
    } else {
        None
    };

    let bbox = if style.bbox.unwrap_or(false) {
        let alpha = style.bbox_alpha.unwrap_or(defaults::BBOX_ALPHA);
        Some(TextBox {
            edge: color::BLACK,
            face: style.bbox_color.unwrap_or(color::WHITE).with_opacity(alpha),
            style: style
                .bbox_style
                .clone()
                .unwrap_or_else(|| defaults::BBOX_STYLE.to_string()),
            pad: style.bbox_pad.unwrap_or(default_bbox_pad),
        })
    } else {
        None
    };

    TextCommand {
        text: text.text.clone(),
        pos: placement.pos,
        offset: placement.offset,
        ha: placement.ha,
        va: placement.va,
        color,
        size: style.size.unwrap_or(defaults::TITLE_FONT_SIZE),
        weight: style
            .weight
            .clone()
            .unwrap_or_else(|| defaults::TITLE_FONT_WEIGHT.to_string()),
        family: style
            .family
            .clone()
            .unwrap_or_else(|| defaults::FONT_FAMILY.to_string()),
        stroke,
        bbox,
        extra: style.extra.clone(),
    }
}

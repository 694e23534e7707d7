//! Option values understood by the Thumbor URL format
//!
//! Each enum renders to its wire keyword via `as_str()` and parses back
//! from that keyword (case-insensitive) so the CLI and configuration can
//! accept the same spelling that appears in generated URLs.

use std::fmt;
use std::str::FromStr;

use crate::constants::PART_ORIGINAL_SIZE;
use crate::error::UrlError;

/// Horizontal alignment for crop positioning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

impl HorizontalAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl FromStr for HorizontalAlign {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(HorizontalAlign::Left),
            "center" => Ok(HorizontalAlign::Center),
            "right" => Ok(HorizontalAlign::Right),
            _ => Err(UrlError::invalid_argument(
                "halign",
                format!("unknown horizontal alignment: {}", s),
            )),
        }
    }
}

/// Vertical alignment for crop positioning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

impl FromStr for VerticalAlign {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(VerticalAlign::Top),
            "middle" => Ok(VerticalAlign::Middle),
            "bottom" => Ok(VerticalAlign::Bottom),
            _ => Err(UrlError::invalid_argument(
                "valign",
                format!("unknown vertical alignment: {}", s),
            )),
        }
    }
}

/// Corner whose pixel color is used as the trim reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimPixelColor {
    TopLeft,
    BottomRight,
}

impl TrimPixelColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

impl FromStr for TrimPixelColor {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top-left" => Ok(TrimPixelColor::TopLeft),
            "bottom-right" => Ok(TrimPixelColor::BottomRight),
            _ => Err(UrlError::invalid_argument(
                "trim",
                format!("unknown trim pixel color: {}", s),
            )),
        }
    }
}

/// Style of resizing for 'fit-in'
///
/// Only changes the keyword emitted before the resize dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitInStyle {
    #[default]
    Normal,
    Full,
    Adaptive,
}

impl FitInStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "fit-in",
            Self::Full => "full-fit-in",
            Self::Adaptive => "adaptive-fit-in",
        }
    }
}

impl FromStr for FitInStyle {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" | "fit-in" => Ok(FitInStyle::Normal),
            "full" | "full-fit-in" => Ok(FitInStyle::Full),
            "adaptive" | "adaptive-fit-in" => Ok(FitInStyle::Adaptive),
            _ => Err(UrlError::invalid_argument(
                "fit-in",
                format!("unknown fit-in style: {}", s),
            )),
        }
    }
}

/// Output formats the server can be asked to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Gif,
    Jpeg,
    Png,
    Webp,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gif => "gif",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Webp => "webp",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gif" => Ok(ImageFormat::Gif),
            "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
            "png" => Ok(ImageFormat::Png),
            "webp" => Ok(ImageFormat::Webp),
            _ => Err(UrlError::invalid_argument(
                "format",
                format!("unknown format: {}", s),
            )),
        }
    }
}

/// One axis of a resize request
///
/// `Pixels(0)` asks the server to keep the aspect ratio on that axis;
/// `Original` keeps the source size and renders as `orig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Pixels(i32),
    Original,
}

impl Dimension {
    pub(crate) fn is_zero(&self) -> bool {
        matches!(self, Dimension::Pixels(0))
    }

    pub(crate) fn is_negative(&self) -> bool {
        matches!(self, Dimension::Pixels(px) if *px < 0)
    }
}

impl From<i32> for Dimension {
    fn from(px: i32) -> Self {
        Dimension::Pixels(px)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Pixels(px) => write!(f, "{}", px),
            Dimension::Original => f.write_str(PART_ORIGINAL_SIZE),
        }
    }
}

impl FromStr for Dimension {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(PART_ORIGINAL_SIZE) {
            return Ok(Dimension::Original);
        }
        let px: i32 = s
            .parse()
            .map_err(|_| UrlError::invalid_argument("dimension", "invalid pixel value"))?;
        Ok(Dimension::Pixels(px))
    }
}

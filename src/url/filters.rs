//! Filter calls
//!
//! Each constructor validates its arguments and returns a [`Filter`];
//! `Display` renders the `name(arg1,arg2,...)` call that is appended to
//! the `filters` segment. The builder treats filters as opaque strings, so
//! custom calls can be mixed in as plain text.

use std::fmt;

use crate::constants::{
    DEFAULT_ROUND_CORNER_COLOR, MAX_BLUR_RADIUS, MAX_PERCENT_ADJUSTMENT, MAX_TRANSPARENCY,
};
use crate::error::UrlError;

use super::builder::UrlBuilder;
use super::params::ImageFormat;

/// A validated filter call
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Brightness(i32),
    Contrast(i32),
    Noise(i32),
    Quality(i32),
    Rgb {
        r: i32,
        g: i32,
        b: i32,
    },
    RoundCorner {
        radius_inner: i32,
        radius_outer: i32,
        color: u32,
    },
    Watermark {
        image: String,
        x: i32,
        y: i32,
        transparency: i32,
    },
    Sharpen {
        amount: f32,
        radius: f32,
        luminance_only: bool,
    },
    Fill(u32),
    Format(ImageFormat),
    Frame(String),
    StripIcc,
    Grayscale,
    Equalize,
    Blur {
        radius: i32,
        sigma: i32,
    },
    NoUpscale,
    Rotate(i32),
}

fn check_range(field: &str, value: i32, min: i32, max: i32) -> Result<(), UrlError> {
    if !(min..=max).contains(&value) {
        return Err(UrlError::invalid_argument(
            field,
            format!("must be between {} and {}, inclusive", min, max),
        ));
    }
    Ok(())
}

fn check_not_blank(field: &str, value: &str) -> Result<(), UrlError> {
    if value.trim().is_empty() {
        return Err(UrlError::invalid_argument(field, "must not be blank"));
    }
    Ok(())
}

impl Filter {
    /// Increase or decrease brightness by `amount` percent (-100 to 100)
    pub fn brightness(amount: i32) -> Result<Self, UrlError> {
        check_range(
            "amount",
            amount,
            -MAX_PERCENT_ADJUSTMENT,
            MAX_PERCENT_ADJUSTMENT,
        )?;
        Ok(Filter::Brightness(amount))
    }

    /// Increase or decrease contrast by `amount` percent (-100 to 100)
    pub fn contrast(amount: i32) -> Result<Self, UrlError> {
        check_range(
            "amount",
            amount,
            -MAX_PERCENT_ADJUSTMENT,
            MAX_PERCENT_ADJUSTMENT,
        )?;
        Ok(Filter::Contrast(amount))
    }

    /// Add `amount` percent of noise (0 to 100)
    pub fn noise(amount: i32) -> Result<Self, UrlError> {
        check_range("amount", amount, 0, 100)?;
        Ok(Filter::Noise(amount))
    }

    /// JPEG output quality in percent (0 to 100)
    pub fn quality(amount: i32) -> Result<Self, UrlError> {
        check_range("amount", amount, 0, 100)?;
        Ok(Filter::Quality(amount))
    }

    /// Change the amount of each color channel, in percent (-100 to 100)
    pub fn rgb(r: i32, g: i32, b: i32) -> Result<Self, UrlError> {
        let max = MAX_PERCENT_ADJUSTMENT;
        check_range("r", r, -max, max)?;
        check_range("g", g, -max, max)?;
        check_range("b", b, -max, max)?;
        Ok(Filter::Rgb { r, g, b })
    }

    /// Round corners over a white background
    pub fn round_corner(radius: i32) -> Result<Self, UrlError> {
        Self::round_corner_with_color(radius, DEFAULT_ROUND_CORNER_COLOR)
    }

    /// Round corners over the given `0xRRGGBB` background
    pub fn round_corner_with_color(radius: i32, color: u32) -> Result<Self, UrlError> {
        Self::round_corner_elliptical(radius, 0, color)
    }

    /// Round corners using an ellipse; `radius_outer` of 0 means circular
    pub fn round_corner_elliptical(
        radius_inner: i32,
        radius_outer: i32,
        color: u32,
    ) -> Result<Self, UrlError> {
        if radius_inner < 1 {
            return Err(UrlError::invalid_argument(
                "radius",
                "must be greater than zero",
            ));
        }
        if radius_outer < 0 {
            return Err(UrlError::invalid_argument(
                "radius_outer",
                "must be greater than or equal to zero",
            ));
        }
        Ok(Filter::RoundCorner {
            radius_inner,
            radius_outer,
            color,
        })
    }

    /// Overlay the image at `image` (loaded by the server's own loader)
    ///
    /// Positive `x`/`y` count from the left/top, negative from the
    /// right/bottom. `transparency` ranges from 0 (opaque) to 100.
    pub fn watermark(
        image: impl Into<String>,
        x: i32,
        y: i32,
        transparency: i32,
    ) -> Result<Self, UrlError> {
        let image = image.into();
        check_not_blank("image", &image)?;
        check_range("transparency", transparency, 0, MAX_TRANSPARENCY)?;
        Ok(Filter::Watermark {
            image,
            x,
            y,
            transparency,
        })
    }

    /// Overlay another Thumbor image
    ///
    /// The nested builder is serialized with [`UrlBuilder::to_url`] at this
    /// point; later changes to it do not affect the filter.
    pub fn watermark_image(
        image: &UrlBuilder,
        x: i32,
        y: i32,
        transparency: i32,
    ) -> Result<Self, UrlError> {
        Self::watermark(image.to_url()?, x, y, transparency)
    }

    /// Wavelet sharpening; typical amounts 0-10, radii 0-2
    pub fn sharpen(amount: f32, radius: f32, luminance_only: bool) -> Result<Self, UrlError> {
        if !amount.is_finite() {
            return Err(UrlError::invalid_argument("amount", "must be finite"));
        }
        if !radius.is_finite() {
            return Err(UrlError::invalid_argument("radius", "must be finite"));
        }
        Ok(Filter::Sharpen {
            amount,
            radius,
            luminance_only,
        })
    }

    /// Fill missing area with `color`; any alpha byte is dropped
    pub fn fill(color: u32) -> Self {
        Filter::Fill(color & 0xFF_FFFF)
    }

    /// Output format of the image
    pub fn format(format: ImageFormat) -> Self {
        Filter::Format(format)
    }

    /// Overlay a 9-patch frame
    pub fn frame(image: impl Into<String>) -> Result<Self, UrlError> {
        let image = image.into();
        check_not_blank("image", &image)?;
        Ok(Filter::Frame(image))
    }

    pub fn strip_icc() -> Self {
        Filter::StripIcc
    }

    pub fn grayscale() -> Self {
        Filter::Grayscale
    }

    pub fn equalize() -> Self {
        Filter::Equalize
    }

    /// Gaussian blur; radius 1-150, sigma 0 means "same as radius"
    pub fn blur(radius: i32, sigma: i32) -> Result<Self, UrlError> {
        check_range("radius", radius, 1, MAX_BLUR_RADIUS)?;
        if sigma < 0 {
            return Err(UrlError::invalid_argument(
                "sigma",
                "must be greater than or equal to zero",
            ));
        }
        Ok(Filter::Blur { radius, sigma })
    }

    /// Never upscale beyond the source size
    pub fn no_upscale() -> Self {
        Filter::NoUpscale
    }

    /// Rotate by a multiple of 90 degrees
    pub fn rotate(angle: i32) -> Result<Self, UrlError> {
        if angle % 90 != 0 {
            return Err(UrlError::invalid_argument(
                "angle",
                "must be a multiple of 90",
            ));
        }
        Ok(Filter::Rotate(angle))
    }

    /// Filter name as it appears in the URL
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Brightness(_) => "brightness",
            Filter::Contrast(_) => "contrast",
            Filter::Noise(_) => "noise",
            Filter::Quality(_) => "quality",
            Filter::Rgb { .. } => "rgb",
            Filter::RoundCorner { .. } => "round_corner",
            Filter::Watermark { .. } => "watermark",
            Filter::Sharpen { .. } => "sharpen",
            Filter::Fill(_) => "fill",
            Filter::Format(_) => "format",
            Filter::Frame(_) => "frame",
            Filter::StripIcc => "strip_icc",
            Filter::Grayscale => "grayscale",
            Filter::Equalize => "equalize",
            Filter::Blur { .. } => "blur",
            Filter::NoUpscale => "no_upscale",
            Filter::Rotate(_) => "rotate",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        match self {
            Filter::Brightness(amount)
            | Filter::Contrast(amount)
            | Filter::Noise(amount)
            | Filter::Quality(amount) => write!(f, "{}", amount)?,
            Filter::Rgb { r, g, b } => write!(f, "{},{},{}", r, g, b)?,
            Filter::RoundCorner {
                radius_inner,
                radius_outer,
                color,
            } => {
                write!(f, "{}", radius_inner)?;
                if *radius_outer > 0 {
                    write!(f, "|{}", radius_outer)?;
                }
                let r = (color >> 16) & 0xFF;
                let g = (color >> 8) & 0xFF;
                let b = color & 0xFF;
                write!(f, ",{},{},{}", r, g, b)?;
            }
            Filter::Watermark {
                image,
                x,
                y,
                transparency,
            } => write!(f, "{},{},{},{}", image, x, y, transparency)?,
            // Debug formatting keeps the fractional part: 3.0 rather than 3
            Filter::Sharpen {
                amount,
                radius,
                luminance_only,
            } => write!(f, "{:?},{:?},{}", amount, radius, luminance_only)?,
            Filter::Fill(color) => write!(f, "{:x}", color)?,
            Filter::Format(format) => f.write_str(format.as_str())?,
            Filter::Frame(image) => f.write_str(image)?,
            Filter::Blur { radius, sigma } => write!(f, "{},{}", radius, sigma)?,
            Filter::Rotate(angle) => write!(f, "{}", angle)?,
            Filter::StripIcc | Filter::Grayscale | Filter::Equalize | Filter::NoUpscale => {}
        }
        f.write_str(")")
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.to_string()
    }
}

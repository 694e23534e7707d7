//! Fluent builder for a single Thumbor URL
//!
//! Options are recorded by consuming setters that validate their input
//! and return the updated builder, so a chain either fully succeeds or
//! stops at the first error:
//!
//! ```
//! use thumbor_url::{Filter, Thumbor};
//!
//! let thumbor = Thumbor::new("/")?;
//! let url = thumbor
//!     .build_image("a.com/b.png")?
//!     .crop(10, 10, 90, 90)?
//!     .resize(40, 40)?
//!     .filter([Filter::round_corner(5)?])?
//!     .to_url()?;
//! assert_eq!(url, "/unsafe/10x10:90x90/40x40/filters:round_corner(5,255,255,255)/a.com/b.png");
//! # Ok::<(), thumbor_url::UrlError>(())
//! ```
//!
//! Flip, fit-in, alignment and smart cropping all require a prior resize.
//! Serialization order is fixed (trim, crop, resize, filters, target)
//! regardless of the order setters were called in.

use crate::codec::md5_hex;
use crate::constants::{
    MAX_TRIM_TOLERANCE, PART_FILTERS, PART_SMART, PART_TRIM, PREFIX_META, PREFIX_UNSAFE,
};
use crate::error::UrlError;

use super::params::{Dimension, FitInStyle, HorizontalAlign, TrimPixelColor, VerticalAlign};
use super::security::{generate_signature, SigningKey, SigningScheme};

/// Crop rectangle; always satisfies `0 <= top < bottom` and `0 <= left < right`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBounds {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

/// Trim request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimOptions {
    pub pixel_color: Option<TrimPixelColor>,
    pub tolerance: i32,
}

/// Builder holding the transformation of one target image
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    host: String,
    key: Option<SigningKey>,
    image: String,
    resize: Option<(Dimension, Dimension)>,
    crop: Option<CropBounds>,
    fit_in: Option<FitInStyle>,
    flip_horizontally: bool,
    flip_vertically: bool,
    smart: bool,
    horizontal_align: Option<HorizontalAlign>,
    vertical_align: Option<VerticalAlign>,
    trim: Option<TrimOptions>,
    legacy: bool,
    filters: Vec<String>,
}

impl UrlBuilder {
    /// Create a builder; `host` must already be normalized
    pub(crate) fn new(host: String, key: Option<SigningKey>, image: String) -> Self {
        Self {
            host,
            key,
            image,
            resize: None,
            crop: None,
            fit_in: None,
            flip_horizontally: false,
            flip_vertically: false,
            smart: false,
            horizontal_align: None,
            vertical_align: None,
            trim: None,
            legacy: false,
            filters: Vec::new(),
        }
    }

    /// Resize picture to desired size
    ///
    /// Either axis may be `0` (keep aspect ratio) or [`Dimension::Original`],
    /// but not both zero. Later calls replace earlier ones.
    pub fn resize(
        mut self,
        width: impl Into<Dimension>,
        height: impl Into<Dimension>,
    ) -> Result<Self, UrlError> {
        let width = width.into();
        let height = height.into();

        if width.is_negative() {
            return Err(UrlError::invalid_argument(
                "width",
                "must be a positive number",
            ));
        }
        if height.is_negative() {
            return Err(UrlError::invalid_argument(
                "height",
                "must be a positive number",
            ));
        }
        if width.is_zero() && height.is_zero() {
            return Err(UrlError::invalid_argument(
                "resize",
                "both width and height must not be zero",
            ));
        }

        self.resize = Some((width, height));
        Ok(self)
    }

    /// Flip the image horizontally
    pub fn flip_horizontally(mut self) -> Result<Self, UrlError> {
        self.require_resize("flip")?;
        self.flip_horizontally = true;
        Ok(self)
    }

    /// Flip the image vertically
    pub fn flip_vertically(mut self) -> Result<Self, UrlError> {
        self.require_resize("flip")?;
        self.flip_vertically = true;
        Ok(self)
    }

    /// Constrain the image size inside the resized box, scaling as needed
    pub fn fit_in(self) -> Result<Self, UrlError> {
        self.fit_in_style(FitInStyle::Normal)
    }

    /// Like [`fit_in`](Self::fit_in) with an explicit style
    pub fn fit_in_style(mut self, style: FitInStyle) -> Result<Self, UrlError> {
        self.require_resize("apply 'fit-in'")?;
        self.fit_in = Some(style);
        Ok(self)
    }

    /// Crop the image between two points
    pub fn crop(mut self, top: i32, left: i32, bottom: i32, right: i32) -> Result<Self, UrlError> {
        if top < 0 {
            return Err(UrlError::invalid_argument(
                "top",
                "must be greater or equal to zero",
            ));
        }
        if left < 0 {
            return Err(UrlError::invalid_argument(
                "left",
                "must be greater or equal to zero",
            ));
        }
        if bottom < 1 || bottom <= top {
            return Err(UrlError::invalid_argument(
                "bottom",
                "must be greater than zero and top",
            ));
        }
        if right < 1 || right <= left {
            return Err(UrlError::invalid_argument(
                "right",
                "must be greater than zero and left",
            ));
        }

        self.crop = Some(CropBounds {
            top,
            left,
            bottom,
            right,
        });
        Ok(self)
    }

    /// Set the horizontal alignment used when resizing crops the image
    pub fn align_horizontal(mut self, align: HorizontalAlign) -> Result<Self, UrlError> {
        self.require_resize("align")?;
        self.horizontal_align = Some(align);
        Ok(self)
    }

    /// Set the vertical alignment used when resizing crops the image
    pub fn align_vertical(mut self, align: VerticalAlign) -> Result<Self, UrlError> {
        self.require_resize("align")?;
        self.vertical_align = Some(align);
        Ok(self)
    }

    /// Set both alignments at once
    pub fn align_both(
        self,
        vertical: VerticalAlign,
        horizontal: HorizontalAlign,
    ) -> Result<Self, UrlError> {
        self.align_vertical(vertical)?.align_horizontal(horizontal)
    }

    /// Use smart cropping to find the important portion of the image
    ///
    /// Smart takes precedence over explicit alignment in the output; the
    /// alignment settings are kept and reappear if smart is disabled.
    pub fn smart(mut self) -> Result<Self, UrlError> {
        self.require_resize("smart align")?;
        self.smart = true;
        Ok(self)
    }

    /// Turn smart cropping back off
    pub fn disable_smart(mut self) -> Self {
        self.smart = false;
        self
    }

    /// Remove surrounding space in the image
    pub fn trim(mut self) -> Self {
        self.trim = Some(TrimOptions {
            pixel_color: None,
            tolerance: 0,
        });
        self
    }

    /// Remove surrounding space using the color of the given corner pixel
    pub fn trim_pixel(mut self, pixel_color: TrimPixelColor) -> Self {
        self.trim = Some(TrimOptions {
            pixel_color: Some(pixel_color),
            tolerance: 0,
        });
        self
    }

    /// Remove surrounding space with a color tolerance
    ///
    /// `tolerance` is the Euclidean distance (0-442) between the reference
    /// pixel color and the pixels to trim. A non-zero tolerance needs a
    /// reference corner.
    pub fn trim_with(
        mut self,
        pixel_color: Option<TrimPixelColor>,
        tolerance: i32,
    ) -> Result<Self, UrlError> {
        if !(0..=MAX_TRIM_TOLERANCE).contains(&tolerance) {
            return Err(UrlError::invalid_argument(
                "tolerance",
                format!("must be between 0 and {}", MAX_TRIM_TOLERANCE),
            ));
        }
        if tolerance > 0 && pixel_color.is_none() {
            return Err(UrlError::invalid_argument(
                "pixel_color",
                "must be set when a tolerance is given",
            ));
        }

        self.trim = Some(TrimOptions {
            pixel_color,
            tolerance,
        });
        Ok(self)
    }

    /// Use legacy AES encryption when constructing a safe URL
    pub fn legacy(mut self) -> Self {
        self.legacy = true;
        self
    }

    /// Add one or more filter calls
    ///
    /// Accepts [`Filter`](super::Filter) values as well as custom call
    /// strings such as `"my_filter(1,2,3)"`. Order is preserved.
    pub fn filter<I, S>(mut self, filters: I) -> Result<Self, UrlError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let filters: Vec<String> = filters.into_iter().map(Into::into).collect();

        if filters.is_empty() {
            return Err(UrlError::invalid_argument(
                "filters",
                "at least one filter must be provided",
            ));
        }
        if filters.iter().any(|f| f.trim().is_empty()) {
            return Err(UrlError::invalid_argument(
                "filters",
                "filter must not be blank",
            ));
        }

        self.filters.extend(filters);
        Ok(self)
    }

    /// Build the URL, signed when a key is present
    pub fn to_url(&self) -> Result<String, UrlError> {
        if self.key.is_some() {
            self.to_url_safe()
        } else {
            Ok(self.to_url_unsafe())
        }
    }

    /// Build the plaintext URL, ignoring any key
    pub fn to_url_unsafe(&self) -> String {
        tracing::debug!(image = %self.image, mode = "unsafe", "Building URL");
        format!("{}{}{}", self.host, PREFIX_UNSAFE, self.assemble_config(false))
    }

    /// Build the signed URL
    ///
    /// With the legacy flag the signature covers the configuration with
    /// the target replaced by its MD5 digest, and only the target follows
    /// the signature. Otherwise the whole configuration follows it.
    pub fn to_url_safe(&self) -> Result<String, UrlError> {
        let key = self.require_key()?;

        if self.legacy {
            let config = self.assemble(false, &md5_hex(&self.image)?);
            let signature = generate_signature(&config, key, SigningScheme::Legacy)?;
            tracing::debug!(image = %self.image, mode = "legacy", "Building URL");
            Ok(format!("{}{}/{}", self.host, signature, self.image))
        } else {
            let config = self.assemble_config(false);
            let signature = generate_signature(&config, key, SigningScheme::HmacSha1)?;
            tracing::debug!(image = %self.image, mode = "hmac", "Building URL");
            Ok(format!("{}{}/{}", self.host, signature, config))
        }
    }

    /// Build the metadata URL, signed when a key is present
    pub fn to_meta(&self) -> Result<String, UrlError> {
        if self.key.is_some() {
            self.to_meta_safe()
        } else {
            Ok(self.to_meta_unsafe())
        }
    }

    /// Build the plaintext metadata URL, ignoring any key
    pub fn to_meta_unsafe(&self) -> String {
        tracing::debug!(image = %self.image, mode = "unsafe", "Building metadata URL");
        format!("{}{}{}", self.host, PREFIX_UNSAFE, self.assemble_config(true))
    }

    /// Build the signed metadata URL; always HMAC-SHA1
    pub fn to_meta_safe(&self) -> Result<String, UrlError> {
        let key = self.require_key()?;

        let config = self.assemble_config(true);
        let signature = generate_signature(&config, key, SigningScheme::HmacSha1)?;
        tracing::debug!(image = %self.image, mode = "hmac", "Building metadata URL");
        Ok(format!("{}{}/{}", self.host, signature, config))
    }

    /// Assemble the configuration section of the URL, target included
    pub fn assemble_config(&self, meta: bool) -> String {
        self.assemble(meta, &self.image)
    }

    fn assemble(&self, meta: bool, target: &str) -> String {
        let mut builder = String::new();

        if meta {
            builder.push_str(PREFIX_META);
        }

        if let Some(trim) = &self.trim {
            builder.push_str(PART_TRIM);
            if let Some(color) = trim.pixel_color {
                builder.push(':');
                builder.push_str(color.as_str());
                if trim.tolerance > 0 {
                    builder.push_str(&format!(":{}", trim.tolerance));
                }
            }
            builder.push('/');
        }

        if let Some(crop) = &self.crop {
            builder.push_str(&format!(
                "{}x{}:{}x{}/",
                crop.left, crop.top, crop.right, crop.bottom
            ));
        }

        if let Some((width, height)) = &self.resize {
            if let Some(style) = self.fit_in {
                builder.push_str(style.as_str());
                builder.push('/');
            }
            if self.flip_horizontally {
                builder.push('-');
            }
            builder.push_str(&width.to_string());
            builder.push('x');
            if self.flip_vertically {
                builder.push('-');
            }
            builder.push_str(&height.to_string());

            if self.smart {
                builder.push('/');
                builder.push_str(PART_SMART);
            } else {
                if let Some(align) = self.horizontal_align {
                    builder.push('/');
                    builder.push_str(align.as_str());
                }
                if let Some(align) = self.vertical_align {
                    builder.push('/');
                    builder.push_str(align.as_str());
                }
            }
            builder.push('/');
        }

        if !self.filters.is_empty() {
            builder.push_str(PART_FILTERS);
            for filter in &self.filters {
                builder.push(':');
                builder.push_str(filter);
            }
            builder.push('/');
        }

        builder.push_str(target);
        builder
    }

    fn require_resize(&self, action: &str) -> Result<(), UrlError> {
        if self.resize.is_none() {
            return Err(UrlError::invalid_state(format!(
                "image must be resized first in order to {}",
                action
            )));
        }
        Ok(())
    }

    fn require_key(&self) -> Result<&[u8], UrlError> {
        self.key
            .as_ref()
            .map(SigningKey::as_bytes)
            .ok_or_else(|| UrlError::invalid_state("cannot build safe URL without a key"))
    }

    /// Target image locator
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Normalized host prefix
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }

    pub fn is_legacy(&self) -> bool {
        self.legacy
    }

    pub fn is_smart(&self) -> bool {
        self.smart
    }

    pub fn resize_dimensions(&self) -> Option<(Dimension, Dimension)> {
        self.resize
    }

    pub fn crop_bounds(&self) -> Option<CropBounds> {
        self.crop
    }

    pub fn trim_options(&self) -> Option<TrimOptions> {
        self.trim
    }

    pub fn alignment(&self) -> (Option<VerticalAlign>, Option<HorizontalAlign>) {
        (self.vertical_align, self.horizontal_align)
    }

    pub fn filters(&self) -> &[String] {
        &self.filters
    }
}

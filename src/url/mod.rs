//! Thumbor URL construction
//!
//! Provides the builder and its supporting types:
//! - Transformation options (resize, crop, fit-in, flip, alignment, trim)
//! - Filter calls with validated arguments
//! - HMAC-SHA1 and legacy AES signing
//!
//! # URL Formats
//!
//! ## Unsafe
//! ```text
//! /unsafe/10x10:90x90/40x40/filters:grayscale()/a.com/b.png
//! ```
//!
//! ## Signed (HMAC-SHA1)
//! ```text
//! /{base64url(hmac)}/10x10:90x90/40x40/filters:grayscale()/a.com/b.png
//! ```
//!
//! ## Legacy (AES-128-ECB)
//! ```text
//! /{base64url(aes)}/a.com/b.png
//! ```
//!
//! Metadata URLs insert `meta/` at the start of the configuration.

pub mod builder;
pub mod filters;
pub mod params;
pub mod security;

pub use builder::{CropBounds, TrimOptions, UrlBuilder};
pub use filters::Filter;
pub use params::{Dimension, FitInStyle, HorizontalAlign, ImageFormat, TrimPixelColor, VerticalAlign};
pub use security::{generate_signature, SigningKey, SigningScheme};

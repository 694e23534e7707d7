// Thumbor URL builder library

pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod thumbor;
pub mod url;

pub use config::{ConfigError, ThumborConfig};
pub use error::UrlError;
pub use thumbor::Thumbor;
pub use url::{
    CropBounds, Dimension, Filter, FitInStyle, HorizontalAlign, ImageFormat, TrimOptions,
    TrimPixelColor, UrlBuilder, VerticalAlign,
};

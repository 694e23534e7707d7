use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use thumbor_url::{
    Dimension, FitInStyle, HorizontalAlign, Thumbor, ThumborConfig, TrimPixelColor,
    VerticalAlign,
};

/// Thumbor URL builder - generate signed or unsafe image URLs
#[derive(Parser, Debug)]
#[command(name = "thumbor-url")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Thumbor server base URL (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Signing key (overrides config)
    #[arg(long)]
    key: Option<String>,

    /// Sign with the legacy AES scheme
    #[arg(long)]
    legacy: bool,

    /// Resize to WIDTHxHEIGHT; either side may be 0 or "orig"
    #[arg(long, value_name = "WxH")]
    resize: Option<String>,

    /// Crop rectangle as top,left,bottom,right
    #[arg(long, value_name = "T,L,B,R")]
    crop: Option<String>,

    /// Fit the image inside the resize box
    #[arg(long, value_name = "STYLE", num_args = 0..=1, default_missing_value = "normal")]
    fit_in: Option<FitInStyle>,

    #[arg(long)]
    flip_horizontal: bool,

    #[arg(long)]
    flip_vertical: bool,

    /// Horizontal alignment: left, center, right
    #[arg(long)]
    halign: Option<HorizontalAlign>,

    /// Vertical alignment: top, middle, bottom
    #[arg(long)]
    valign: Option<VerticalAlign>,

    /// Use smart cropping
    #[arg(long)]
    smart: bool,

    /// Trim surrounding space, optionally from top-left or bottom-right
    #[arg(long, value_name = "CORNER", num_args = 0..=1)]
    trim: Option<Option<TrimPixelColor>>,

    /// Color tolerance for trim (0-442)
    #[arg(long, value_name = "N", requires = "trim")]
    trim_tolerance: Option<i32>,

    /// Filter call, e.g. "quality(80)"; may be repeated
    #[arg(long = "filter", value_name = "CALL")]
    filters: Vec<String>,

    /// Build a metadata URL
    #[arg(long)]
    meta: bool,

    /// Build an unsigned URL even when a key is available
    #[arg(long = "unsafe")]
    unsigned: bool,

    /// Target image locator
    image: String,
}

fn parse_resize(value: &str) -> Result<(Dimension, Dimension)> {
    let (width, height) = value
        .split_once('x')
        .with_context(|| format!("resize '{}' must look like WIDTHxHEIGHT", value))?;
    Ok((width.parse()?, height.parse()?))
}

fn parse_crop(value: &str) -> Result<(i32, i32, i32, i32)> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("crop '{}' must contain integers", value))?;

    match parts.as_slice() {
        [top, left, bottom, right] => Ok((*top, *left, *bottom, *right)),
        _ => bail!("crop '{}' must have four values: top,left,bottom,right", value),
    }
}

fn load_config(args: &Args) -> Result<ThumborConfig> {
    let mut config = match &args.config {
        Some(path) => ThumborConfig::from_file(path).with_context(|| {
            format!("Failed to load configuration from {}", path.display())
        })?,
        None => ThumborConfig::default(),
    };

    if args.host.is_some() {
        config.host = args.host.clone();
    }
    if args.key.is_some() {
        config.key = args.key.clone();
    }
    config.legacy |= args.legacy;

    config.validate()?;
    Ok(config)
}

fn build_url(args: &Args, thumbor: &Thumbor) -> Result<String> {
    let mut image = thumbor.build_image(args.image.as_str())?;

    if let Some(resize) = &args.resize {
        let (width, height) = parse_resize(resize)?;
        image = image.resize(width, height)?;
    }
    if let Some(style) = args.fit_in {
        image = image.fit_in_style(style)?;
    }
    if args.flip_horizontal {
        image = image.flip_horizontally()?;
    }
    if args.flip_vertical {
        image = image.flip_vertically()?;
    }
    if let Some(align) = args.halign {
        image = image.align_horizontal(align)?;
    }
    if let Some(align) = args.valign {
        image = image.align_vertical(align)?;
    }
    if args.smart {
        image = image.smart()?;
    }
    if let Some(crop) = &args.crop {
        let (top, left, bottom, right) = parse_crop(crop)?;
        image = image.crop(top, left, bottom, right)?;
    }
    if let Some(corner) = args.trim {
        image = image.trim_with(corner, args.trim_tolerance.unwrap_or(0))?;
    }
    if !args.filters.is_empty() {
        image = image.filter(args.filters.iter().cloned())?;
    }

    let url = match (args.meta, args.unsigned) {
        (true, true) => image.to_meta_unsafe(),
        (true, false) => image.to_meta()?,
        (false, true) => image.to_url_unsafe(),
        (false, false) => image.to_url()?,
    };
    Ok(url)
}

fn main() -> Result<()> {
    // Initialize logging subsystem
    thumbor_url::logging::init_subscriber()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging subsystem: {}", e))?;

    let args = Args::parse();
    let config = load_config(&args)?;
    let thumbor = Thumbor::from_config(&config)?;

    tracing::info!(
        config_file = ?args.config,
        host = %thumbor.host(),
        signed = thumbor.key().is_some() && !args.unsigned,
        legacy = thumbor.is_legacy(),
        meta = args.meta,
        "Configuration loaded successfully"
    );

    let url = build_url(&args, &thumbor)?;
    println!("{}", url);
    Ok(())
}

// Constants module - wire keywords and limits of the Thumbor URL format

// =============================================================================
// URL prefixes and path parts
// =============================================================================

/// Prefix marking an unauthenticated URL
pub const PREFIX_UNSAFE: &str = "unsafe/";

/// Prefix marking a metadata request
pub const PREFIX_META: &str = "meta/";

/// Keyword enabling smart cropping
pub const PART_SMART: &str = "smart";

/// Keyword enabling trim
pub const PART_TRIM: &str = "trim";

/// Keyword introducing the filter list
pub const PART_FILTERS: &str = "filters";

/// Substituted for a dimension that keeps the original size
pub const PART_ORIGINAL_SIZE: &str = "orig";

/// Host used when none is configured (root-relative output)
pub const DEFAULT_HOST: &str = "/";

// =============================================================================
// Validation limits
// =============================================================================

/// Maximum trim color tolerance (Euclidean distance between two RGB triples)
pub const MAX_TRIM_TOLERANCE: i32 = 442;

/// Brightness, contrast and rgb channel adjustments are percentages in -100..=100
pub const MAX_PERCENT_ADJUSTMENT: i32 = 100;

/// Maximum blur radius accepted by the server
pub const MAX_BLUR_RADIUS: i32 = 150;

/// Maximum watermark transparency (fully transparent)
pub const MAX_TRANSPARENCY: i32 = 100;

/// Default round corner background color (white)
pub const DEFAULT_ROUND_CORNER_COLOR: u32 = 0xFF_FFFF;

// =============================================================================
// Legacy encryption
// =============================================================================

/// AES-128 key length and block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Pad byte appended to the configuration before legacy encryption
pub const LEGACY_PAD_BYTE: u8 = b'{';

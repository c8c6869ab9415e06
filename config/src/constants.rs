//! # Configuration Constants
//!
//! Centralized constants for point lattice and fixture generation.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Lattice**: Stagger and packing factors for hexagonal grids
//! - **Defaults**: Default radius of circular samplers
//! - **Fixture**: Reference geometry of the three faces sheet

use thiserror::Error;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance for comparing generated positions with their analytic values.
///
/// Trigonometric round trips (angle to cosine and back) lose a few ulps, so
/// geometric checks on sampled points use this looser bound.
pub const POSITION_TOLERANCE: f64 = 1e-9;

// =============================================================================
// LATTICE CONSTANTS
// =============================================================================

/// Fractional column offset applied to every other row of a hexagonal grid.
///
/// # Example
///
/// ```rust
/// use config::constants::HEX_ROW_OFFSET;
///
/// let column = 2.0;
/// assert_eq!(column + HEX_ROW_OFFSET, 2.5);
/// ```
pub const HEX_ROW_OFFSET: f64 = 0.5;

/// Spacing factor between successive rows and layers of a close-packed
/// 3D lattice (`sqrt(3) / 2`).
///
/// # Example
///
/// ```rust
/// use config::constants::HEX_LAYER_SCALE;
///
/// assert!((HEX_LAYER_SCALE * HEX_LAYER_SCALE - 0.75).abs() < 1e-12);
/// ```
pub const HEX_LAYER_SCALE: f64 = 0.866_025_403_784_438_6;

/// Number of padding rows and columns added around a 2D hexagonal grid.
///
/// A grid requested with `nx` columns actually holds `nx + HEX_GRID_PADDING`.
pub const HEX_GRID_PADDING: usize = 2;

// =============================================================================
// DEFAULT CONSTANTS
// =============================================================================

/// Default radius for circles, disks and cylinders.
pub const DEFAULT_RADIUS: f64 = 1.0;


// =============================================================================
// FIXTURE CONSTANTS
// =============================================================================

/// Nominal side length of the hexagons of the three faces sheet.
pub const FIXTURE_SIDE_LENGTH: f64 = 1.0;

/// Tolerance on the side length of the three faces sheet.
///
/// The fixture coordinates are rounded to three decimals (`0.866`,
/// `1.732`), so sides are only accurate to about `1e-4`.
///
/// # Example
///
/// ```rust
/// use config::constants::{FIXTURE_SIDE_LENGTH, FIXTURE_SIDE_TOLERANCE};
///
/// let side = (0.5_f64.powi(2) + 0.866_f64.powi(2)).sqrt();
/// assert!((side - FIXTURE_SIDE_LENGTH).abs() < FIXTURE_SIDE_TOLERANCE);
/// ```
pub const FIXTURE_SIDE_TOLERANCE: f64 = 1e-3;

// =============================================================================
// GENERATION CONFIG
// =============================================================================

/// Immutable snapshot of the tolerances and defaults used by the generators.
///
/// # Examples
/// ```
/// use config::constants::GenerationConfig;
/// let config = GenerationConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    /// Tolerance used when checking fixture geometry.
    pub tolerance: f64,
    /// Radius used when a sampler is not given one.
    pub default_radius: f64,
}

impl GenerationConfig {
    /// Builds a configuration, rejecting non-positive values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GenerationConfig;
    /// let cfg = GenerationConfig::new(1.0e-6, 2.0).expect("valid config");
    /// assert_eq!(cfg.default_radius, 2.0);
    /// ```
    pub fn new(tolerance: f64, default_radius: f64) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(default_radius > 0.0) {
            return Err(ConfigError::InvalidRadius(default_radius));
        }
        Ok(Self {
            tolerance,
            default_radius,
        })
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            tolerance: FIXTURE_SIDE_TOLERANCE,
            default_radius: DEFAULT_RADIUS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    #[error("tolerance must be positive: {0}")]
    InvalidTolerance(f64),
    /// Raised when the default radius is zero, negative or NaN.
    #[error("default radius must be positive: {0}")]
    InvalidRadius(f64),
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if two f64 values agree within an explicit tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::within;
///
/// assert!(within(1.0, 1.0005, 1e-3));
/// assert!(!within(1.0, 1.01, 1e-3));
/// ```
#[inline]
pub fn within(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

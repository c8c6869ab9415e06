//! # Config Crate
//!
//! Centralized configuration constants for tissue seed generation.
//! Lattice staggers, packing factors, default radii and the tolerances used
//! to check generated fixtures are defined here so that the generation crate
//! never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_equal, HEX_ROW_OFFSET, HEX_LAYER_SCALE};
//!
//! // Odd rows of a hexagonal lattice are shifted by half a step
//! let shifted = 3.0 + HEX_ROW_OFFSET;
//! assert_eq!(shifted, 3.5);
//!
//! // Successive layers are packed at sqrt(3)/2 of the nominal spacing
//! assert!(approx_equal(HEX_LAYER_SCALE, 3.0_f64.sqrt() / 2.0));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Stable Defaults**: Radii and packing factors never change between releases
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

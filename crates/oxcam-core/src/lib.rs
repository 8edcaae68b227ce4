//! # oxcam - Oxidized Colour Appearance Models
//!
//! Reference data and spectral types for colour appearance work in Rust.
//!
//! ## Goals
//!
//! - **Faithful**: bundled datasets transcribed from published measurements
//! - **Safe**: pure Rust, validated construction of every spectral table
//! - **Tested**: every dataset checked against published spot values
//!
//! ## Current Status
//!
//! This crate carries the spectral types and the display characterisation
//! datasets. Model verification against published reference tables lives
//! in the companion `cam-tests` crate.
//!
//! ## Quick Start
//!
//! ```
//! use oxcam_core::rgb_display_primaries;
//!
//! let crt = rgb_display_primaries("Typical CRT Brainard 1997").unwrap();
//! let [red, green, blue] = crt.at(445.0).unwrap();
//! assert_eq!(blue, 0.7654);
//! assert!(red < green && green < blue);
//! ```

pub mod characterisation;
pub mod error;
pub mod spectrum;

pub use characterisation::{RGB_DISPLAY_NAMES, RgbDisplayPrimaries, rgb_display_primaries};
pub use error::{Error, Result};
pub use spectrum::{SpectralPowerDistribution, SpectralShape};

/// Version of oxcam
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

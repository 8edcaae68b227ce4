//! Display characterisation datasets
//!
//! Measured tri-spectral power distributions of display primaries, plus a
//! by-name registry with case-insensitive lookup.

pub mod crt;
mod displays;

pub use displays::{RGB_DISPLAY_NAMES, RgbDisplayPrimaries, rgb_display_primaries};

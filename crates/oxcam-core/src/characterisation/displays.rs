//! RGB display primaries
//!
//! A display is characterised by one spectral power distribution per
//! primary, all sampled on a common shape.

use crate::characterisation::crt;
use crate::error::{Error, Result};
use crate::spectrum::{SpectralPowerDistribution, SpectralShape};

/// Tri-spectral power distributions of one display's RGB primaries
#[derive(Debug, Clone, PartialEq)]
pub struct RgbDisplayPrimaries {
    name: String,
    red: SpectralPowerDistribution,
    green: SpectralPowerDistribution,
    blue: SpectralPowerDistribution,
}

impl RgbDisplayPrimaries {
    /// Create display primaries from three equal-shape distributions
    pub fn new(
        name: impl Into<String>,
        red: SpectralPowerDistribution,
        green: SpectralPowerDistribution,
        blue: SpectralPowerDistribution,
    ) -> Result<Self> {
        let shape = red.shape();
        if green.shape() != shape {
            return Err(Error::ChannelShape { channel: "green" });
        }
        if blue.shape() != shape {
            return Err(Error::ChannelShape { channel: "blue" });
        }
        Ok(Self {
            name: name.into(),
            red,
            green,
            blue,
        })
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Common sampling domain of the three channels
    pub fn shape(&self) -> SpectralShape {
        self.red.shape()
    }

    /// Red primary distribution
    pub fn red(&self) -> &SpectralPowerDistribution {
        &self.red
    }

    /// Green primary distribution
    pub fn green(&self) -> &SpectralPowerDistribution {
        &self.green
    }

    /// Blue primary distribution
    pub fn blue(&self) -> &SpectralPowerDistribution {
        &self.blue
    }

    /// `[red, green, blue]` power at the given wavelength
    pub fn at(&self, wavelength: f64) -> Option<[f64; 3]> {
        Some([
            self.red.at(wavelength)?,
            self.green.at(wavelength)?,
            self.blue.at(wavelength)?,
        ])
    }
}

/// Names of the bundled display datasets
pub const RGB_DISPLAY_NAMES: &[&str] = &[crt::TYPICAL_CRT_BRAINARD_1997];

/// Get a bundled display dataset by name (ASCII case-insensitive)
pub fn rgb_display_primaries(name: &str) -> Option<RgbDisplayPrimaries> {
    if name.eq_ignore_ascii_case(crt::TYPICAL_CRT_BRAINARD_1997) {
        Some(crt::typical_crt_brainard_1997())
    } else {
        None
    }
}

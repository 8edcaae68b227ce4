//! Spectral Power Distributions
//!
//! A spectral power distribution maps wavelengths to relative power,
//! sampled on a uniform shape (start, end, interval in nanometres).
//! Display characterisation data ships as one distribution per channel.

use crate::error::{Error, Result};

/// Uniform wavelength sampling domain in nanometres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralShape {
    /// First sampled wavelength
    pub start: f64,
    /// Last sampled wavelength
    pub end: f64,
    /// Sampling interval
    pub interval: f64,
}

impl SpectralShape {
    /// Create a new spectral shape
    pub const fn new(start: f64, end: f64, interval: f64) -> Self {
        Self {
            start,
            end,
            interval,
        }
    }

    /// Validate the shape: ascending range, positive interval, whole
    /// number of samples
    pub fn validate(&self) -> Result<()> {
        let invalid = Error::InvalidShape {
            start: self.start,
            end: self.end,
            interval: self.interval,
        };
        if !(self.interval > 0.0) || self.end < self.start {
            return Err(invalid);
        }
        let steps = (self.end - self.start) / self.interval;
        if (steps - steps.round()).abs() > 1e-9 {
            return Err(invalid);
        }
        Ok(())
    }

    /// Number of sampled wavelengths
    pub fn len(&self) -> usize {
        ((self.end - self.start) / self.interval).round() as usize + 1
    }

    /// True when the shape holds no samples
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Sample index of the given wavelength, `None` when it is outside
    /// the domain or off the sampling grid
    pub fn index_of(&self, wavelength: f64) -> Option<usize> {
        if wavelength < self.start || wavelength > self.end {
            return None;
        }
        let offset = (wavelength - self.start) / self.interval;
        let index = offset.round();
        if (offset - index).abs() > 1e-9 {
            return None;
        }
        Some(index as usize)
    }

    /// Iterate the sampled wavelengths in ascending order
    pub fn wavelengths(&self) -> impl Iterator<Item = f64> + '_ {
        let start = self.start;
        let interval = self.interval;
        (0..self.len()).map(move |i| start + interval * i as f64)
    }
}

impl std::fmt::Display for SpectralShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.start, self.end, self.interval)
    }
}

/// A named spectral power distribution over a uniform shape
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralPowerDistribution {
    name: String,
    shape: SpectralShape,
    values: Vec<f64>,
}

impl SpectralPowerDistribution {
    /// Create a distribution, validating the table against the shape
    pub fn new(
        name: impl Into<String>,
        shape: SpectralShape,
        values: impl Into<Vec<f64>>,
    ) -> Result<Self> {
        shape.validate()?;
        let values = values.into();
        if values.len() != shape.len() {
            return Err(Error::ShapeMismatch {
                expected: shape.len(),
                actual: values.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            shape,
            values,
        })
    }

    /// Distribution name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sampling domain
    pub fn shape(&self) -> SpectralShape {
        self.shape
    }

    /// Sampled values in wavelength order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the distribution holds no samples
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Power at the given wavelength, `None` off the sampling grid
    pub fn at(&self, wavelength: f64) -> Option<f64> {
        self.shape
            .index_of(wavelength)
            .map(|index| self.values[index])
    }

    /// Iterate `(wavelength, value)` pairs in ascending wavelength order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.shape.wavelengths().zip(self.values.iter().copied())
    }
}

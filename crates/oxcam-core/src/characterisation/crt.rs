//! CRT display RGB primaries
//!
//! Measured tri-spectral power distributions of a typical CRT display,
//! 380-780 nm at 5 nm steps. Measurements by Brainard (1997), tabulated
//! in Machado (2010), "A model for simulation of color vision deficiency
//! and a color contrast enhancement technique for dichromats".

use crate::characterisation::displays::RgbDisplayPrimaries;
use crate::spectrum::{SpectralPowerDistribution, SpectralShape};

/// Name of the typical CRT dataset
pub const TYPICAL_CRT_BRAINARD_1997: &str = "Typical CRT Brainard 1997";

/// Sampling domain shared by all three channels
pub const CRT_SHAPE: SpectralShape = SpectralShape::new(380.0, 780.0, 5.0);

static TYPICAL_CRT_RED: [f64; 81] = [
    0.0025, 0.0017, 0.0017, 0.0011, 0.0017, 0.0028, 0.0037, 0.0046, 0.0064,
    0.0079, 0.0094, 0.0105, 0.0113, 0.0115, 0.0113, 0.0113, 0.0115, 0.0164,
    0.0162, 0.0120, 0.0091, 0.0119, 0.0174, 0.0218, 0.0130, 0.0123, 0.0260,
    0.0242, 0.0125, 0.0119, 0.0201, 0.0596, 0.0647, 0.0251, 0.0248, 0.0325,
    0.0199, 0.0161, 0.0128, 0.0217, 0.0693, 0.1220, 0.1861, 0.2173, 0.0777,
    0.0531, 0.2434, 0.5812, 0.9354, 1.6054, 0.6464, 0.1100, 0.0322, 0.0207,
    0.0194, 0.0196, 0.0166, 0.0173, 0.0220, 0.0186, 0.0377, 0.0782, 0.0642,
    0.1214, 0.7169, 1.1098, 0.3106, 0.0241, 0.0180, 0.0149, 0.0108, 0.0097,
    0.0091, 0.0093, 0.0083, 0.0073, 0.0081, 0.0067, 0.0070, 0.0073, 0.0066,
];

static TYPICAL_CRT_GREEN: [f64; 81] = [
    0.0018, 0.0016, 0.0020, 0.0021, 0.0025, 0.0030, 0.0043, 0.0059, 0.0079,
    0.0104, 0.0126, 0.0147, 0.0170, 0.0191, 0.0220, 0.0267, 0.0340, 0.0462,
    0.0649, 0.0936, 0.1345, 0.1862, 0.2485, 0.3190, 0.3964, 0.4691, 0.5305,
    0.5826, 0.6195, 0.6386, 0.6414, 0.6348, 0.6189, 0.5932, 0.5562, 0.5143,
    0.4606, 0.3993, 0.3297, 0.2719, 0.2214, 0.1769, 0.1407, 0.1155, 0.0938,
    0.0759, 0.0614, 0.0522, 0.0455, 0.0437, 0.0278, 0.0180, 0.0136, 0.0107,
    0.0085, 0.0067, 0.0055, 0.0044, 0.0039, 0.0033, 0.0030, 0.0028, 0.0023,
    0.0028, 0.0078, 0.0113, 0.0039, 0.0011, 0.0009, 0.0008, 0.0009, 0.0011,
    0.0009, 0.0010, 0.0011, 0.0013, 0.0015, 0.0018, 0.0021, 0.0015, 0.0018,
];

static TYPICAL_CRT_BLUE: [f64; 81] = [
    0.0219, 0.0336, 0.0524, 0.0785, 0.1130, 0.1624, 0.2312, 0.3214, 0.4263,
    0.5365, 0.6296, 0.6994, 0.7470, 0.7654, 0.7519, 0.7151, 0.6619, 0.5955,
    0.5177, 0.4327, 0.3507, 0.2849, 0.2278, 0.1809, 0.1408, 0.1084, 0.0855,
    0.0676, 0.0537, 0.0422, 0.0341, 0.0284, 0.0238, 0.0197, 0.0165, 0.0143,
    0.0119, 0.0099, 0.0079, 0.0065, 0.0057, 0.0051, 0.0047, 0.0043, 0.0029,
    0.0023, 0.0036, 0.0061, 0.0088, 0.0141, 0.0060, 0.0015, 0.0008, 0.0006,
    0.0006, 0.0007, 0.0006, 0.0005, 0.0006, 0.0005, 0.0007, 0.0010, 0.0010,
    0.0016, 0.0060, 0.0094, 0.0030, 0.0007, 0.0009, 0.0008, 0.0011, 0.0010,
    0.0010, 0.0012, 0.0013, 0.0012, 0.0016, 0.0015, 0.0028, 0.0046, 0.0058,
];

/// Build the Typical CRT Brainard 1997 dataset
pub fn typical_crt_brainard_1997() -> RgbDisplayPrimaries {
    // The tables above are 81 samples each, matching CRT_SHAPE exactly.
    let channel = |name: &str, values: &[f64]| {
        SpectralPowerDistribution::new(name, CRT_SHAPE, values.to_vec())
            .expect("bundled CRT table matches CRT_SHAPE")
    };
    RgbDisplayPrimaries::new(
        TYPICAL_CRT_BRAINARD_1997,
        channel("red", &TYPICAL_CRT_RED),
        channel("green", &TYPICAL_CRT_GREEN),
        channel("blue", &TYPICAL_CRT_BLUE),
    )
    .expect("bundled CRT channels share CRT_SHAPE")
}

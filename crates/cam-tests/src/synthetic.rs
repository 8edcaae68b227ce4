//! Synthetic fixture generation
//!
//! Deterministic, seeded fixture tables for exercising the loader and
//! driver without shipping real reference data. Same seed, same table.

use std::io;
use std::path::{Path, PathBuf};

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Build a CSV fixture table with a `Case` column plus the given numeric
/// columns, values drawn from a seeded generator
pub fn synthetic_table(seed: u64, cases: usize, columns: &[&str]) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut out = String::from("Case");
    for column in columns {
        out.push(',');
        out.push_str(column);
    }
    out.push('\n');

    for case in 1..=cases {
        out.push_str(&case.to_string());
        for _ in columns {
            let value: f64 = rng.gen_range(0.0..100.0);
            out.push_str(&format!(",{:.4}", value));
        }
        out.push('\n');
    }
    out
}

/// Write a synthetic table under `directory`, returning the file path
pub fn write_synthetic_fixture(
    directory: &Path,
    file_name: &str,
    seed: u64,
    cases: usize,
    columns: &[&str],
) -> io::Result<PathBuf> {
    let path = directory.join(file_name);
    std::fs::write(&path, synthetic_table(seed, cases, columns))?;
    Ok(path)
}

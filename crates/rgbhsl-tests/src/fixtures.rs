//! Known-answer fixtures
//!
//! Loads `data/reference_colors.json`, a list of RGB inputs with their exact
//! HSL conversion and the RGB obtained by converting that HSL back.

use anyhow::{Context, Result};
use rgbhsl_core::{HslColor, RgbColor};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One known conversion
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceCase {
    /// Short identifier
    pub name: String,
    /// RGB input
    pub rgb: [u8; 3],
    /// Expected `rgb_to_hsl(rgb)`
    pub hsl: [u16; 3],
    /// Expected `hsl_to_rgb(hsl)`
    pub rgb_back: [u8; 3],
}

impl ReferenceCase {
    pub fn rgb_color(&self) -> RgbColor {
        RgbColor::from(self.rgb)
    }

    pub fn hsl_color(&self) -> Result<HslColor> {
        HslColor::try_from(self.hsl).with_context(|| format!("case {}", self.name))
    }

    pub fn rgb_back_color(&self) -> RgbColor {
        RgbColor::from(self.rgb_back)
    }
}

#[derive(Debug, Deserialize)]
struct ReferenceSet {
    cases: Vec<ReferenceCase>,
}

/// Directory holding fixture files
pub fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load every case from `data/reference_colors.json`
pub fn load_reference_cases() -> Result<Vec<ReferenceCase>> {
    load_cases_from(&data_dir().join("reference_colors.json"))
}

/// Load cases from a fixture file
pub fn load_cases_from(path: &Path) -> Result<Vec<ReferenceCase>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let set: ReferenceSet =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(set.cases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_loads() {
        let cases = load_reference_cases().expect("load fixtures");
        assert!(cases.len() >= 10);
        assert!(cases.iter().any(|c| c.name == "mid_gray"));
        for case in &cases {
            case.hsl_color().expect("fixture hsl in range");
        }
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_cases_from(Path::new("/nonexistent/cases.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/cases.json"));
    }
}

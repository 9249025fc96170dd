use crate::color::{Argb, Rgb};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ProbeToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Pixels to sample after edits are applied.
    #[serde(default)]
    pub probes: Vec<Probe>,
    /// Pixels to overwrite, in order.
    #[serde(default)]
    pub edits: Vec<EditConfig>,
    #[serde(default)]
    pub output: ProbeOutputConfig,
    /// Open a viewer window on the edited image.
    #[serde(default)]
    pub show: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Probe {
    pub x: i64,
    pub y: i64,
}

/// A single pixel write; exactly one of `rgb` / `argb` must be present.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct EditConfig {
    pub x: i64,
    pub y: i64,
    pub rgb: Option<Rgb>,
    pub argb: Option<Argb>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditColor {
    Rgb(Rgb),
    Argb(Argb),
}

impl EditConfig {
    pub fn color(&self) -> Result<EditColor, String> {
        match (self.rgb, self.argb) {
            (Some(rgb), None) => Ok(EditColor::Rgb(rgb)),
            (None, Some(argb)) => Ok(EditColor::Argb(argb)),
            _ => Err(format!(
                "Edit at ({}, {}) needs exactly one of \"rgb\" or \"argb\"",
                self.x, self.y
            )),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProbeOutputConfig {
    /// Where to save the edited image; the extension picks the format.
    #[serde(rename = "image")]
    pub image: Option<PathBuf>,
    #[serde(rename = "report_json")]
    pub report_json: Option<PathBuf>,
}

pub fn parse_config(data: &str) -> Result<ProbeToolConfig, String> {
    let config: ProbeToolConfig =
        serde_json::from_str(data).map_err(|e| format!("Invalid config: {e}"))?;
    for edit in &config.edits {
        edit.color()?;
    }
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<ProbeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(r#"{ "input": "in.png" }"#).expect("valid config");
        assert_eq!(cfg.input, PathBuf::from("in.png"));
        assert!(cfg.probes.is_empty());
        assert!(cfg.edits.is_empty());
        assert!(cfg.output.image.is_none());
        assert!(cfg.output.report_json.is_none());
        assert!(!cfg.show);
    }

    #[test]
    fn full_config_parses() {
        let cfg = parse_config(
            r#"{
                "input": "in.png",
                "probes": [{ "x": 0, "y": 1 }],
                "edits": [
                    { "x": 0, "y": 0, "rgb": [10, 20, 30] },
                    { "x": 1, "y": 0, "argb": [128, 10, 20, 30] }
                ],
                "output": { "image": "out.bmp", "report_json": "out/report.json" },
                "show": true
            }"#,
        )
        .expect("valid config");
        assert_eq!(cfg.probes, vec![Probe { x: 0, y: 1 }]);
        assert_eq!(cfg.edits[0].color(), Ok(EditColor::Rgb([10, 20, 30])));
        assert_eq!(cfg.edits[1].color(), Ok(EditColor::Argb([128, 10, 20, 30])));
        assert_eq!(cfg.output.image, Some(PathBuf::from("out.bmp")));
        assert!(cfg.show);
    }

    #[test]
    fn edit_needs_exactly_one_color() {
        let both = r#"{ "input": "a.png",
            "edits": [{ "x": 0, "y": 0, "rgb": [1, 2, 3], "argb": [1, 2, 3, 4] }] }"#;
        assert!(parse_config(both).is_err());
        let none = r#"{ "input": "a.png", "edits": [{ "x": 0, "y": 0 }] }"#;
        assert!(parse_config(none).is_err());
    }

    #[test]
    fn channel_values_above_255_are_rejected() {
        let cfg = r#"{ "input": "a.png", "edits": [{ "x": 0, "y": 0, "rgb": [256, 0, 0] }] }"#;
        assert!(parse_config(cfg).is_err());
    }
}

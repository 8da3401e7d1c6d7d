//! JSON runtime configuration for the `pixmap_pipeline` binary.
use crate::decode::DecodeOptions;
use crate::transform::Op;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct PipelineConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub decode: DecodeOptions,
    #[serde(default)]
    pub ops: Vec<Op>,
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Rendered image destination.
    pub png: Option<PathBuf>,
    /// Stage-timing report destination.
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<PipelineConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::ShortData;

    #[test]
    fn parses_full_config() {
        let json = r#"{
            "input": "picture.txt",
            "decode": { "short_data": "truncate_rows" },
            "ops": ["negative", {"blur": {"passes": 2}}],
            "output": { "png": "out/picture.png" }
        }"#;
        let config: PipelineConfig = serde_json::from_str(json).expect("parse config");
        assert_eq!(config.input, PathBuf::from("picture.txt"));
        assert_eq!(config.decode.short_data, ShortData::TruncateRows);
        assert_eq!(config.ops.len(), 2);
        assert!(config.output.report_json.is_none());
    }

    #[test]
    fn decode_and_ops_are_optional() {
        let json = r#"{ "input": "a.txt", "output": {} }"#;
        let config: PipelineConfig = serde_json::from_str(json).expect("parse config");
        assert_eq!(config.decode.short_data, ShortData::Error);
        assert!(config.ops.is_empty());
    }
}

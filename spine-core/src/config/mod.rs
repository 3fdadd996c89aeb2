pub mod schema;

use anyhow::{Context, Result};
pub use schema::{AnchorMode, ChainConfig};

/// Parse and validate a chain configuration from YAML.
pub fn load_from_yaml_str(s: &str) -> Result<ChainConfig> {
    let cfg: ChainConfig = serde_yaml::from_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<ChainConfig> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading chain config {}", path.display()))?;
    load_from_yaml_str(&data).with_context(|| format!("parsing chain config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = load_from_yaml_str("{}").unwrap();
        assert_eq!(cfg.joint_count, 7);
        assert_eq!(cfg.search_steps, 50);
        assert_eq!(cfg.anchor, AnchorMode::Dual);
        assert!((cfg.segment_length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn single_anchor_with_offset() {
        let yaml = "
joint_count: 10
total_length: 20.0
min_bend_angle: 120
stiffness: 0.5
anchor:
  mode: single
  offset: 0.75
";
        let cfg = load_from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.anchor, AnchorMode::Single { offset: Some(0.75) });
        assert!((cfg.segment_length() - 2.0).abs() < 1e-6);
        assert!((cfg.anchor_offset() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn single_anchor_offset_defaults_to_segment_length() {
        let cfg = load_from_yaml_str("total_length: 14\nanchor:\n  mode: single\n").unwrap();
        assert!((cfg.anchor_offset() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = load_from_yaml_str("joint_count: 2").unwrap_err();
        assert_eq!(err.downcast_ref::<ConfigError>(), Some(&ConfigError::JointCount(2)));
        let err = load_from_yaml_str("stiffness: 1.5").unwrap_err();
        assert_eq!(err.downcast_ref::<ConfigError>(), Some(&ConfigError::Stiffness(1.5)));
    }

    #[test]
    fn shipped_configs_load() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../configs");
        let eel = load_from_path(dir.join("eel.yaml")).unwrap();
        assert_eq!(eel.joint_count, 16);
        let worm = load_from_path(dir.join("worm.yaml")).unwrap();
        assert_eq!(worm.anchor, AnchorMode::Single { offset: Some(0.35) });
        assert_eq!(worm.search_steps, 50);
    }

    #[test]
    fn unknown_fields_fail_to_parse() {
        assert!(load_from_yaml_str("bones: 7").is_err());
    }
}

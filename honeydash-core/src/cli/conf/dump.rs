use crate::conf::{DashboardConfig, load_config};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
    Json,
    Yaml,
}

pub fn dump(path: PathBuf, json: bool, yaml: bool) -> anyhow::Result<()> {
    let cfg = load_config(&path)?;

    // JSON unless YAML was asked for explicitly.
    let format = if yaml && !json {
        DumpFormat::Yaml
    } else {
        DumpFormat::Json
    };

    println!("{}", render(&cfg, format)?.trim_end());
    Ok(())
}

pub fn render(cfg: &DashboardConfig, format: DumpFormat) -> anyhow::Result<String> {
    let s = match format {
        DumpFormat::Json => serde_json::to_string_pretty(cfg)?,
        DumpFormat::Yaml => serde_yaml::to_string(cfg)?,
    };
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_dump_omits_unset_options() {
        let cfg = DashboardConfig::default();

        let out = render(&cfg, DumpFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["server"]["listen"], "0.0.0.0:5000");
        assert!(value["server"].get("threads").is_none());
        assert!(value["source"]["log_path"].is_string());
    }

    #[test]
    fn yaml_dump_lists_both_blocks() {
        let mut cfg = DashboardConfig::default();
        cfg.server.threads = Some(2);

        let out = render(&cfg, DumpFormat::Yaml).unwrap();

        assert!(out.contains("server:"));
        assert!(out.contains("threads: 2"));
        assert!(out.contains("source:"));
    }
}

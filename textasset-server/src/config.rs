// Copyright 2026 The Textasset Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_ASSET_ROOT: &str = "assets";
pub const DEFAULT_LISTEN_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 9110);

/// ServerConfig is the on-disk configuration for the textasset binary.
#[derive(PartialEq, Eq, Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub asset_root: PathBuf,
    pub listen_addr: SocketAddr,
    /// mode handed to the reader when a request doesn't name one
    pub default_mode: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            listen_addr: SocketAddr::from(DEFAULT_LISTEN_ADDR),
            default_mode: String::new(),
        }
    }
}

pub fn load_config_sync(path: &Path) -> Result<ServerConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(path, &contents).with_context(|| format!("parsing config {}", path.display()))
}

/// parse_config picks YAML or JSON based on the extension of `path`.
fn parse_config(path: &Path, contents: &str) -> Result<ServerConfig> {
    let config_ext = path.extension().unwrap_or_default();
    let config = if config_ext == "yaml" || config_ext == "yml" {
        serde_yaml::from_str(contents)?
    } else {
        serde_json::from_str(contents)?
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_config() {
        let config = parse_config(
            Path::new("textasset.json"),
            r#"{"asset_root": "/srv/assets", "listen_addr": "0.0.0.0:8080"}"#,
        )
        .unwrap();
        assert_eq!(PathBuf::from("/srv/assets"), config.asset_root);
        assert_eq!("0.0.0.0:8080".parse::<SocketAddr>().unwrap(), config.listen_addr);
        assert_eq!("", config.default_mode);
    }

    #[test]
    fn yaml_config() {
        let config = parse_config(
            Path::new("textasset.yml"),
            "asset_root: bundled\ndefault_mode: r\n",
        )
        .unwrap();
        assert_eq!(PathBuf::from("bundled"), config.asset_root);
        assert_eq!(SocketAddr::from(DEFAULT_LISTEN_ADDR), config.listen_addr);
        assert_eq!("r", config.default_mode);
    }

    #[test]
    fn empty_json_object_is_all_defaults() {
        let config = parse_config(Path::new("c.json"), "{}").unwrap();
        assert_eq!(ServerConfig::default(), config);
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(parse_config(Path::new("c.json"), r#"{"asset_rot": "x"}"#).is_err());
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("textasset.yaml");
        std::fs::write(&path, "listen_addr: 127.0.0.1:0\n").unwrap();

        let config = load_config_sync(&path).unwrap();
        assert_eq!(0, config.listen_addr.port());

        let err = load_config_sync(&dir.path().join("missing.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("missing.json"));
    }
}

// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Daemon configuration.
//!
//! Values come from an optional YAML file (`DD_CATALOG_CONFIG_FILE`) and are then
//! overridden by environment variables. Anything unset falls back to a default.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Tcp,
    Unix,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogdConfig {
    pub transport_mode: TransportMode,
    /// Listen address in TCP mode.
    pub grpc_addr: String,
    /// Socket path in Unix mode.
    pub grpc_socket: String,
    pub log_level: String,
    /// YAML list of products loaded at startup.
    pub seed_file: Option<PathBuf>,
}

impl Default for CatalogdConfig {
    fn default() -> Self {
        Self {
            transport_mode: TransportMode::default(),
            grpc_addr: crate::DEFAULT_GRPC_ADDR.to_string(),
            grpc_socket: crate::DEFAULT_GRPC_SOCKET.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            seed_file: None,
        }
    }
}

impl CatalogdConfig {
    /// Load file + environment configuration and validate it.
    pub fn load() -> Result<Self> {
        let mut config = match env::var("DD_CATALOG_CONFIG_FILE") {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: CatalogdConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Some(mode) = env::var("DD_CATALOG_TRANSPORT_MODE")
            .ok()
            .and_then(|s| match s.to_lowercase().as_str() {
                "tcp" => Some(TransportMode::Tcp),
                "unix" => Some(TransportMode::Unix),
                _ => None,
            })
        {
            self.transport_mode = mode;
        }
        if let Ok(addr) = env::var("DD_CATALOG_GRPC_ADDR") {
            self.grpc_addr = addr;
        }
        if let Ok(socket) = env::var("DD_CATALOG_GRPC_SOCKET") {
            self.grpc_socket = socket;
        }
        // Priority: DD_CATALOG_LOG_LEVEL > RUST_LOG > file/default
        if let Ok(level) = env::var("DD_CATALOG_LOG_LEVEL").or_else(|_| env::var("RUST_LOG")) {
            self.log_level = level;
        }
        if let Ok(seed) = env::var("DD_CATALOG_SEED_FILE") {
            self.seed_file = Some(PathBuf::from(seed));
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self.transport_mode {
            TransportMode::Tcp => {
                self.socket_addr()?;
            }
            TransportMode::Unix => {
                if self.grpc_socket.trim().is_empty() {
                    bail!("grpc_socket must not be empty in unix transport mode");
                }
            }
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.grpc_addr
            .parse()
            .with_context(|| format!("invalid grpc_addr '{}'", self.grpc_addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 7] = [
        "DD_CATALOG_CONFIG_FILE",
        "DD_CATALOG_TRANSPORT_MODE",
        "DD_CATALOG_GRPC_ADDR",
        "DD_CATALOG_GRPC_SOCKET",
        "DD_CATALOG_LOG_LEVEL",
        "DD_CATALOG_SEED_FILE",
        "RUST_LOG",
    ];

    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let mut all: Vec<(&str, Option<&str>)> = ALL_VARS.iter().map(|k| (*k, None)).collect();
        for &(k, v) in vars {
            all.retain(|(name, _)| *name != k);
            all.push((k, Some(v)));
        }
        temp_env::with_vars(all, f);
    }

    #[test]
    fn test_default_config() {
        with_env(&[], || {
            let config = CatalogdConfig::load().unwrap();
            assert_eq!(config.transport_mode, TransportMode::Tcp);
            assert_eq!(config.grpc_addr, "127.0.0.1:50052");
            assert_eq!(config.grpc_socket, "/var/run/datadog/product-catalog.sock");
            assert_eq!(config.log_level, "info");
            assert!(config.seed_file.is_none());
        });
    }

    #[test]
    fn test_env_overrides() {
        with_env(
            &[
                ("DD_CATALOG_TRANSPORT_MODE", "UNIX"),
                ("DD_CATALOG_GRPC_SOCKET", "/tmp/catalog.sock"),
                ("DD_CATALOG_SEED_FILE", "/etc/catalog/seed.yaml"),
            ],
            || {
                let config = CatalogdConfig::load().unwrap();
                assert_eq!(config.transport_mode, TransportMode::Unix);
                assert_eq!(config.grpc_socket, "/tmp/catalog.sock");
                assert_eq!(
                    config.seed_file.as_deref(),
                    Some(Path::new("/etc/catalog/seed.yaml"))
                );
            },
        );
    }

    #[test]
    fn test_unknown_transport_mode_keeps_default() {
        with_env(&[("DD_CATALOG_TRANSPORT_MODE", "carrier-pigeon")], || {
            let config = CatalogdConfig::load().unwrap();
            assert_eq!(config.transport_mode, TransportMode::Tcp);
        });
    }

    #[test]
    fn test_log_level_priority() {
        with_env(&[("RUST_LOG", "debug")], || {
            assert_eq!(CatalogdConfig::load().unwrap().log_level, "debug");
        });
        with_env(
            &[("RUST_LOG", "debug"), ("DD_CATALOG_LOG_LEVEL", "warn")],
            || {
                assert_eq!(CatalogdConfig::load().unwrap().log_level, "warn");
            },
        );
    }

    #[test]
    fn test_file_then_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogd.yaml");
        std::fs::write(
            &path,
            "transport_mode: tcp\ngrpc_addr: 0.0.0.0:6000\nlog_level: debug\n",
        )
        .unwrap();
        let path_str = path.to_str().unwrap();

        with_env(&[("DD_CATALOG_CONFIG_FILE", path_str)], || {
            let config = CatalogdConfig::load().unwrap();
            assert_eq!(config.grpc_addr, "0.0.0.0:6000");
            assert_eq!(config.log_level, "debug");
        });

        with_env(
            &[
                ("DD_CATALOG_CONFIG_FILE", path_str),
                ("DD_CATALOG_GRPC_ADDR", "127.0.0.1:7000"),
            ],
            || {
                let config = CatalogdConfig::load().unwrap();
                assert_eq!(config.grpc_addr, "127.0.0.1:7000");
                assert_eq!(config.log_level, "debug");
            },
        );
    }

    #[test]
    fn test_unknown_file_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogd.yaml");
        std::fs::write(&path, "grpc_port: 50052\n").unwrap();
        assert!(CatalogdConfig::from_file(&path).is_err());
    }

    #[test]
    fn test_validate() {
        let config = CatalogdConfig {
            grpc_addr: "not an address".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CatalogdConfig {
            transport_mode: TransportMode::Unix,
            grpc_socket: "  ".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        assert!(CatalogdConfig::default().validate().is_ok());
    }
}

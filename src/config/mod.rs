//! Harness configuration: rc file plus environment overlay, and the typed
//! per-run snapshot resolved from it.

use std::{
    collections::HashMap,
    env, fs,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use directories::BaseDirs;

use crate::error::{GenError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self::load_from(default_config_path())
    }

    fn load_from(config_path: PathBuf) -> Self {
        let mut map = default_map();

        // Read .adbgenrc if exists
        if config_path.exists() {
            if let Ok(file) = fs::File::open(&config_path) {
                let reader = BufReader::new(file);
                for line in reader.lines().flatten() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((k, v)) = line.split_once('=') {
                        map.insert(k.trim().to_string(), v.trim().to_string());
                    }
                }
            }
        }

        // Overlay environment variables (take precedence)
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map, config_path }
    }

    /// Build a config from an explicit map, bypassing rc file and
    /// environment. Used by tests and embedding harnesses.
    pub fn from_map(map: HashMap<String, String>) -> Self {
        Self { inner: map, config_path: default_config_path() }
    }

    // load() already overlays the environment into the map, so lookups
    // stay within it; configs built from explicit maps see no ambient
    // environment at all.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).cloned()
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.parse::<u64>().ok())
    }

    pub fn require(&self, key: &str) -> Result<String> {
        self.get(key).filter(|v| !v.trim().is_empty()).ok_or_else(|| {
            GenError::Configuration(format!(
                "missing required config key {key}; set it in env or {}",
                self.config_path.display()
            ))
        })
    }
}

fn is_config_key(k: &str) -> bool {
    const KEYS: &[&str] = &[
        "LPAR",
        "DB2_SUBSYSTEM_ID",
        "DB2_VERSION",
        "DB2_HOST",
        "TSO_USER_ID",
        "TSO_PASSWORD",
        "ACCEPT_FL",
        "ZOSMF_HOST",
        "GEN_SERVICE_URL",
        "GEN_SQLID",
        "REQUEST_TIMEOUT",
    ];

    KEYS.contains(&k) || k.starts_with("DB2_PORT_") || k.starts_with("ADBGEN_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("adbgen").join(".adbgenrc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();
    m.insert("REQUEST_TIMEOUT".into(), "60".into());
    m
}

/// Typed snapshot of the configuration a run needs, resolved once up front.
/// The stored procedure wants a four-character release; two-character
/// values from older configs are padded with the `15` mod level.
#[derive(Debug, Clone)]
pub struct GenDefaults {
    pub lpar: String,
    pub subsystem: String,
    pub db2_release: String,
    pub tso_user: String,
    pub accept_level: String,
    /// Schema qualifier of the ADB2RE procedure; defaults to the TSO user.
    pub sqlid: String,
}

impl GenDefaults {
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let lpar = cfg.require("LPAR")?;
        let subsystem = cfg.require("DB2_SUBSYSTEM_ID")?;
        let mut db2_release = cfg.require("DB2_VERSION")?;
        if db2_release.len() == 2 {
            db2_release.push_str("15");
        }
        let tso_user = cfg.require("TSO_USER_ID")?;
        let accept_level = cfg.require("ACCEPT_FL")?;
        let sqlid = cfg.get("GEN_SQLID").unwrap_or_else(|| tso_user.clone());
        Ok(Self { lpar, subsystem, db2_release, tso_user, accept_level, sqlid })
    }

    /// DDF location name, `<lpar><ssid>`.
    pub fn server_location(&self, ssid: &str) -> String {
        format!("{}{}", self.lpar, ssid)
    }
}

/// Connection endpoint for one Db2 subsystem. The port table lives in the
/// config as one `DB2_PORT_<SSID>` entry per subsystem.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    pub location: String,
}

impl Endpoint {
    pub fn resolve(cfg: &Config, defaults: &GenDefaults, ssid: &str) -> Result<Self> {
        let port = cfg
            .get(&format!("DB2_PORT_{ssid}"))
            .and_then(|v| v.parse::<u16>().ok())
            .ok_or_else(|| {
                GenError::Configuration(format!("no DB2_PORT_{ssid} mapping for subsystem {ssid}"))
            })?;
        let host = cfg.get("DB2_HOST").unwrap_or_else(|| defaults.lpar.clone());
        Ok(Self { host, port, location: defaults.server_location(ssid) })
    }
}

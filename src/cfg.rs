use std::{env, fs, path::Path, time::Duration};

use anyhow::{Context, Result};
use pmap_entities::geo::MapPoint;
use pmap_gateways::directory::Credentials;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://api.yelp.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

// Downtown Vancouver, where the seed places are.
const DEFAULT_FALLBACK_LAT: f64 = 49.2827;
const DEFAULT_FALLBACK_LNG: f64 = -123.1207;
const DEFAULT_ZOOM: u8 = 13;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub map: MapConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectoryConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub consumer_key: String,
    #[serde(default)]
    pub consumer_secret: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub token_secret: String,
    #[serde(
        default = "default_timeout",
        deserialize_with = "duration_str::deserialize_duration"
    )]
    pub timeout: Duration,
}

impl DirectoryConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            consumer_key: self.consumer_key.clone(),
            consumer_secret: self.consumer_secret.clone(),
            token: self.token.clone(),
            token_secret: self.token_secret.clone(),
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            consumer_key: String::new(),
            consumer_secret: String::new(),
            token: String::new(),
            token_secret: String::new(),
            timeout: default_timeout(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapConfig {
    #[serde(default = "default_fallback_lat")]
    pub fallback_lat: f64,
    #[serde(default = "default_fallback_lng")]
    pub fallback_lng: f64,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

impl MapConfig {
    pub fn fallback_center(&self) -> MapPoint {
        MapPoint::from_lat_lng_deg(self.fallback_lat, self.fallback_lng)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            fallback_lat: default_fallback_lat(),
            fallback_lng: default_fallback_lng(),
            zoom: default_zoom(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

const fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

const fn default_fallback_lat() -> f64 {
    DEFAULT_FALLBACK_LAT
}

const fn default_fallback_lng() -> f64 {
    DEFAULT_FALLBACK_LNG
}

const fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}

/// Loads the configuration file (if present) and applies environment
/// overrides for the directory settings.
pub fn load(path: &Path) -> Result<Config> {
    let mut cfg = if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Unable to read configuration file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Unable to parse configuration file {}", path.display()))?
    } else {
        Config::default()
    };
    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

fn apply_env_overrides(cfg: &mut Config) {
    let overrides = [
        ("PLACEMAP_DIRECTORY_BASE_URL", &mut cfg.directory.base_url),
        ("PLACEMAP_CONSUMER_KEY", &mut cfg.directory.consumer_key),
        (
            "PLACEMAP_CONSUMER_SECRET",
            &mut cfg.directory.consumer_secret,
        ),
        ("PLACEMAP_TOKEN", &mut cfg.directory.token),
        ("PLACEMAP_TOKEN_SECRET", &mut cfg.directory.token_secret),
    ];
    for (var, target) in overrides {
        if let Ok(value) = env::var(var) {
            *target = value;
        }
    }
}

// src/config.rs
use std::path::Path;

use serde::Deserialize;

use crate::consts::DEFAULT_CHANNEL;
use crate::enums::Mode;
use crate::error::CodecError;

/// Startup configuration, owned and injected by the embedding application.
///
/// The legacy layer cached the build channel in host-application global
/// state on first read; here the embedder loads a `Config` once at startup
/// and passes it to whatever needs it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Build-channel identifier stamped into outgoing reports.
    #[serde(default = "default_channel")]
    pub channel: String,

    /// Cipher mode used when a payload does not name a transformation.
    #[serde(default)]
    pub default_mode: Mode,
}

fn default_channel() -> String {
    DEFAULT_CHANNEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel: default_channel(),
            default_mode: Mode::default(),
        }
    }
}

impl Config {
    /// Parse a TOML document. Missing fields fall back to defaults.
    pub fn from_toml(content: &str) -> Result<Self, CodecError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file. A missing file is not an error; defaults
    /// apply. `PAYLOAD_CHANNEL` in the environment overrides the channel,
    /// mirroring how release builds stamp the channel at packaging time.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CodecError> {
        let mut conf = if path.as_ref().exists() {
            let content = std::fs::read_to_string(path.as_ref())?;
            Self::from_toml(&content)?
        } else {
            Config::default()
        };

        if let Ok(channel) = std::env::var("PAYLOAD_CHANNEL") {
            if !channel.is_empty() {
                conf.channel = channel;
            }
        }

        Ok(conf)
    }
}

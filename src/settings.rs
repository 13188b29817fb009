use std::fs;
use std::io;
use std::path::Path;
#[cfg(feature = "cli")]
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::CapabilitySpec;
use crate::domain::{HumoticaError, Result};

/// Default filename used for configuration within the config directory.
#[cfg(any(feature = "cli", test))]
const CONFIG_FILENAME: &str = "config.json";

/// Where to look for the TIBET audit-layer server and how to tell users to
/// install it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TibetSettings {
    #[serde(default = "default_tibet_program")]
    pub program: String,
    #[serde(default = "default_tibet_package")]
    pub package: String,
    #[serde(default = "default_tibet_install_hint")]
    pub install_hint: String,
}

impl TibetSettings {
    pub fn spec(&self) -> CapabilitySpec {
        CapabilitySpec::new("TIBET", &self.package, &self.install_hint)
    }
}

impl Default for TibetSettings {
    fn default() -> Self {
        Self {
            program: default_tibet_program(),
            package: default_tibet_package(),
            install_hint: default_tibet_install_hint(),
        }
    }
}

/// Complete configuration payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacadeConfig {
    #[serde(default)]
    pub tibet: TibetSettings,
}

impl FacadeConfig {
    /// Read configuration from `path`. A missing file yields the defaults; a
    /// file that exists but cannot be read or parsed is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(
                    target: "humotica::settings",
                    path = %path.display(),
                    "no config file; using defaults"
                );
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        serde_json::from_slice(&bytes).map_err(|err| {
            HumoticaError::config(format!("invalid config `{}`: {err}", path.display()))
        })
    }
}

/// `<platform config dir>/config.json`, e.g. `~/.config/humotica/config.json`.
#[cfg(feature = "cli")]
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "humotica", "humotica")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

fn default_tibet_program() -> String {
    "mcp-server-tibet".to_string()
}

fn default_tibet_package() -> String {
    "mcp-server-tibet".to_string()
}

fn default_tibet_install_hint() -> String {
    "pip install mcp-server-tibet".to_string()
}

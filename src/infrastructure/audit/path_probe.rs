use tracing::debug;

use crate::{
    application::{CapabilityProbe, CapabilitySpec},
    domain::{HumoticaError, Result},
    infrastructure::TibetServer,
    settings::TibetSettings,
};

/// Locates the `mcp-server-tibet` executable on `PATH`.
///
/// Only `CannotFindBinaryPath` counts as "not installed". Any other lookup
/// failure (unreadable working directory, canonicalization error) is passed
/// through as a collaborator failure.
pub struct PathProbe {
    spec: CapabilitySpec,
    program: String,
}

impl PathProbe {
    pub fn new(settings: &TibetSettings) -> Self {
        Self {
            spec: settings.spec(),
            program: settings.program.clone(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for PathProbe {
    fn default() -> Self {
        Self::new(&TibetSettings::default())
    }
}

impl CapabilityProbe for PathProbe {
    type Output = TibetServer;

    fn spec(&self) -> &CapabilitySpec {
        &self.spec
    }

    fn probe(&self) -> Result<TibetServer> {
        match which::which(&self.program) {
            Ok(path) => {
                debug!(
                    target: "humotica::capability",
                    "Found {} at: {}",
                    self.program,
                    path.display()
                );
                Ok(TibetServer::new(path))
            }
            Err(which::Error::CannotFindBinaryPath) => Err(HumoticaError::missing_dependency(
                &self.spec.package,
                format!("`{}` was not found on PATH", self.program),
            )),
            Err(err) => Err(HumoticaError::collaborator(
                &self.spec.package,
                format!("looking up `{}` failed: {err}", self.program),
            )),
        }
    }
}

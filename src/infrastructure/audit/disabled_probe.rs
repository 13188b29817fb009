//! Probe for builds without the `tibet-server` feature.
//!
//! The lookup code is not compiled in, so the collaborator is reported as
//! missing and the resolver binds the stub.

use crate::{
    application::{CapabilityProbe, CapabilitySpec},
    domain::{HumoticaError, Result},
    infrastructure::TibetServer,
    settings::TibetSettings,
};

pub struct DisabledProbe {
    spec: CapabilitySpec,
}

impl DisabledProbe {
    pub fn new(settings: &TibetSettings) -> Self {
        Self {
            spec: settings.spec(),
        }
    }
}

impl Default for DisabledProbe {
    fn default() -> Self {
        Self::new(&TibetSettings::default())
    }
}

impl CapabilityProbe for DisabledProbe {
    type Output = TibetServer;

    fn spec(&self) -> &CapabilitySpec {
        &self.spec
    }

    fn probe(&self) -> Result<TibetServer> {
        Err(HumoticaError::missing_dependency(
            &self.spec.package,
            "built without the `tibet-server` feature",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::resolve;

    #[test]
    fn test_always_resolves_to_stub() {
        let binding = resolve(&DisabledProbe::default()).unwrap();
        let stub = binding.unavailable().unwrap();
        assert!(stub.reason().contains("tibet-server"));
        assert!(binding
            .construct()
            .unwrap_err()
            .to_string()
            .contains("pip install mcp-server-tibet"));
    }
}

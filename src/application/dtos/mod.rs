use std::fmt;

use serde::{Deserialize, Serialize};

use crate::application::{CapabilityBinding, CapabilitySpec};
use crate::domain::ProtocolStack;
use crate::infrastructure::TibetServer;

/// Whether an optional capability resolved, for diagnostics and `--json` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityStatus {
    pub capability: String,
    pub package: String,
    pub available: bool,
    /// Resolved executable, when bound.
    pub program: Option<String>,
    /// Install command, when only the stub is bound.
    pub remedy: Option<String>,
    pub reason: Option<String>,
}

impl CapabilityStatus {
    pub fn describe(spec: &CapabilitySpec, binding: &CapabilityBinding<TibetServer>) -> Self {
        match binding {
            CapabilityBinding::Bound(server) => Self {
                capability: spec.capability.clone(),
                package: spec.package.clone(),
                available: true,
                program: Some(server.program().display().to_string()),
                remedy: None,
                reason: None,
            },
            CapabilityBinding::Unavailable(stub) => Self {
                capability: stub.spec().capability.clone(),
                package: stub.spec().package.clone(),
                available: false,
                program: None,
                remedy: Some(stub.spec().install.clone()),
                reason: Some(stub.reason().to_string()),
            },
        }
    }
}

impl fmt::Display for CapabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (true, Some(program)) = (self.available, &self.program) {
            return writeln!(f, "{}: available ({program})", self.capability);
        }

        writeln!(f, "{}: unavailable", self.capability)?;
        if let Some(reason) = &self.reason {
            writeln!(f, "  reason: {reason}")?;
        }
        if let Some(remedy) = &self.remedy {
            writeln!(f, "  install with: {remedy}")?;
        }
        Ok(())
    }
}

/// Machine-readable view of the stack, the counterpart of the text report.
#[derive(Debug, Clone, Serialize)]
pub struct StackSnapshot<'a> {
    pub version: &'a str,
    pub stack: &'a ProtocolStack,
    pub capabilities: Vec<CapabilityStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::UnavailableCapability;
    use crate::domain::PROTOCOL_STACK;

    fn spec() -> CapabilitySpec {
        CapabilitySpec::new("TIBET", "mcp-server-tibet", "pip install mcp-server-tibet")
    }

    #[test]
    fn test_status_for_stub() {
        let binding = CapabilityBinding::Unavailable(UnavailableCapability::new(spec(), "gone"));
        let status = CapabilityStatus::describe(&spec(), &binding);
        assert!(!status.available);
        assert_eq!(status.remedy.as_deref(), Some("pip install mcp-server-tibet"));
        assert_eq!(status.reason.as_deref(), Some("gone"));
        assert_eq!(status.program, None);
    }

    #[test]
    fn test_status_for_bound() {
        let binding = CapabilityBinding::Bound(TibetServer::new("/opt/bin/mcp-server-tibet"));
        let status = CapabilityStatus::describe(&spec(), &binding);
        assert!(status.available);
        assert_eq!(status.program.as_deref(), Some("/opt/bin/mcp-server-tibet"));
        assert_eq!(status.remedy, None);
    }

    #[test]
    fn test_status_display() {
        let bound = CapabilityBinding::Bound(TibetServer::new("/opt/bin/mcp-server-tibet"));
        assert_eq!(
            CapabilityStatus::describe(&spec(), &bound).to_string(),
            "TIBET: available (/opt/bin/mcp-server-tibet)\n"
        );

        let stub = CapabilityBinding::Unavailable(UnavailableCapability::new(spec(), "gone"));
        assert_eq!(
            CapabilityStatus::describe(&spec(), &stub).to_string(),
            "TIBET: unavailable\n  reason: gone\n  install with: pip install mcp-server-tibet\n"
        );
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = StackSnapshot {
            version: "0.1.0",
            stack: &PROTOCOL_STACK,
            capabilities: Vec::new(),
        };
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["version"], "0.1.0");
        assert_eq!(value["stack"]["security"]["name"], "JIS");
        assert_eq!(value["stack"]["network"]["components"][1], "I-Poll");
    }
}

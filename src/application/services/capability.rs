use std::sync::OnceLock;

use tracing::{debug, info};

use crate::domain::{HumoticaError, Result};

/// Identifies an optional capability and how to obtain it when missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySpec {
    /// Public name the capability is exposed under, e.g. `TIBET`.
    pub capability: String,
    /// Package that provides the real implementation.
    pub package: String,
    /// Exact command that installs `package`.
    pub install: String,
}

impl CapabilitySpec {
    pub fn new(
        capability: impl Into<String>,
        package: impl Into<String>,
        install: impl Into<String>,
    ) -> Self {
        Self {
            capability: capability.into(),
            package: package.into(),
            install: install.into(),
        }
    }
}

/// Attempts to acquire the real implementation of an optional capability.
///
/// Implementations must report absence with [`HumoticaError::MissingDependency`]
/// and nothing else; any other error is treated as a defect in the collaborator
/// and surfaces to the caller of [`resolve`].
pub trait CapabilityProbe {
    type Output;

    fn spec(&self) -> &CapabilitySpec;

    fn probe(&self) -> Result<Self::Output>;
}

/// Stand-in bound when the optional collaborator is not installed.
///
/// Its only behavior is to fail: see [`UnavailableCapability::construct`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnavailableCapability {
    spec: CapabilitySpec,
    reason: String,
}

impl UnavailableCapability {
    pub fn new(spec: CapabilitySpec, reason: impl Into<String>) -> Self {
        Self {
            spec,
            reason: reason.into(),
        }
    }

    pub fn spec(&self) -> &CapabilitySpec {
        &self.spec
    }

    /// Why the probe reported the collaborator as absent.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Always fails with [`HumoticaError::StubUsed`].
    pub fn construct<T>(&self) -> Result<T> {
        Err(HumoticaError::stub_used(
            &self.spec.capability,
            &self.spec.package,
            &self.spec.install,
        ))
    }
}

/// Outcome of resolving an optional capability. Fixed once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityBinding<T> {
    Bound(T),
    Unavailable(UnavailableCapability),
}

impl<T> CapabilityBinding<T> {
    pub fn is_bound(&self) -> bool {
        matches!(self, CapabilityBinding::Bound(_))
    }

    pub fn real(&self) -> Option<&T> {
        match self {
            CapabilityBinding::Bound(real) => Some(real),
            CapabilityBinding::Unavailable(_) => None,
        }
    }

    pub fn unavailable(&self) -> Option<&UnavailableCapability> {
        match self {
            CapabilityBinding::Bound(_) => None,
            CapabilityBinding::Unavailable(stub) => Some(stub),
        }
    }
}

impl<T: Clone> CapabilityBinding<T> {
    /// Produce the real implementation, or fail loudly if only the stub is bound.
    pub fn construct(&self) -> Result<T> {
        match self {
            CapabilityBinding::Bound(real) => Ok(real.clone()),
            CapabilityBinding::Unavailable(stub) => stub.construct(),
        }
    }
}

/// Bind a capability through `probe`.
///
/// Only [`HumoticaError::MissingDependency`] is redirected to the stub.
pub fn resolve<P: CapabilityProbe>(probe: &P) -> Result<CapabilityBinding<P::Output>> {
    let spec = probe.spec();
    match probe.probe() {
        Ok(real) => {
            debug!(
                target: "humotica::capability",
                capability = %spec.capability,
                package = %spec.package,
                "capability bound to real implementation"
            );
            Ok(CapabilityBinding::Bound(real))
        }
        Err(HumoticaError::MissingDependency { detail, .. }) => {
            info!(
                target: "humotica::capability",
                capability = %spec.capability,
                package = %spec.package,
                reason = %detail,
                "optional dependency missing; binding stub"
            );
            Ok(CapabilityBinding::Unavailable(UnavailableCapability::new(
                spec.clone(),
                detail,
            )))
        }
        Err(err) => Err(err),
    }
}

/// What a [`OnceBinding`] resolved, and with which settings.
#[derive(Debug)]
pub struct Resolved<T, K> {
    key: K,
    spec: CapabilitySpec,
    outcome: Result<CapabilityBinding<T>>,
}

impl<T, K> Resolved<T, K> {
    /// Settings the probe was built from.
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn spec(&self) -> &CapabilitySpec {
        &self.spec
    }

    pub fn outcome(&self) -> std::result::Result<&CapabilityBinding<T>, &HumoticaError> {
        self.outcome.as_ref()
    }
}

/// A capability resolved at most once for the lifetime of the cell.
///
/// The first caller picks the settings `K` and runs the probe; everyone after
/// that sees the same [`Resolved`], whatever settings they ask with.
#[derive(Debug)]
pub struct OnceBinding<T, K> {
    slot: OnceLock<Resolved<T, K>>,
}

impl<T, K> OnceBinding<T, K> {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Resolve with `key` if nothing is stored yet, otherwise return what is.
    pub fn get_or_resolve<P, F>(&self, key: K, make_probe: F) -> &Resolved<T, K>
    where
        P: CapabilityProbe<Output = T>,
        F: FnOnce(&K) -> P,
    {
        self.slot.get_or_init(|| {
            let probe = make_probe(&key);
            Resolved {
                spec: probe.spec().clone(),
                outcome: resolve(&probe),
                key,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct FakeServer(&'static str);

    enum Outcome {
        Present,
        Missing,
        Broken,
    }

    struct FakeProbe {
        spec: CapabilitySpec,
        outcome: Outcome,
        calls: Cell<usize>,
    }

    impl FakeProbe {
        fn new(outcome: Outcome) -> Self {
            Self {
                spec: CapabilitySpec::new(
                    "TIBET",
                    "mcp-server-tibet",
                    "pip install mcp-server-tibet",
                ),
                outcome,
                calls: Cell::new(0),
            }
        }
    }

    impl CapabilityProbe for FakeProbe {
        type Output = FakeServer;

        fn spec(&self) -> &CapabilitySpec {
            &self.spec
        }

        fn probe(&self) -> Result<FakeServer> {
            self.calls.set(self.calls.get() + 1);
            match self.outcome {
                Outcome::Present => Ok(FakeServer("real")),
                Outcome::Missing => Err(HumoticaError::missing_dependency(
                    "mcp-server-tibet",
                    "not on PATH",
                )),
                Outcome::Broken => Err(HumoticaError::collaborator(
                    "mcp-server-tibet",
                    "crashed during its own start-up",
                )),
            }
        }
    }

    #[test]
    fn test_missing_dependency_binds_stub() {
        let probe = FakeProbe::new(Outcome::Missing);
        let binding = resolve(&probe).unwrap();
        assert!(!binding.is_bound());
        assert_eq!(binding.unavailable().unwrap().reason(), "not on PATH");
    }

    #[test]
    fn test_stub_construct_names_package_and_remedy() {
        let binding = resolve(&FakeProbe::new(Outcome::Missing)).unwrap();
        let err = binding.construct().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("mcp-server-tibet"));
        assert!(message.contains("pip install mcp-server-tibet"));
        assert!(matches!(err, HumoticaError::StubUsed { .. }));
    }

    #[test]
    fn test_stub_fails_every_time() {
        let binding = resolve(&FakeProbe::new(Outcome::Missing)).unwrap();
        assert!(binding.construct().is_err());
        assert!(binding.construct().is_err());
    }

    #[test]
    fn test_present_dependency_is_returned_unchanged() {
        let binding = resolve(&FakeProbe::new(Outcome::Present)).unwrap();
        assert!(binding.is_bound());
        assert_eq!(binding.real(), Some(&FakeServer("real")));
        assert_eq!(binding.construct().unwrap(), FakeServer("real"));
    }

    #[test]
    fn test_unrelated_failure_propagates() {
        let err = resolve(&FakeProbe::new(Outcome::Broken)).unwrap_err();
        assert!(matches!(err, HumoticaError::Collaborator { .. }));
        assert!(err.to_string().contains("crashed during its own start-up"));
    }

    #[test]
    fn test_resolve_probes_exactly_once() {
        let probe = FakeProbe::new(Outcome::Present);
        let _ = resolve(&probe).unwrap();
        assert_eq!(probe.calls.get(), 1);
    }

    #[test]
    fn test_once_binding_resolves_once() {
        let cell: OnceBinding<FakeServer, &str> = OnceBinding::new();
        let builds = Cell::new(0);

        let first = cell.get_or_resolve("first", |_| {
            builds.set(builds.get() + 1);
            FakeProbe::new(Outcome::Present)
        });
        assert!(first.outcome().unwrap().is_bound());

        let second = cell.get_or_resolve("second", |_| {
            builds.set(builds.get() + 1);
            FakeProbe::new(Outcome::Missing)
        });
        assert_eq!(builds.get(), 1);
        assert_eq!(*second.key(), "first");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_once_binding_keeps_unrelated_failure() {
        let cell: OnceBinding<FakeServer, ()> = OnceBinding::new();
        let resolved = cell.get_or_resolve((), |_| FakeProbe::new(Outcome::Broken));
        assert!(matches!(
            resolved.outcome(),
            Err(HumoticaError::Collaborator { .. })
        ));
        assert!(cell
            .get_or_resolve((), |_| FakeProbe::new(Outcome::Present))
            .outcome()
            .is_err());
    }
}

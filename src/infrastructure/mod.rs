//! Infrastructure layer wiring concrete adapters for the optional collaborators.

pub mod audit;

#[cfg(feature = "tibet-server")]
pub use audit::PathProbe;
pub use audit::{DisabledProbe, TibetProbe, TibetServer};

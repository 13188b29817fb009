pub mod disabled_probe;
pub mod tibet_server;

#[cfg(feature = "tibet-server")]
pub mod path_probe;

pub use disabled_probe::DisabledProbe;
#[cfg(feature = "tibet-server")]
pub use path_probe::PathProbe;
pub use tibet_server::TibetServer;

/// Probe used to resolve `TIBET` in this build.
#[cfg(feature = "tibet-server")]
pub type TibetProbe = PathProbe;

/// Probe used to resolve `TIBET` in this build.
#[cfg(not(feature = "tibet-server"))]
pub type TibetProbe = DisabledProbe;

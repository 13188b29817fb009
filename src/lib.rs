//! HumoticaOS protocol stack.
//!
//! One crate naming the three layers of the stack:
//!
//! - AInternet: network layer (AINS domains, I-Poll messaging)
//! - JIS: security layer (identity, trust, intent validation)
//! - TIBET: audit layer (provenance, evidence trail)
//!
//! The TIBET server is optional. [`tibet()`] resolves it once per process; if
//! it is not installed, the binding is a stub whose `construct()` fails with
//! the install command.
//!
//! ```no_run
//! use humotica::{AInternet, Humotica, FacadeConfig};
//!
//! let agent = AInternet::new("my_bot")?.with_description("My AI assistant");
//! let hello = agent.message("echo.aint", "Hello!")?;
//! assert_eq!(hello.from.as_str(), "my_bot.aint");
//!
//! let stack = Humotica::init(&FacadeConfig::default())?;
//! match stack.tibet().construct() {
//!     Ok(server) => println!("TIBET at {}", server.program().display()),
//!     Err(err) => eprintln!("{err}"),
//! }
//! # Ok::<(), humotica::HumoticaError>(())
//! ```

use std::io;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod settings;

pub use application::{
    describe_stack, resolve, write_report, CapabilityBinding, CapabilityProbe, CapabilitySpec,
    CapabilityStatus, OnceBinding, Resolved, StackReport, StackSnapshot, UnavailableCapability,
};
pub use domain::{
    AInternet, Ains, HumoticaError, IPoll, LayerKey, ProtocolLayerDescriptor, ProtocolStack,
    Result, PROTOCOL_STACK,
};
pub use infrastructure::{TibetProbe, TibetServer};
pub use settings::{FacadeConfig, TibetSettings};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The audit-layer binding: the installed TIBET server, or its stub.
pub type Tibet = CapabilityBinding<TibetServer>;

/// Resolved facade: the stack registry plus the TIBET binding.
///
/// Build one with [`Humotica::init`] and pass it by reference. [`tibet()`] is
/// the shortcut for code that only needs the binding; both read the same
/// one-time resolution.
#[derive(Debug, Clone)]
pub struct Humotica {
    stack: &'static ProtocolStack,
    tibet_spec: CapabilitySpec,
    tibet: Tibet,
}

impl Humotica {
    /// Resolve TIBET into the process-wide binding shared with [`tibet()`].
    ///
    /// The first resolution in the process fixes the outcome. A later call
    /// with different [`TibetSettings`] is a configuration error rather than a
    /// second lookup.
    pub fn init(config: &FacadeConfig) -> Result<Self> {
        Self::from_binding(&TIBET, &config.tibet, TibetProbe::new)
    }

    fn from_binding<P, F>(
        binding: &OnceBinding<TibetServer, TibetSettings>,
        settings: &TibetSettings,
        make_probe: F,
    ) -> Result<Self>
    where
        P: CapabilityProbe<Output = TibetServer>,
        F: FnOnce(&TibetSettings) -> P,
    {
        let resolved = binding.get_or_resolve(settings.clone(), make_probe);
        if resolved.key() != settings {
            return Err(HumoticaError::config(format!(
                "TIBET was already resolved in this process with program `{}`; \
                 cannot resolve it again with different settings (program `{}`)",
                resolved.key().program,
                settings.program
            )));
        }

        let tibet = resolved.outcome().map_err(HumoticaError::clone)?.clone();
        Ok(Self {
            stack: &PROTOCOL_STACK,
            tibet_spec: resolved.spec().clone(),
            tibet,
        })
    }

    pub fn stack(&self) -> &'static ProtocolStack {
        self.stack
    }

    pub fn tibet(&self) -> &Tibet {
        &self.tibet
    }

    pub fn tibet_status(&self) -> CapabilityStatus {
        CapabilityStatus::describe(&self.tibet_spec, &self.tibet)
    }

    pub fn report(&self) -> StackReport<'static> {
        describe_stack(self.stack)
    }

    pub fn snapshot(&self) -> StackSnapshot<'static> {
        StackSnapshot {
            version: VERSION,
            stack: self.stack,
            capabilities: vec![self.tibet_status()],
        }
    }
}

static TIBET: OnceBinding<TibetServer, TibetSettings> = OnceBinding::new();

/// Process-wide TIBET binding.
///
/// Returns whatever the first resolution in the process produced, whether that
/// was [`Humotica::init`] or an earlier call here with default settings. An
/// unrelated failure from the collaborator is kept and returned each time.
pub fn tibet() -> std::result::Result<&'static Tibet, &'static HumoticaError> {
    TIBET
        .get_or_resolve(TibetSettings::default(), TibetProbe::new)
        .outcome()
}

/// Print the stack report to stdout.
pub fn info() -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&PROTOCOL_STACK, &mut handle)
}

/// Install the stderr tracing subscriber used by the CLI. Level comes from
/// `HUMOTICA_LOG` (default `warn`). Safe to call more than once.
#[cfg(feature = "cli")]
pub fn init_tracing() {
    static INIT: std::sync::OnceLock<()> = std::sync::OnceLock::new();

    INIT.get_or_init(|| {
        let filter = std::env::var("HUMOTICA_LOG").unwrap_or_else(|_| "warn".into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(io::stderr)
            .compact()
            .try_init();
    });
}

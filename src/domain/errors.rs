use thiserror::Error;

/// Result alias used across the facade.
pub type Result<T> = std::result::Result<T, HumoticaError>;

/// Errors shared across the facade, its probes and the settings loader.
#[derive(Debug, Error)]
pub enum HumoticaError {
    /// The optional collaborator is not installed. The resolver recovers from
    /// this by binding the stub; it is never a startup failure.
    #[error("{package} is not installed: {detail}")]
    MissingDependency { package: String, detail: String },

    /// Code tried to construct a capability that resolved to its stub.
    #[error("{capability} requires {package}. Install with: {install}")]
    StubUsed {
        capability: String,
        package: String,
        install: String,
    },

    /// The optional collaborator is present but failed for a reason that has
    /// nothing to do with its absence.
    #[error("{package} failed to load: {message}")]
    Collaborator { package: String, message: String },

    /// A network-layer value violated its format.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// `io::Error` is not `Clone`; it is rebuilt from its kind and message.
impl Clone for HumoticaError {
    fn clone(&self) -> Self {
        match self {
            Self::MissingDependency { package, detail } => Self::MissingDependency {
                package: package.clone(),
                detail: detail.clone(),
            },
            Self::StubUsed {
                capability,
                package,
                install,
            } => Self::StubUsed {
                capability: capability.clone(),
                package: package.clone(),
                install: install.clone(),
            },
            Self::Collaborator { package, message } => Self::Collaborator {
                package: package.clone(),
                message: message.clone(),
            },
            Self::Validation(msg) => Self::Validation(msg.clone()),
            Self::Config(msg) => Self::Config(msg.clone()),
            Self::Io(err) => Self::Io(std::io::Error::new(err.kind(), err.to_string())),
        }
    }
}

impl HumoticaError {
    pub fn missing_dependency(package: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MissingDependency {
            package: package.into(),
            detail: detail.into(),
        }
    }

    pub fn stub_used(
        capability: impl Into<String>,
        package: impl Into<String>,
        install: impl Into<String>,
    ) -> Self {
        Self::StubUsed {
            capability: capability.into(),
            package: package.into(),
            install: install.into(),
        }
    }

    pub fn collaborator(package: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Collaborator {
            package: package.into(),
            message: message.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

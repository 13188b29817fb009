//! Network-layer vocabulary re-exposed from AInternet.
//!
//! These are plain values. Nothing here opens a socket: the AInternet
//! collaborator owns delivery, this crate only names what it delivers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::HumoticaError;

/// Top-level suffix every AINS domain carries.
pub const AINS_SUFFIX: &str = ".aint";

/// A domain name in the AI Name Service, such as `echo.aint`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ains(String);

impl Ains {
    pub fn parse(input: &str) -> Result<Self, HumoticaError> {
        let normalized = input.trim().to_ascii_lowercase();
        let Some(stem) = normalized.strip_suffix(AINS_SUFFIX) else {
            return Err(HumoticaError::validation(format!(
                "AINS domain `{normalized}` must end with `{AINS_SUFFIX}`"
            )));
        };
        if stem.is_empty() {
            return Err(HumoticaError::validation("AINS domain has no name"));
        }
        for label in stem.split('.') {
            if !is_valid_label(label) {
                return Err(HumoticaError::validation(format!(
                    "invalid label `{label}` in AINS domain `{normalized}`"
                )));
            }
        }
        Ok(Self(normalized))
    }

    /// Domain for an agent id, `<agent_id>.aint`.
    pub fn for_agent(agent_id: &str) -> Result<Self, HumoticaError> {
        Self::parse(&format!("{}{AINS_SUFFIX}", agent_id.trim()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

impl fmt::Display for Ains {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ains {
    type Err = HumoticaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Ains {
    type Error = HumoticaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Ains> for String {
    fn from(value: Ains) -> Self {
        value.0
    }
}

/// An agent's identity on the AI network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AInternet {
    agent_id: String,
    domain: Ains,
    description: Option<String>,
}

impl AInternet {
    pub fn new(agent_id: impl Into<String>) -> Result<Self, HumoticaError> {
        let agent_id = agent_id.into().trim().to_ascii_lowercase();
        if agent_id.is_empty() {
            return Err(HumoticaError::validation("agent id cannot be empty"));
        }
        let domain = Ains::for_agent(&agent_id)?;
        Ok(Self {
            agent_id,
            domain,
            description: None,
        })
    }

    /// Attach the human-readable description the agent registers with.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        let trimmed = description.trim();
        self.description = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    pub fn domain(&self) -> &Ains {
        &self.domain
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Address an I-Poll message from this agent. The envelope is only built,
    /// never sent.
    pub fn message(&self, to: &str, content: impl Into<String>) -> Result<IPoll, HumoticaError> {
        IPoll::new(self.domain.clone(), Ains::parse(to)?, content)
    }
}

/// An I-Poll message envelope between two AINS domains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IPoll {
    pub from: Ains,
    pub to: Ains,
    pub content: String,
}

impl IPoll {
    pub fn new(from: Ains, to: Ains, content: impl Into<String>) -> Result<Self, HumoticaError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(HumoticaError::validation("I-Poll content cannot be empty"));
        }
        Ok(Self { from, to, content })
    }
}

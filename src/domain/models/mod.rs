mod network;

pub use network::{AInternet, Ains, IPoll, AINS_SUFFIX};

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Layers of the HumoticaOS stack, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKey {
    Network,
    Security,
    Audit,
}

impl LayerKey {
    /// Every key, in the order the registry iterates.
    pub const ALL: [LayerKey; 3] = [LayerKey::Network, LayerKey::Security, LayerKey::Audit];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayerKey::Network => "network",
            LayerKey::Security => "security",
            LayerKey::Audit => "audit",
        }
    }

    /// Upper-case label used in the text report, e.g. `NETWORK`.
    pub fn label(&self) -> &'static str {
        match self {
            LayerKey::Network => "NETWORK",
            LayerKey::Security => "SECURITY",
            LayerKey::Audit => "AUDIT",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for LayerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one layer of the external protocol stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProtocolLayerDescriptor {
    pub name: &'static str,
    /// Opaque version text; never parsed.
    pub version: &'static str,
    pub components: &'static [&'static str],
    #[serde(rename = "docs")]
    pub docs_url: &'static str,
}

/// Read-only registry holding exactly one descriptor per [`LayerKey`].
///
/// The constructor takes one descriptor per layer by position, so a registry
/// with a missing or extra key cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolStack {
    layers: [ProtocolLayerDescriptor; 3],
}

impl ProtocolStack {
    pub const fn new(
        network: ProtocolLayerDescriptor,
        security: ProtocolLayerDescriptor,
        audit: ProtocolLayerDescriptor,
    ) -> Self {
        Self {
            layers: [network, security, audit],
        }
    }

    pub fn get(&self, key: LayerKey) -> &ProtocolLayerDescriptor {
        &self.layers[key.index()]
    }

    /// Iterate layers in canonical order: network, security, audit.
    pub fn iter(&self) -> impl Iterator<Item = (LayerKey, &ProtocolLayerDescriptor)> + '_ {
        LayerKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    pub fn keys(&self) -> impl Iterator<Item = LayerKey> {
        LayerKey::ALL.into_iter()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }
}

impl Serialize for ProtocolStack {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, layer) in self.iter() {
            map.serialize_entry(key.as_str(), layer)?;
        }
        map.end()
    }
}

/// The HumoticaOS protocol stack.
pub static PROTOCOL_STACK: ProtocolStack = ProtocolStack::new(
    ProtocolLayerDescriptor {
        name: "AInternet",
        version: "0.2.1",
        components: &["AINS", "I-Poll"],
        docs_url: "https://github.com/jaspertvdm/ainternet",
    },
    ProtocolLayerDescriptor {
        name: "JIS",
        version: "1.0",
        components: &["HID/DID", "FIR/A", "IO/DO/OD", "SCS"],
        docs_url: "https://github.com/jaspertvdm/JTel-identity-standard",
    },
    ProtocolLayerDescriptor {
        name: "TIBET",
        version: "1.0.2",
        components: &["Intent Tokens", "Evidence Trail"],
        docs_url: "https://pypi.org/project/mcp-server-tibet/",
    },
);

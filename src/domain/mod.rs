//! Domain layer: the protocol stack vocabulary shared by every other layer.

pub mod errors;
pub mod models;

pub use errors::{HumoticaError, Result};
pub use models::{
    AInternet, Ains, IPoll, LayerKey, ProtocolLayerDescriptor, ProtocolStack, PROTOCOL_STACK,
};

//! Service layer: the capability resolver and the stack reporter.

mod capability;
mod stack_report;

pub use capability::{
    resolve, CapabilityBinding, CapabilityProbe, CapabilitySpec, OnceBinding, Resolved,
    UnavailableCapability,
};
pub use stack_report::{describe_stack, write_report, StackReport};

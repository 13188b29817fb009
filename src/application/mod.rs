//! Application layer: resolving optional capabilities and reporting on the stack.

pub mod dtos;
pub mod services;

pub use dtos::{CapabilityStatus, StackSnapshot};
pub use services::{
    describe_stack, resolve, write_report, CapabilityBinding, CapabilityProbe, CapabilitySpec,
    OnceBinding, Resolved, StackReport, UnavailableCapability,
};

//! Rebuilds the variables and functions visible in an interactive session from the
//! history of evaluated units, for completion and inspection tooling.
extern crate thiserror;

pub mod completion;
pub mod context;
pub mod session;

pub use context::binding::{FunctionBinding, FunctionRegistry, VariableBinding, VariableRegistry};
pub use context::ContextUpdater;

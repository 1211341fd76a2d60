//! Shell Commands
//!
//! One module per command, dispatched by name through the registry.
//! Each command validates its operand shape before touching the tree.

pub mod cat;
pub mod cd;
pub mod ls;
pub mod make;
pub mod mkdir;
pub mod prompt;
pub mod pwd;
pub mod registry;
pub mod stubs;
pub mod types;

pub use registry::{create_default_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult};

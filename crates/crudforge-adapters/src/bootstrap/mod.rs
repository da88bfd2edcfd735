//! Project bootstrapper adapters.

mod command;

pub use command::{BootstrapCommands, CommandBootstrapper};

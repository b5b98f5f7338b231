//! Loader, query session, and interactive shell for the costar engine.
//!
//! The binary in `main.rs` is a thin wrapper: parse arguments, initialize
//! logging, then load the dataset and hand the session to the shell. All
//! behavior lives here so it can be exercised by tests.

pub mod config;
pub mod error;
pub mod loader;
pub mod session;
pub mod shell;

pub use config::{GameConfig, Manifest};
pub use error::{CliError, CliResult};
pub use loader::{load_graph, CostarGraph};
pub use session::Session;
pub use shell::Shell;

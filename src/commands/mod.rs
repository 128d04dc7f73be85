//! Command implementations for the `repo-status` binary

pub mod status;

pub use status::{build_configuration, handle_status_command, StatusArgs};

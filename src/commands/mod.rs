//! Command handlers for the `paramdoc` CLI.
//!
//! Each module handles one sub-command, delegating to the `paramdoc` library.

pub(crate) mod check;
pub(crate) mod conf;
pub(crate) mod params;
pub(crate) mod types;

pub(crate) use check::handle_check_command;
pub(crate) use conf::handle_conf_command;
pub(crate) use params::handle_params_command;
pub(crate) use types::handle_types_command;

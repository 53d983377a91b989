//! CLI module for kafkalo
//!
//! Each command loads the settings file once, then talks to the library.
//! Commands return errors; only `main` decides how the process exits.

pub mod error;
pub mod output;

pub mod config;
pub mod connect;
pub mod inputs;

//! Core library components.
//!
//! Secret generation, `.env` handling, validation, sealing and the remote
//! secrets stores. Nothing in here prints to the terminal.

pub mod config;
pub mod constants;
pub mod env;
pub mod generator;
pub mod remote;
pub mod repo;
pub mod seal;
pub mod types;
pub mod validation;

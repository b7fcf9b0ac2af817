//! Command implementations behind the `adjg` binary.

pub mod commands;

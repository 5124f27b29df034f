//! # Opskit CLI Library
//!
//! Command modules for the opskit command-line tool, providing the vendor
//! subcommand tree and the handlers that wire option structs into the
//! vendor clients.

pub mod cli;

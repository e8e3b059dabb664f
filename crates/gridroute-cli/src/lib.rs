//! gridroute CLI library.
//!
//! This crate provides the command handlers and output formatting used by the
//! `gridroute` binary.

pub mod commands;
pub mod output;

//! Integration tests module
//!
//! This module contains the integration tests for the ghup CLI commands.

pub mod cli;
pub mod common;
pub mod config;
pub mod upload;

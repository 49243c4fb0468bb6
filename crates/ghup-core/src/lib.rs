//! Core of Ghup: upload a single file to a GitHub repository
//!
//! Shared by the `ghup` CLI and the `ghup-serve` form-submit server. Neither
//! front-end talks to GitHub directly; both build an
//! [`upload::UploadForm`] and hand it to [`upload::upload`].

pub mod config;
pub mod core;
pub mod mocks;
pub mod upload;

pub use crate::config::Config;
pub use crate::core::credentials::{KeychainStore, SecretStore, TOKEN_KEY};
pub use crate::core::error_help::{format_error_with_help, ErrorHelp};
pub use crate::core::{GhupError, GhupResult};

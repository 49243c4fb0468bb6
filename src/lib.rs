//! Ghup: upload a single file to a GitHub repository
//!
//! This crate is the command-line front-end. The upload operation itself,
//! configuration and credential storage live in `ghup-core` and are
//! re-exported here.

pub use ghup_core::upload::{UploadForm, UploadResponse, UploadedFile};
pub use ghup_core::{
    format_error_with_help, Config, ErrorHelp, GhupError, GhupResult, KeychainStore, SecretStore,
};

/// Core module re-exported from ghup-core.
pub mod core {
    pub use ghup_core::core::*;
}

/// The shared upload operation.
pub mod upload {
    pub use ghup_core::upload::*;
}

/// Test doubles for the provider seams.
pub mod mocks {
    pub use ghup_core::mocks::*;
}

/// Where the CLI finds a token.
pub mod token;

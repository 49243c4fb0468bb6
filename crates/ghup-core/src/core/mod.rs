pub mod credentials;
pub mod error;
pub mod error_help;
pub mod format;
pub mod path;

pub use error::{GhupError, GhupResult};

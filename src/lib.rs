pub mod backend;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;

// Re-export main types for convenience
pub use backend::{BackendClient, BackendError, DeployResult, RecommendResult, TokenRequest};
pub use config::Config;
pub use error::SubmitError;
pub use form::FormView;

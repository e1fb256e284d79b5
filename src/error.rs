use thiserror::Error;

use crate::backend::BackendError;
use crate::form::{
    COMMUNICATION_ERROR_MESSAGE, DEPLOY_EMPTY_MESSAGE, INVALID_JSON_MESSAGE,
    RECOMMEND_EMPTY_MESSAGE,
};

/// Everything that can stop a submit before a backend result is decoded.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("token draft is empty")]
    EmptyTokenDraft,
    #[error("recommendation prompt is empty")]
    EmptyPrompt,
    #[error("token draft is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl SubmitError {
    /// The fixed text shown in the response pane.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::EmptyTokenDraft => DEPLOY_EMPTY_MESSAGE,
            SubmitError::EmptyPrompt => RECOMMEND_EMPTY_MESSAGE,
            SubmitError::InvalidJson(_) => INVALID_JSON_MESSAGE,
            SubmitError::Backend(_) => COMMUNICATION_ERROR_MESSAGE,
        }
    }

    /// Local validation failures never reached the network.
    pub fn is_local(&self) -> bool {
        !matches!(self, SubmitError::Backend(_))
    }
}

//! Form state for the two request sections and the submit pipelines that
//! fill their response panes.
//!
//! The deploy and recommend sections never share state: each pipeline
//! returns the text for its own pane and the caller stores it.

use serde_json::Value;

use crate::backend::{BackendClient, DeployResult, RecommendResult};
use crate::error::SubmitError;

pub const DEPLOY_EMPTY_MESSAGE: &str = "The token field is empty. Please write something.";
pub const INVALID_JSON_MESSAGE: &str = "❌ Error: the content entered is not valid JSON.";
pub const COMMUNICATION_ERROR_MESSAGE: &str =
    "⚠️ There was an error communicating with the backend. Check your connection.";
pub const RECOMMEND_EMPTY_MESSAGE: &str =
    "The recommendation field is empty. Please write something.";
pub const RECOMMEND_FAILED_MESSAGE: &str = "❌ Could not generate recommendations.";

pub const DEPLOY_PLACEHOLDER: &str = "The response will appear here...";
pub const RECOMMEND_PLACEHOLDER: &str = "Recommendations will appear here...";
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub token_draft: String,
    pub deploy_response: String,
    pub recommend_draft: String,
    pub recommend_response: String,
}

impl FormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn submit_deploy(&mut self, client: &BackendClient) {
        self.deploy_response = deploy_token(client, &self.token_draft).await;
    }

    pub async fn submit_recommend(&mut self, client: &BackendClient) {
        self.recommend_response = request_recommendations(client, &self.recommend_draft).await;
    }

    /// Text for the deploy response pane.
    pub fn deploy_pane(&self) -> &str {
        pane_text(&self.deploy_response, DEPLOY_PLACEHOLDER)
    }

    /// Text for the recommendation response pane.
    pub fn recommend_pane(&self) -> &str {
        pane_text(&self.recommend_response, RECOMMEND_PLACEHOLDER)
    }
}

fn pane_text<'a>(response: &'a str, placeholder: &'a str) -> &'a str {
    if response.is_empty() {
        placeholder
    } else {
        response
    }
}

/// Trim and parse the token draft. Anything syntactically JSON is accepted.
pub fn parse_token_draft(draft: &str) -> Result<Value, SubmitError> {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        return Err(SubmitError::EmptyTokenDraft);
    }
    Ok(serde_json::from_str(trimmed)?)
}

pub async fn try_deploy(client: &BackendClient, draft: &str) -> Result<DeployResult, SubmitError> {
    let token = parse_token_draft(draft)?;
    Ok(client.deploy_token(&token).await?)
}

pub async fn try_recommend(
    client: &BackendClient,
    draft: &str,
) -> Result<RecommendResult, SubmitError> {
    if draft.trim().is_empty() {
        return Err(SubmitError::EmptyPrompt);
    }
    Ok(client.recommend(draft).await?)
}

/// Run the whole deploy pipeline and produce the text for the deploy pane.
pub async fn deploy_token(client: &BackendClient, draft: &str) -> String {
    match try_deploy(client, draft).await {
        Ok(result) => format_deploy_result(&result),
        Err(err) => describe_failure("deploy", &err),
    }
}

/// Run the whole recommend pipeline and produce the text for the
/// recommendation pane.
pub async fn request_recommendations(client: &BackendClient, draft: &str) -> String {
    match try_recommend(client, draft).await {
        Ok(result) => format_recommend_result(&result),
        Err(err) => describe_failure("recommend", &err),
    }
}

fn describe_failure(action: &str, err: &SubmitError) -> String {
    if err.is_local() {
        tracing::debug!(action, error = %err, "submit rejected locally");
    } else {
        tracing::warn!(action, error = %err, "backend call failed");
    }
    err.user_message().to_string()
}

pub fn format_deploy_result(result: &DeployResult) -> String {
    let message = result.message.as_deref().unwrap_or_default();
    if result.success {
        format!(
            "✅ Token deployed successfully:\n- Mint Address: {}\n- Message: {}",
            or_not_available(result.mint_address.as_deref()),
            message
        )
    } else {
        format!("❌ Error: {}", message)
    }
}

// A failed recommendation never surfaces server text, unlike deploy.
pub fn format_recommend_result(result: &RecommendResult) -> String {
    if result.success {
        format!(
            "✅ Recommendations:\n{}",
            or_not_available(result.suggestions.as_deref())
        )
    } else {
        RECOMMEND_FAILED_MESSAGE.to_string()
    }
}

fn or_not_available(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}

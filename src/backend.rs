use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

const DEPLOY_TOKEN_PATH: &str = "/api/deploy-token";
const RECOMMEND_PATH: &str = "/api/recommend";

/// Transport-level failures talking to the dApp backend.
///
/// The detail here is for logs only; the form collapses every variant into
/// one generic message.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Token metadata the deploy endpoint expects.
///
/// Only used to render the example template; user drafts are posted as
/// whatever JSON they parse to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub name: String,
    pub uri: String,
    pub symbol: String,
    pub decimals: u8,
    pub initial_supply: u64,
}

impl TokenRequest {
    pub fn example() -> Self {
        Self {
            name: "MyToken".to_string(),
            uri: "https://example.com/metadata.json".to_string(),
            symbol: "MTK".to_string(),
            decimals: 9,
            initial_supply: 1_000_000,
        }
    }

    /// Pretty-printed JSON, ready to drop into the token draft.
    pub fn example_json() -> String {
        serde_json::to_string_pretty(&Self::example()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub mint_address: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecommendResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub suggestions: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecommendRequest<'a> {
    user_prompt: &'a str,
}

#[derive(Clone, Debug)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn deploy_token(&self, token: &Value) -> Result<DeployResult, BackendError> {
        self.post_json(DEPLOY_TOKEN_PATH, token).await
    }

    pub async fn recommend(&self, user_prompt: &str) -> Result<RecommendResult, BackendError> {
        self.post_json(RECOMMEND_PATH, &RecommendRequest { user_prompt })
            .await
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, BackendError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|source| BackendError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { url, status, body });
        }

        response
            .json::<R>()
            .await
            .map_err(|source| BackendError::Decode { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = BackendClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_example_token_uses_camel_case_fields() {
        let value = serde_json::to_value(TokenRequest::example()).unwrap();
        assert_eq!(value["initialSupply"], json!(1_000_000));
        assert_eq!(value["decimals"], json!(9));
        assert!(value.get("initial_supply").is_none());
    }

    #[test]
    fn test_example_json_parses_back() {
        let parsed: TokenRequest = serde_json::from_str(&TokenRequest::example_json()).unwrap();
        assert_eq!(parsed, TokenRequest::example());
    }

    #[test]
    fn test_deploy_result_optional_fields() {
        let result: DeployResult =
            serde_json::from_value(json!({"success": true, "message": "ok"})).unwrap();
        assert!(result.success);
        assert_eq!(result.mint_address, None);
        assert_eq!(result.message.as_deref(), Some("ok"));

        let result: DeployResult = serde_json::from_value(json!({
            "success": true,
            "mintAddress": "Abc123",
            "message": "ok"
        }))
        .unwrap();
        assert_eq!(result.mint_address.as_deref(), Some("Abc123"));
    }

    #[test]
    fn test_missing_success_flag_reads_as_failure() {
        let result: DeployResult = serde_json::from_value(json!({"message": "x"})).unwrap();
        assert!(!result.success);
        assert_eq!(result.message.as_deref(), Some("x"));

        let result: RecommendResult =
            serde_json::from_value(json!({"suggestions": "ignored"})).unwrap();
        assert!(!result.success);
    }

    #[test]
    fn test_recommend_request_body_shape() {
        let body = serde_json::to_value(RecommendRequest { user_prompt: "hi" }).unwrap();
        assert_eq!(body, json!({"userPrompt": "hi"}));
    }
}

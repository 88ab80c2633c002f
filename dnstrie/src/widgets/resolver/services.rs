use serde::Deserialize;
use serde_json::Value;

use super::errors::ApiError;
use super::model::LookupResponse;
use crate::config::ApiSettings;
use crate::widgets::trie::model::TrieNode;

const RESOLVE_PATH: &str = "/resolve";
const TRIE_PATH: &str = "/trie";

/// HTTP client for the resolution and snapshot endpoints.
#[derive(Debug, Clone)]
pub(crate) struct ResolverApi {
    client: reqwest::Client,
    base_url: String,
}

impl ResolverApi {
    /// Build a client for the configured service.
    pub(crate) fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(format!("dnstrie/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: settings.base_url().to_string(),
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `domain` through `GET /resolve?domain=<domain>`.
    pub(crate) async fn resolve(
        &self,
        domain: &str,
    ) -> Result<LookupResponse, ApiError> {
        let body = self.get_text(RESOLVE_PATH, &[("domain", domain)]).await?;
        decode_lookup(&body)
    }

    /// Fetch the current trie through `GET /trie`.
    pub(crate) async fn fetch_trie(&self) -> Result<TrieNode, ApiError> {
        let body = self.get_text(TRIE_PATH, &[]).await?;
        decode_snapshot(&body)
    }

    async fn get_text(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<String, ApiError> {
        let url = format!("{}{path}", self.base_url);
        log::debug!("GET {url} {query:?}");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        if !status.is_success() {
            log::debug!("GET {url} returned {status}");
            return Err(ApiError::Status { status, body });
        }

        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct ResolveBody {
    #[serde(alias = "ip")]
    address: String,
    #[serde(default)]
    note: Option<Value>,
}

/// Decode a `/resolve` success body.
pub(crate) fn decode_lookup(body: &str) -> Result<LookupResponse, ApiError> {
    let decoded: ResolveBody = serde_json::from_str(body)?;

    Ok(LookupResponse {
        address: decoded.address,
        is_new: decoded.note.as_ref().is_some_and(is_truthy),
    })
}

/// Decode a `/trie` success body.
///
/// Nesting depth is not capped: every label of a stored domain adds a level,
/// so the parser's recursion limit is lifted and the stack grows on demand.
pub(crate) fn decode_snapshot(body: &str) -> Result<TrieNode, ApiError> {
    let mut json = serde_json::Deserializer::from_str(body);
    json.disable_recursion_limit();
    let root =
        TrieNode::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;

    Ok(root)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

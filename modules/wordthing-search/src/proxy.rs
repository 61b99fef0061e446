//! Client side of the augmentation proxy.

use async_trait::async_trait;
use serde_json::Value;
use wordthing_common::{AugmentationKind, WordRequest};

use crate::error::AugmentError;

#[async_trait]
pub trait AugmentationSource: Send + Sync {
    async fn fetch(&self, kind: AugmentationKind, word: &str) -> Result<String, AugmentError>;
}

pub struct ProxyClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, kind: AugmentationKind) -> String {
        format!("{}/berg/api/{}", self.base_url, kind.path())
    }
}

#[async_trait]
impl AugmentationSource for ProxyClient {
    async fn fetch(&self, kind: AugmentationKind, word: &str) -> Result<String, AugmentError> {
        let resp = self
            .client
            .post(self.endpoint(kind))
            .json(&WordRequest {
                word: word.to_string(),
            })
            .send()
            .await?;

        let status = resp.status();
        let body: Value = resp
            .json()
            .await
            .map_err(|e| AugmentError::Malformed(e.to_string()))?;

        // An `error` key wins regardless of status.
        if let Some(message) = body.get("error").and_then(Value::as_str) {
            return Err(AugmentError::Proxy(message.to_string()));
        }
        if !status.is_success() {
            return Err(AugmentError::Transport(format!("proxy returned {status}")));
        }

        body.get(kind.response_field())
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                AugmentError::Malformed(format!("missing \"{}\" field", kind.response_field()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_kind() {
        let client = ProxyClient::new("http://localhost:3003/");
        assert_eq!(
            client.endpoint(AugmentationKind::LatinRoots),
            "http://localhost:3003/berg/api/latin-roots"
        );
    }
}

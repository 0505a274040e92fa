use crate::adapters::http::{PATH_BRIEF, PATH_CMD, PATH_PING};
use crate::domain::model::{BriefPayload, CommandRequest, CommandResponse, StatusPayload};
use crate::utils::error::{BackendError, Result};
use crate::utils::validation::validate_url;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

/// Thin client for a running backend, authenticated with the shared token.
#[derive(Debug, Clone)]
pub struct TerminalClient {
    base_url: String,
    token: String,
    client: Client,
}

impl TerminalClient {
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self> {
        validate_url("base_url", base_url)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client: Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.bearer_auth(&self.token).send().await?;
        tracing::debug!("Backend response status: {}", response.status());
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        match response.status() {
            status if status.is_success() => Ok(response.json::<T>().await?),
            StatusCode::UNAUTHORIZED => Err(BackendError::Unauthorized),
            status => Err(BackendError::UnexpectedStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }

    pub async fn ping(&self) -> Result<StatusPayload> {
        self.send(self.client.get(self.url(PATH_PING))).await
    }

    pub async fn brief(&self) -> Result<BriefPayload> {
        self.send(self.client.get(self.url(PATH_BRIEF))).await
    }

    pub async fn command(&self, cmd: &str) -> Result<CommandResponse> {
        let body = CommandRequest::new(cmd);
        self.send(self.client.post(self.url(PATH_CMD)).json(&body)).await
    }
}

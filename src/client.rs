// src/client.rs

use log::info;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;

use crate::errors::{LitmusError, Result};

/// HTTP client for the Litmus service. One instance drives the whole run;
/// the underlying `reqwest::Client` pools its connections.
pub struct LitmusClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl LitmusClient {
    /// Creates a new `LitmusClient` for the given service base URL.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// POSTs a JSON body and returns the parsed JSON response.
    pub async fn post_json(&self, path: &str, body: &impl Serialize) -> Result<Value> {
        let url = self.url(path);
        info!("POST request to {url}");

        let resp = self.send(self.client.post(&url).json(body)).await?;
        self.parse_json(resp).await
    }

    /// GETs a resource and returns the parsed JSON response.
    pub async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        info!("GET request to {url}");

        let resp = self.send(self.client.get(&url)).await?;
        self.parse_json(resp).await
    }

    /// GETs a resource and returns the raw response text.
    pub async fn get_text(&self, path: &str) -> Result<String> {
        let url = self.url(path);
        info!("GET request to {url}");

        let resp = self.send(self.client.get(&url)).await?;
        info!("Status code: {}", resp.status());
        Ok(resp.text().await?)
    }

    /// Sends one request with the service headers attached and surfaces
    /// any non-2xx response as an error carrying the body text.
    async fn send(&self, req: RequestBuilder) -> Result<Response> {
        let resp = req
            .header("Content-Type", "application/json")
            .header("X-API-Key", &self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(LitmusError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp)
    }

    async fn parse_json(&self, resp: Response) -> Result<Value> {
        let status = resp.status();
        let json: Value = resp.json().await?;

        info!("Status code: {status}");
        if debug_enabled() {
            info!("Response JSON:");
            info!("{}", serde_json::to_string_pretty(&json)?);
        }

        Ok(json)
    }
}

/// `DEBUG=TRUE` in the environment turns on response-body logging.
fn debug_enabled() -> bool {
    std::env::var("DEBUG").is_ok_and(|v| v == "TRUE")
}

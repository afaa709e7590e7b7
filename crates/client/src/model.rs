// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The model seam and its HTTP implementation.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

use crate::error::ApiError;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// Public Generative Language endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";

const API_KEY_HEADER: &str = "x-goog-api-key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Anything that can answer a `generateContent` request.
///
/// The command-line tools are generic over this trait so they can be driven
/// by scripted models in tests.
#[allow(async_fn_in_trait)]
pub trait GenerativeModel {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ApiError>;
}

/// HTTP client for a single model.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    http: Client,
    endpoint: String,
    model: String,
}

impl GeminiClient {
    /// Client against the public endpoint.
    pub fn new(api_key: &str, model: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    /// Client against a custom base URL (proxies, test servers).
    ///
    /// `model` may be given bare (`gemini-2.0-flash`) or qualified
    /// (`models/gemini-2.0-flash`).
    pub fn with_base_url(
        api_key: &str,
        model: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, ApiError> {
        let mut key = HeaderValue::from_str(api_key).map_err(|_| ApiError::InvalidApiKey)?;
        key.set_sensitive(true);
        let headers = HeaderMap::from_iter([(HeaderName::from_static(API_KEY_HEADER), key)]);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let model = model.into();
        let model_path = if model.starts_with("models/") {
            model.clone()
        } else {
            format!("models/{model}")
        };
        let endpoint = format!(
            "{}/{}:generateContent",
            base_url.trim_end_matches('/'),
            model_path
        );

        Ok(Self {
            http,
            endpoint,
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl GenerativeModel for GeminiClient {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ApiError> {
        tracing::debug!(
            model = %self.model,
            turns = request.contents.len(),
            "sending generateContent request"
        );

        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(model = %self.model, status = status.as_u16(), "received response");

        if !status.is_success() {
            return Err(ApiError::from_status(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

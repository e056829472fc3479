//! HTTP client for the translator API
//!
//! Every operation performs one request with a fixed timeout and returns an
//! [`Envelope`]. Transport failures, missing input files and undecodable
//! bodies become [`Envelope::Failure`]; HTTP error statuses do not.

mod envelope;
pub mod printer;

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{header, RequestBuilder};
use serde_json::{json, Map, Value};

use crate::common::config::Timeouts;
use crate::common::{Error, Result};

pub use envelope::{Body, Envelope, Reply};
pub use printer::{print_response, write_response};

/// Translation options sent as the `config` form field
pub type TranslateConfig = Map<String, Value>;

const USER_AGENT: &str = concat!("manga-api-tester/", env!("CARGO_PKG_VERSION"));

/// Declared media type of uploaded images
const IMAGE_MIME: &str = "image/png";

/// Target server address and call timeouts
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub timeouts: Timeouts,
}

impl ClientConfig {
    /// Create a configuration, rejecting port 0
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self> {
        if port == 0 {
            return Err(Error::InvalidPort(port));
        }
        Ok(Self {
            host: host.into(),
            port,
            timeouts: Timeouts::default(),
        })
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8000,
            timeouts: Timeouts::default(),
        }
    }
}

/// Translate route variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TranslateEndpoint {
    /// JSON result
    #[default]
    Json,
    /// Translated image bytes
    Image,
    /// Streaming JSON progress
    Stream,
}

impl TranslateEndpoint {
    pub fn path(self) -> &'static str {
        match self {
            TranslateEndpoint::Json => "/translate/with-form/json",
            TranslateEndpoint::Image => "/translate/with-form/image",
            TranslateEndpoint::Stream => "/translate/with-form/json/stream",
        }
    }
}

/// Response parts kept after the body has been read
struct RawResponse {
    status: u16,
    content_type: Option<String>,
    body: Vec<u8>,
}

/// Client for the translator API
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::HttpClient)?;
        let base_url = config.base_url();

        Ok(Self {
            http,
            config,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /`
    ///
    /// An empty body is reported as `{"message": "Server is running"}`.
    pub async fn health(&self) -> Envelope {
        let raw = match self.get("/").await {
            Ok(raw) => raw,
            Err(e) => return Envelope::failure(e),
        };

        if raw.body.is_empty() {
            return Envelope::success(
                raw.status,
                Body::Json(json!({ "message": "Server is running" })),
            );
        }

        match decode_json(&raw.body) {
            Ok(value) => Envelope::success(raw.status, Body::Json(value)),
            Err(e) => Envelope::failure(e),
        }
    }

    /// `GET /queue-size`, wrapped as `{"queue_size": <value>}`
    pub async fn queue_size(&self) -> Envelope {
        let raw = match self.get("/queue-size").await {
            Ok(raw) => raw,
            Err(e) => return Envelope::failure(e),
        };

        match decode_json(&raw.body) {
            Ok(value) => Envelope::success(raw.status, Body::Json(json!({ "queue_size": value }))),
            Err(e) => Envelope::failure(e),
        }
    }

    /// `GET /results/list`
    pub async fn results_list(&self) -> Envelope {
        let raw = match self.get("/results/list").await {
            Ok(raw) => raw,
            Err(e) => return Envelope::failure(e),
        };

        match decode_json(&raw.body) {
            Ok(value) => Envelope::success(raw.status, Body::Json(value)),
            Err(e) => Envelope::failure(e),
        }
    }

    /// Translate an image and decode the JSON result
    pub async fn translate_json(
        &self,
        image_path: impl AsRef<Path>,
        config: Option<&TranslateConfig>,
    ) -> Envelope {
        self.translate(TranslateEndpoint::Json, image_path.as_ref(), config)
            .await
    }

    /// Translate an image and keep the returned image bytes
    pub async fn translate_image(
        &self,
        image_path: impl AsRef<Path>,
        config: Option<&TranslateConfig>,
    ) -> Envelope {
        self.translate(TranslateEndpoint::Image, image_path.as_ref(), config)
            .await
    }

    /// Translate an image via the streaming route
    ///
    /// The stream is read to completion as a single response; only the
    /// status and declared content type are reported.
    pub async fn translate_json_stream(
        &self,
        image_path: impl AsRef<Path>,
        config: Option<&TranslateConfig>,
    ) -> Envelope {
        self.translate(TranslateEndpoint::Stream, image_path.as_ref(), config)
            .await
    }

    /// Dispatch to the route selected by `endpoint`
    pub async fn translate(
        &self,
        endpoint: TranslateEndpoint,
        image_path: &Path,
        config: Option<&TranslateConfig>,
    ) -> Envelope {
        if !image_path.exists() {
            return Envelope::failure(format!("File not found: {}", image_path.display()));
        }

        let form = match build_form(image_path, config).await {
            Ok(form) => form,
            Err(e) => return Envelope::failure(e),
        };

        let path = endpoint.path();
        let request = self
            .http
            .post(self.url(path))
            .multipart(form)
            .timeout(self.config.timeouts.translate());

        let raw = match self.send(path, request).await {
            Ok(raw) => raw,
            Err(e) => return Envelope::failure(e),
        };

        match endpoint {
            TranslateEndpoint::Json => match decode_json(&raw.body) {
                Ok(value) => Envelope::success(raw.status, Body::Json(value)),
                Err(e) => Envelope::failure(e),
            },
            TranslateEndpoint::Image => Envelope::Success(Reply {
                status_code: raw.status,
                data: Body::Text(content_type_or_unknown(raw.content_type)),
                image_data: Some(raw.body),
            }),
            TranslateEndpoint::Stream => Envelope::success(
                raw.status,
                Body::Text(content_type_or_unknown(raw.content_type)),
            ),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> std::result::Result<RawResponse, String> {
        let request = self
            .http
            .get(self.url(path))
            .timeout(self.config.timeouts.health());
        self.send(path, request).await
    }

    /// Send a request and read the full body
    async fn send(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> std::result::Result<RawResponse, String> {
        tracing::debug!(base_url = %self.base_url, path, "Sending request");

        let response = request.send().await.map_err(|e| {
            tracing::warn!(path, error = %e, "Request failed");
            e.to_string()
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| {
                tracing::warn!(path, error = %e, "Failed to read response body");
                e.to_string()
            })?
            .to_vec();

        tracing::debug!(path, status, bytes = body.len(), "Received response");

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

/// Build the `image` + `config` multipart form
async fn build_form(
    image_path: &Path,
    config: Option<&TranslateConfig>,
) -> std::result::Result<Form, String> {
    let bytes = tokio::fs::read(image_path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", image_path.display(), e))?;

    let file_name = image_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let part = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(IMAGE_MIME)
        .map_err(|e| e.to_string())?;

    Ok(Form::new()
        .part("image", part)
        .text("config", encode_config(config)))
}

/// JSON text of the translation config, `{}` when absent
pub fn encode_config(config: Option<&TranslateConfig>) -> String {
    match config {
        Some(map) => Value::Object(map.clone()).to_string(),
        None => "{}".to_string(),
    }
}

/// Parse a translation config given on the command line
pub fn parse_config(text: &str) -> Result<TranslateConfig> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::InvalidTranslateConfig(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

fn decode_json(body: &[u8]) -> std::result::Result<Value, String> {
    serde_json::from_slice(body).map_err(|e| format!("Invalid JSON in response: {}", e))
}

fn content_type_or_unknown(content_type: Option<String>) -> String {
    content_type.unwrap_or_else(|| "unknown".to_string())
}

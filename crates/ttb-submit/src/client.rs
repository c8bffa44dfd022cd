//! HTTP client for the timetable generation service.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::{Result, SubmitError};
use crate::payload::{GenerateRequest, parse_response};

/// Default endpoint of a locally running service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/generate";

/// Something that turns a request into a redirect target.
pub trait GenerationService {
    /// Sends the request and returns the location to navigate to.
    fn generate(&self, request: &GenerateRequest<'_>) -> Result<String>;
}

/// Posts requests as JSON to the service endpoint.
pub struct HttpGenerationService {
    client: Client,
    endpoint: String,
}

impl HttpGenerationService {
    /// Create a client for `endpoint`.
    ///
    /// With `timeout` unset, a request waits for as long as the service
    /// takes.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("timetable-builder/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl GenerationService for HttpGenerationService {
    fn generate(&self, request: &GenerateRequest<'_>) -> Result<String> {
        info!(
            endpoint = %self.endpoint,
            faculties = request.faculties.len(),
            "posting generation request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        // Failures come back as 4xx/5xx with the same JSON body, so the
        // status only matters when the body is unreadable.
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        debug!(status = status.as_u16(), bytes = body.len(), "generation response");

        parse_response(&body).map_err(|err| match err {
            SubmitError::InvalidResponse(detail) if !status.is_success() => {
                SubmitError::InvalidResponse(format!("HTTP {status}: {detail}"))
            }
            other => other,
        })
    }
}

/// Absolute form of a redirect, for display.
///
/// Relative targets are joined onto the endpoint; anything that cannot be
/// joined is returned unchanged.
pub fn resolve_redirect(endpoint: &str, redirect: &str) -> String {
    Url::parse(endpoint)
        .and_then(|base| base.join(redirect))
        .map_or_else(|_| redirect.to_string(), String::from)
}

//! Sending the contact form
//!
//! [`Transport`] is the single suspension point of the controller. The HTTP
//! implementation uses `reqwest`, which goes through `fetch` when compiled for
//! the browser.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use std::rc::Rc;
use thiserror::Error;

use crate::dom::Form;

/// One form POST
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub action: String,
    pub fields: Vec<(String, String)>,
}

impl SubmitRequest {
    /// Snapshot the form's target and fields
    pub fn from_form(form: &dyn Form) -> Self {
        Self {
            action: form.action(),
            fields: form.entries(),
        }
    }
}

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never completed
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Network(String),
}

#[async_trait(?Send)]
pub trait Transport {
    /// POST the form fields, asking for a JSON reply
    async fn post_form(&self, request: &SubmitRequest) -> Result<RawResponse, TransportError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Rc<T> {
    async fn post_form(&self, request: &SubmitRequest) -> Result<RawResponse, TransportError> {
        (**self).post_form(request).await
    }
}

/// `reqwest` backed transport
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn post_form(&self, request: &SubmitRequest) -> Result<RawResponse, TransportError> {
        tracing::debug!("POST {} ({} fields)", request.action, request.fields.len());

        let response = self
            .client
            .post(&request.action)
            .header(ACCEPT, "application/json")
            .form(&request.fields)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

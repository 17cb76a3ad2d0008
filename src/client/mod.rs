//! SILVESS API Client
//!
//! Generic request wrapper for the restaurant REST API.
//!
//! Every call goes through [`ApiClient::request`], which:
//!
//! - joins the endpoint to the configured base URL
//! - attaches `Authorization: Bearer <token>` when a token is stored
//! - serializes the JSON body and decodes the JSON response into a typed record
//! - on `401`, tears the session down and navigates to the login screen
//!
//! There is a single attempt per call: no retry, no timeout, no backoff.

mod error;
#[cfg(not(target_arch = "wasm32"))]
mod reqwest_transport;
mod transport;

pub use error::{ClientError, ClientResult, FALLBACK_MESSAGE};
#[cfg(not(target_arch = "wasm32"))]
pub use reqwest_transport::ReqwestTransport;
pub use transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;
use tracing::Instrument;

use crate::session::SessionContext;

/// Screen navigation side effects triggered by the client
pub trait Navigator {
    fn to_login(&self);

    fn to_dashboard(&self);
}

/// Request wrapper shared by all resource services
#[derive(Clone)]
pub struct ApiClient {
    base_url: Rc<str>,
    transport: Rc<dyn Transport>,
    session: SessionContext,
    navigator: Rc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Rc<dyn Transport>,
        session: SessionContext,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: Rc::from(base_url.trim_end_matches('/')),
            transport,
            session,
            navigator,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    /// Perform one HTTP call and decode its JSON body
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> ClientResult<R> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let span = tracing::debug_span!(
            "api_request",
            method = %method,
            endpoint = %endpoint,
            request_id = %request_id
        );

        async move {
            let request = self.build_request(method, endpoint, body, &request_id);

            let response = self.transport.send(request).await.map_err(|e| {
                tracing::error!(error = %e, "Request failed");
                ClientError::from(e)
            })?;

            if !response.is_success() {
                let error = ClientError::from_status(response.status, &response.body);
                if error.is_unauthorized() {
                    tracing::warn!("Unauthorized response, clearing session");
                    self.session.teardown();
                    self.navigator.to_login();
                } else {
                    tracing::warn!(status = response.status, error = %error, "Request rejected");
                }
                return Err(error);
            }

            serde_json::from_str(&response.body).map_err(|source| {
                tracing::error!(error = %source, "Failed to decode response");
                ClientError::Decode {
                    endpoint: endpoint.to_string(),
                    source,
                }
            })
        }
        .instrument(span)
        .await
    }

    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> ClientResult<R> {
        self.request(Method::Get, endpoint, None).await
    }

    /// GET with a URL-encoded query string built from flat pairs
    pub async fn get_with_query<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> ClientResult<R> {
        let query = encode_query(params);
        if query.is_empty() {
            self.get(endpoint).await
        } else {
            self.get(&format!("{}?{}", endpoint, query)).await
        }
    }

    pub async fn post<B, R>(&self, endpoint: &str, body: &B) -> ClientResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(ClientError::Encode)?;
        self.request(Method::Post, endpoint, Some(body)).await
    }

    /// POST without a body
    pub async fn post_empty<R: DeserializeOwned>(&self, endpoint: &str) -> ClientResult<R> {
        self.request(Method::Post, endpoint, None).await
    }

    pub async fn put<B, R>(&self, endpoint: &str, body: &B) -> ClientResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(ClientError::Encode)?;
        self.request(Method::Put, endpoint, Some(body)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, endpoint: &str) -> ClientResult<R> {
        self.request(Method::Delete, endpoint, None).await
    }

    fn build_request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
        request_id: &str,
    ) -> HttpRequest {
        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("X-Request-Id".to_string(), request_id.to_string()),
        ];
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        HttpRequest {
            method,
            url: format!("{}{}", self.base_url, endpoint),
            headers,
            body,
        }
    }
}

/// URL-encode flat key/value pairs into a query string
pub fn encode_query(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

//! `fetch` transport via gloo-net

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use silvess::client::{HttpRequest, HttpResponse, Method, Transport, TransportError};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut req = builder(request.method, &request.url);
        for (name, value) in &request.headers {
            req = req.header(name, value);
        }

        let req = match request.body {
            Some(body) => req.body(body),
            None => req.build(),
        }
        .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = req
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

//! Browser transport over `fetch`

use async_trait::async_trait;
use gloo_net::http::{Method as GlooMethod, RequestBuilder};
use teamsync::types::{AppError, Result};
use teamsync::{HttpRequest, HttpResponse, Method, Transport};

/// [`Transport`] backed by gloo-net
#[derive(Clone, Copy, Default)]
pub struct GlooTransport;

fn method(method: Method) -> GlooMethod {
    match method {
        Method::Get => GlooMethod::GET,
        Method::Post => GlooMethod::POST,
        Method::Put => GlooMethod::PUT,
        Method::Delete => GlooMethod::DELETE,
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = RequestBuilder::new(&request.url).method(method(request.method));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let req = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| AppError::Network(e.to_string()))?;

        let resp = req
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

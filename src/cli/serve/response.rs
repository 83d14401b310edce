//! HTTP responses: the socket-independent `Reply` and sending it.

use super::headers::SECURITY_HEADERS;
use crate::utils::mime::types::{HTML, PLAIN};
use anyhow::{Result, anyhow};
use tiny_http::{Header, Request, Response, StatusCode};

/// A fully-built response, independent of any socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn new(status: u16, content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type,
            headers: SECURITY_HEADERS.to_vec(),
            body: body.into(),
        }
    }

    pub fn html(body: String) -> Self {
        Self::new(200, HTML, body)
    }

    pub fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }

    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&'static str> {
        if name.eq_ignore_ascii_case("content-type") {
            return Some(self.content_type);
        }
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }

    /// 503 once shutdown is requested.
    pub fn unavailable() -> Self {
        Self::new(503, PLAIN, "503 Service Unavailable")
    }

    pub fn internal_error() -> Self {
        Self::new(500, PLAIN, "500 Internal Server Error")
    }
}

/// Write `reply` to the client.
///
/// For HEAD requests tiny_http sends the headers, including a
/// `Content-Length` taken from the body, and skips the body itself.
pub fn send(request: Request, reply: Reply) -> Result<()> {
    let mut response = Response::from_data(reply.body)
        .with_status_code(StatusCode(reply.status))
        .with_header(make_header("Content-Type", reply.content_type)?);
    for (name, value) in reply.headers {
        response.add_header(make_header(name, value)?);
    }
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &str, value: &str) -> Result<Header> {
    Header::from_bytes(key, value).map_err(|()| anyhow!("invalid header {key}: {value}"))
}

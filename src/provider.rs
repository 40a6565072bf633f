//! Read-only JSON-RPC endpoint handle.
//!
//! The handle only validates the endpoint. Signing is fully offline, nothing
//! is ever sent to the node.

use url::Url;

use crate::error::{Error, Result};

const SUPPORTED_SCHEMES: [&str; 4] = ["http", "https", "ws", "wss"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadProvider {
    url: Url,
}

impl ReadProvider {
    pub fn new(endpoint: &str) -> Result<Self> {
        let url = Url::parse(endpoint.trim())?;
        if !SUPPORTED_SCHEMES.contains(&url.scheme()) {
            return Err(Error::UnsupportedRpcScheme(url.scheme().to_owned()));
        }
        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Endpoint without credentials or query, safe to log.
    pub fn redacted(&self) -> String {
        match self.url.host_str() {
            Some(host) => match self.url.port() {
                Some(port) => format!("{}://{}:{}", self.url.scheme(), host, port),
                None => format!("{}://{}", self.url.scheme(), host),
            },
            None => format!("{}://", self.url.scheme()),
        }
    }
}

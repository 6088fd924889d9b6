//! Native transport using the reqwest blocking client

use super::{Transport, TransportError};
use crate::config::ClientConfig;
use reqwest::blocking::Client;
use std::time::Duration;

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| TransportError::RequestFailed {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, uri: &str) -> Result<Vec<u8>, TransportError> {
        let response = self.client.get(uri).send().map_err(map_reqwest_error)?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(TransportError::RateLimited);
        }
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                uri: uri.to_string(),
            });
        }

        let body = response.bytes().map_err(map_reqwest_error)?;
        Ok(body.to_vec())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::RequestFailed {
            message: err.to_string(),
        }
    }
}

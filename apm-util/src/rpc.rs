//! Making calls to the airport backend.

use reqwest::Client;
use reqwest::Error as ReqwestError;
use reqwest::header::HeaderMap;
pub use reqwest::Method;
use failure_derive::Fail;
use std::fmt::Display;
use serde::de::DeserializeOwned;
use log::*;

use crate::impl_from_for_error;

/// An error encountered after an RPC call.
#[derive(Debug, Fail)]
pub enum RpcError {
    /// The remote entity was not found.
    #[fail(display = "not found (remote)")]
    RemoteNotFound,
    /// The remote service was unavailable.
    #[fail(display = "remote service unavailable")]
    RemoteServiceUnavailable,
    /// The remote service returned an error.
    #[fail(display = "{} error (code {}): {}", service, code, error)]
    RemoteError {
        /// Name of the service responsible.
        service: &'static str,
        /// The HTTP status code returned.
        code: u16,
        /// The error text.
        error: String
    },
    /// reqwest error (connection failures and undecodable bodies both end up here).
    #[fail(display = "reqwest: {}", _0)]
    Reqwest(ReqwestError)
}
impl_from_for_error!(RpcError,
                     ReqwestError => Reqwest);

pub type RpcResult<T> = ::std::result::Result<T, RpcError>;

impl RpcError {
    pub fn status_code(&self) -> u16 {
        use self::RpcError::*;
        match *self {
            RemoteNotFound => 404,
            RemoteServiceUnavailable => 503,
            RemoteError { .. } => 502,
            _ => 500
        }
    }
}

/// Client for one HTTP backend, rooted at `base_url`.
///
/// Cloning is cheap; the underlying `reqwest` client is shared.
#[derive(Clone)]
pub struct BackendRpc {
    pub base_url: String,
    pub user_agent: String,
    pub name: &'static str,
    pub cli: Client
}
impl BackendRpc {
    pub fn new(ua: String, name: &'static str, base_url: String) -> Self {
        let cli = Client::new();
        let base_url = base_url.trim_end_matches('/').to_owned();
        Self {
            user_agent: ua,
            name, base_url, cli
        }
    }
    fn url<T: Display>(&self, path: T) -> String {
        format!("{}{}", self.base_url, path)
    }
    pub fn req_with_headers<T, U>(&self, meth: Method, path: T, hdrs: HeaderMap) -> RpcResult<U> where T: Display, U: DeserializeOwned {
        let url = self.url(path);
        debug!("RPC ({}): {} {}", self.name, meth, url);
        let mut resp = self.cli.request(meth, &url)
            .header(reqwest::header::USER_AGENT, &self.user_agent as &str)
            .headers(hdrs)
            .send()?;
        let status = resp.status();
        debug!("RPC ({}): response code {}", self.name, status.as_u16());
        match status.as_u16() {
            404 => Err(RpcError::RemoteNotFound)?,
            503 => Err(RpcError::RemoteServiceUnavailable)?,
            _ => {}
        }
        if !status.is_success() {
            let text = resp.text()?;
            warn!("RPC ({}): request failed ({}): {}", self.name, status.as_u16(), text);
            Err(RpcError::RemoteError {
                service: self.name,
                code: status.as_u16(),
                error: text
            })?
        }
        let ret: U = resp.json()?;
        Ok(ret)
    }
    /// Makes a request and decodes the JSON response body as a `U`.
    pub fn req<T, U>(&self, meth: Method, path: T) -> RpcResult<U> where T: Display, U: DeserializeOwned {
        let hdrs = HeaderMap::new();
        self.req_with_headers(meth, path, hdrs)
    }
    /// Makes a request, ignoring whatever comes back apart from the status code.
    ///
    /// Non-2xx statuses are not errors here; only failing to talk to the
    /// backend at all is.
    pub fn send<T>(&self, meth: Method, path: T) -> RpcResult<u16> where T: Display {
        let url = self.url(path);
        debug!("RPC ({}): {} {} (response discarded)", self.name, meth, url);
        let resp = self.cli.request(meth, &url)
            .header(reqwest::header::USER_AGENT, &self.user_agent as &str)
            .send()?;
        let code = resp.status().as_u16();
        debug!("RPC ({}): response code {}", self.name, code);
        Ok(code)
    }
}

//! Error handling for the map front.

pub use failure::Error;
use failure_derive::Fail;
use apm_util::impl_from_for_error;
use apm_util::http::StatusCode;
use apm_util::rpc::RpcError;
use handlebars::RenderError;

/// Error that could occur when processing a request.
#[derive(Fail, Debug)]
pub enum KarteError {
    /// No marker with that index.
    #[fail(display = "marker not found")]
    NotFound,
    /// The path doesn't exist.
    #[fail(display = "invalid path")]
    InvalidPath,
    /// A query parameter was missing or unparseable.
    #[fail(display = "bad or missing parameter: {}", _0)]
    BadParameter(&'static str),
    /// RPC error talking to the backend.
    #[fail(display = "RPC: {}", _0)]
    Rpc(RpcError),
    /// Handlebars rendering error.
    #[fail(display = "handlebars: {}", _0)]
    Hbs(RenderError)
}

impl StatusCode for KarteError {
    fn status_code(&self) -> u16 {
        use self::KarteError::*;

        match *self {
            NotFound => 404,
            InvalidPath => 404,
            BadParameter(_) => 400,
            Rpc(ref r) => r.status_code(),
            Hbs(_) => 500
        }
    }
}

impl_from_for_error!(KarteError,
                     RpcError => Rpc,
                     RenderError => Hbs);

pub type KarteResult<T, E = KarteError> = ::std::result::Result<T, E>;
pub type Result<T, E = Error> = ::std::result::Result<T, E>;

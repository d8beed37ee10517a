//! Talking to the airport backend.

use apm_types::{Airport, NearbyAirport, PopularAirport};
use apm_util::rpc::{BackendRpc, Method, RpcResult};
use apm_util::user_agent;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;
use std::thread;
use log::*;

/// Characters escaped when an airport code goes into a URL path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A request sent on a marker click, whose response nobody reads.
#[derive(Clone, Debug, PartialEq)]
pub enum OutboundRequest {
    /// `GET /airports/{id}`
    Detail(String),
    /// `POST /airports/{id}/click`
    Click(String)
}
impl OutboundRequest {
    pub fn method(&self) -> Method {
        match *self {
            OutboundRequest::Detail(_) => Method::GET,
            OutboundRequest::Click(_) => Method::POST
        }
    }
    pub fn path(&self) -> String {
        match *self {
            OutboundRequest::Detail(ref id) => format!("/airports/{}", utf8_percent_encode(id, PATH_SEGMENT)),
            OutboundRequest::Click(ref id) => format!("/airports/{}/click", utf8_percent_encode(id, PATH_SEGMENT))
        }
    }
}

/// Decodes the `GET /airports` list one record at a time, so one broken
/// record costs only its own marker.
pub fn decode_airports(records: Vec<Value>) -> Vec<Airport> {
    records.into_iter()
        .filter_map(|rec| {
            let name = rec.get("name")
                .and_then(Value::as_str)
                .unwrap_or("<unnamed>")
                .to_owned();
            match serde_json::from_value(rec) {
                Ok(apt) => Some(apt),
                Err(e) => {
                    warn!("Skipping malformed airport record {}: {}", name, e);
                    None
                }
            }
        })
        .collect()
}

/// Everything the map needs from the backend.
pub trait AirportBackend: Send + Sync + 'static {
    /// `GET /airports`.
    fn airports(&self) -> RpcResult<Vec<Airport>>;
    /// `GET /airports/nearby`; `radius_km` around the given point.
    fn nearby(&self, lat: f64, lng: f64, radius_km: f64) -> RpcResult<Vec<NearbyAirport>>;
    /// `GET /airports/popular`.
    fn popular(&self) -> RpcResult<Vec<PopularAirport>>;
    /// Sends `req` in the background and forgets about it.
    ///
    /// Requests fired one after the other are not guaranteed to reach the
    /// backend in that order.
    fn fire(&self, req: OutboundRequest);
}

/// The real backend, over HTTP.
pub struct HttpBackend {
    rpc: BackendRpc
}
impl HttpBackend {
    pub fn new(base_url: String) -> Self {
        let rpc = BackendRpc::new(user_agent!(), "backend", base_url);
        Self { rpc }
    }
}
impl AirportBackend for HttpBackend {
    fn airports(&self) -> RpcResult<Vec<Airport>> {
        let records: Vec<Value> = self.rpc.req(Method::GET, "/airports")?;
        Ok(decode_airports(records))
    }
    fn nearby(&self, lat: f64, lng: f64, radius_km: f64) -> RpcResult<Vec<NearbyAirport>> {
        let url = format!("/airports/nearby?lat={}&lng={}&radius={}", lat, lng, radius_km);
        self.rpc.req(Method::GET, url)
    }
    fn popular(&self) -> RpcResult<Vec<PopularAirport>> {
        self.rpc.req(Method::GET, "/airports/popular")
    }
    /// One thread per request, so a `Click` may overtake the `Detail` fired
    /// just before it.
    fn fire(&self, req: OutboundRequest) {
        let rpc = self.rpc.clone();
        let spawned = thread::Builder::new()
            .name("apm-fire".into())
            .spawn(move || {
                match rpc.send(req.method(), req.path()) {
                    Ok(code) => debug!("{} {} -> {}", req.method(), req.path(), code),
                    Err(e) => debug!("{} {} failed: {}", req.method(), req.path(), e)
                }
            });
        if let Err(e) = spawned {
            warn!("Couldn't spawn request thread: {}", e);
        }
    }
}

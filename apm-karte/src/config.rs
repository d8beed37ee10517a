//! Standard configuration module.

use serde_derive::Deserialize;
use std::collections::HashMap;
use apm_util::{ConfigExt, crate_name};

use crate::map::{LatLng, MapOptions, TileLayer};

/// `apm-karte` configuration.
///
/// Everything has a default, so running without `apm_karte.toml` gives the
/// stock map of North America pointed at a backend on `localhost:5000`.
#[derive(Deserialize, Debug)]
pub struct Config {
    /// Address to listen on.
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Base URL of the airport backend.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    /// Tile URL template, in Leaflet's `{s}/{z}/{x}/{y}` syntax.
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
    #[serde(default = "default_tile_attribution")]
    pub tile_attribution: String,
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_center_lng")]
    pub center_lng: f64,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    /// Global log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Per-target log levels, e.g. `apm_util = "debug"`.
    #[serde(default)]
    pub log_level_for: HashMap<String, String>
}

fn default_listen() -> String { "127.0.0.1:8080".into() }
fn default_backend_url() -> String { "http://localhost:5000".into() }
fn default_tile_url() -> String { "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into() }
fn default_tile_attribution() -> String { "&copy; OpenStreetMap".into() }
fn default_center_lat() -> f64 { 40.0 }
fn default_center_lng() -> f64 { -100.0 }
fn default_zoom() -> u8 { 4 }
fn default_log_level() -> String { "info".into() }

impl Config {
    pub fn map_options(&self) -> MapOptions {
        MapOptions {
            center: LatLng::new(self.center_lat, self.center_lng),
            zoom: self.zoom,
            tiles: TileLayer {
                url_template: self.tile_url.clone(),
                attribution: self.tile_attribution.clone()
            }
        }
    }
}

impl ConfigExt for Config {
    fn crate_name() -> &'static str {
        crate_name!()
    }
}

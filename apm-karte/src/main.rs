//! Serves a clustered map of airports, loaded from the airport backend.

pub mod errors;
pub mod config;
pub mod map;
pub mod marker;
pub mod backend;
pub mod client;
pub mod ctx;
pub mod tmpl;
pub mod templates;

use log::*;
use apm_util::ConfigExt;

use crate::backend::HttpBackend;
use crate::client::MapClient;
use crate::config::Config;
use crate::ctx::App;
use crate::errors::Result;

fn main() -> Result<()> {
    // Config first, since it decides the log levels.
    let cfg = Config::load()?;
    apm_util::setup_logging(&cfg.log_level, &cfg.log_level_for)?;
    info!("apm-karte starting");
    info!("initialising Handlebars");
    let hbs = tmpl::handlebars_init()?;
    let backend = HttpBackend::new(cfg.backend_url.clone());
    let mut client = MapClient::init(&cfg.map_options(), backend);
    info!("loading airports from {}", cfg.backend_url);
    client.fetch_airports();
    let app = App::new(client, hbs);
    apm_util::http::start_server(&cfg.listen, app);
}

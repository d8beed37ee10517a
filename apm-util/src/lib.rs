//! Utility functions for all apm crates.
//!
//! Currently contains:
//!
//! - random macros
//! - logging
//! - config
//! - talking to the airport backend (`rpc`)
//! - serving HTTP (`http`)

pub mod http;
pub mod rpc;

use config as cfg;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use log::*;

#[macro_export]
macro_rules! crate_name {
    () => {module_path!().split("::").next().unwrap()}
}

/// Expands to a `User-Agent` string for the calling crate, e.g. `apm_karte/0.1.0`.
#[macro_export]
macro_rules! user_agent {
    () => {format!("{}/{}", $crate::crate_name!(), env!("CARGO_PKG_VERSION"))}
}

#[macro_export]
macro_rules! impl_from_for_error {
    ($error:ident, $($orig:ident => $var:ident),*) => {
        $(
            impl From<$orig> for $error {
                fn from(err: $orig) -> $error {
                    $error::$var(err)
                }
            }
         )*
    }
}

/// Extension trait for populating crate configuration structs.
///
/// If a struct used for config implements `Deserialize`, this
/// trait can be used to populate it with values from `[crate name].toml`
/// in the current directory, and from `APM_*` environment variables.
///
/// A missing config file is not an error; give every field a serde default
/// if the crate should start without one.
pub trait ConfigExt: DeserializeOwned {
    fn crate_name() -> &'static str;
    fn load() -> Result<Self, failure::Error> {
        let cn = Self::crate_name();
        info!("Loading apm config for crate {}", cn);
        let mut settings = cfg::Config::default();
        if let Err(e) = settings.merge(cfg::File::with_name(cn)) {
            warn!("Error loading config from file: {}", e);
            settings = cfg::Config::default();
        }
        let mut s2 = settings.clone();
        if let Err(e) = s2.merge(cfg::Environment::with_prefix("APM")) {
            warn!("Error loading config from env: {}", e);
        }
        else {
            settings = s2;
        }
        let ret = settings.try_into()?;
        Ok(ret)
    }
}

/// Initialize logging.
///
/// `level` is the global level filter (`"info"`, `"debug"`...); `overrides`
/// maps log targets (crate or module paths) to their own levels. Levels
/// that fail to parse are reported on stderr and ignored, since the logger
/// isn't up yet.
pub fn setup_logging(level: &str, overrides: &HashMap<String, String>) -> Result<(), failure::Error> {
    let global = parse_level(level).unwrap_or(LevelFilter::Info);
    let mut disp = fern::Dispatch::new()
        .format(|out, msg, record| {
            out.finish(format_args!("{} [{} {}] {}",
                                    chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                                    record.target(),
                                    record.level(),
                                    msg))
        })
        .level(global);
    for (target, lvl) in overrides.iter() {
        if let Some(l) = parse_level(lvl) {
            disp = disp.level_for(target.clone(), l);
        }
    }
    disp.chain(std::io::stdout())
        .apply()?;
    Ok(())
}

fn parse_level(lvl: &str) -> Option<LevelFilter> {
    match lvl.parse() {
        Ok(l) => Some(l),
        Err(_) => {
            eprintln!("Ignoring invalid log level '{}'", lvl);
            None
        }
    }
}

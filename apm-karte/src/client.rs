//! The map client: one map, one airport fetch, and click handling after that.

use log::*;

use crate::backend::AirportBackend;
use crate::errors::*;
use crate::map::{MapOptions, MapView};
use crate::marker::ClusterGroup;

pub struct MapClient<B> {
    backend: B,
    map: MapView
}
impl<B: AirportBackend> MapClient<B> {
    /// Sets up the base map. No markers until `fetch_airports` is called.
    pub fn init(opts: &MapOptions, backend: B) -> Self {
        let mut map = MapView::new(opts.center, opts.zoom);
        map.add_tile_layer(opts.tiles.clone());
        Self { backend, map }
    }
    /// Loads the airport list and puts a marker on the map for each airport
    /// that has coordinates, returning how many were placed.
    ///
    /// If the backend can't be reached or sends garbage, this logs the error
    /// and leaves the map without markers. There's no retry.
    pub fn fetch_airports(&mut self) -> usize {
        let airports = match self.backend.airports() {
            Ok(a) => a,
            Err(e) => {
                error!("Error loading airports: {}", e);
                return 0;
            }
        };
        let group = ClusterGroup::from_airports(&airports);
        let n = group.len();
        info!("Placed {} markers for {} airports", n, airports.len());
        self.map.attach_cluster_group(group);
        n
    }
    /// Handles a click on marker `idx`.
    ///
    /// Returns whether the marker had a listener (and so whether anything
    /// was sent to the backend).
    pub fn click(&self, idx: usize) -> KarteResult<bool> {
        let marker = self.map.marker(idx)
            .ok_or(KarteError::NotFound)?;
        match marker.listener {
            Some(ref l) => {
                l.on_click(&self.backend);
                Ok(true)
            },
            None => Ok(false)
        }
    }
    pub fn map(&self) -> &MapView {
        &self.map
    }
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

//! The map itself: view settings, tile layers and the (single) marker
//! cluster layer.

use serde_derive::Serialize;
use geojson::FeatureCollection;
use log::*;

use crate::marker::{ClusterGroup, Marker};

/// A point on the map, latitude first.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64
}
impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

/// A raster base layer. Tiles are fetched and drawn by the browser.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String
}

/// What the map looks like before any airports turn up.
#[derive(Clone, Debug, PartialEq)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
    pub tiles: TileLayer
}
impl Default for MapOptions {
    fn default() -> Self {
        MapOptions {
            center: LatLng::new(40.0, -100.0),
            zoom: 4,
            tiles: TileLayer {
                url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
                attribution: "&copy; OpenStreetMap".into()
            }
        }
    }
}

#[derive(Debug)]
pub struct MapView {
    center: LatLng,
    zoom: u8,
    tile_layers: Vec<TileLayer>,
    clusters: Option<ClusterGroup>
}
impl MapView {
    pub fn new(center: LatLng, zoom: u8) -> Self {
        MapView {
            center, zoom,
            tile_layers: vec![],
            clusters: None
        }
    }
    pub fn center(&self) -> LatLng {
        self.center
    }
    pub fn zoom(&self) -> u8 {
        self.zoom
    }
    pub fn add_tile_layer(&mut self, layer: TileLayer) {
        self.tile_layers.push(layer);
    }
    pub fn tile_layers(&self) -> &[TileLayer] {
        &self.tile_layers
    }
    /// Attaches a fully-populated cluster layer to the map.
    ///
    /// Only one cluster layer is shown; attaching another replaces it.
    pub fn attach_cluster_group(&mut self, group: ClusterGroup) {
        if self.clusters.is_some() {
            warn!("Replacing already attached cluster layer");
        }
        self.clusters = Some(group);
    }
    pub fn cluster_group(&self) -> Option<&ClusterGroup> {
        self.clusters.as_ref()
    }
    /// All markers currently on the map.
    pub fn markers(&self) -> &[Marker] {
        match self.clusters {
            Some(ref c) => c.markers(),
            None => &[]
        }
    }
    pub fn marker(&self, idx: usize) -> Option<&Marker> {
        self.markers().get(idx)
    }
    /// The marker layer as GeoJSON; empty if nothing is attached.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        match self.clusters {
            Some(ref c) => c.to_feature_collection(),
            None => ClusterGroup::new().to_feature_collection()
        }
    }
}

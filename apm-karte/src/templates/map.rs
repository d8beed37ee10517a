use serde_derive::Serialize;

use crate::map::{LatLng, MapView, TileLayer};

/// What the page script needs to set the map up.
#[derive(Serialize)]
pub struct PageConfig<'a> {
    pub center: LatLng,
    pub zoom: u8,
    pub tiles: &'a [TileLayer],
    pub markers_url: &'static str
}

#[derive(Serialize)]
pub struct MapPageView {
    /// `PageConfig` as JSON, safe to drop into a `<script>` block.
    pub config_json: String
}
impl MapPageView {
    pub fn new(map: &MapView) -> Self {
        let cfg = PageConfig {
            center: map.center(),
            zoom: map.zoom(),
            tiles: map.tile_layers(),
            markers_url: "/markers"
        };
        // Serializing plain structs of strings and numbers can't fail.
        let json = serde_json::to_string(&cfg).unwrap_or_else(|_| "{}".into());
        MapPageView {
            config_json: json.replace("</", "<\\/")
        }
    }
}

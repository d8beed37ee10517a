//! Airport markers, their popups and click listeners, and the cluster layer
//! they all live in.

use apm_types::Airport;
use geojson::{Feature, FeatureCollection, Geometry, Value};
use handlebars::html_escape;
use serde_json::json;
use log::*;

use crate::backend::{AirportBackend, OutboundRequest};
use crate::map::LatLng;

/// Contents of the popup shown when a marker is opened.
#[derive(Clone, Debug, PartialEq)]
pub struct Popup {
    pub title: String,
    pub code: Option<String>,
    pub place: Option<String>,
    pub altitude_ft: Option<f64>
}
impl Popup {
    pub fn for_airport(apt: &Airport) -> Self {
        Popup {
            title: apt.name.clone(),
            code: apt.identifier().map(|x| x.to_owned()),
            place: apt.place(),
            altitude_ft: apt.alt
        }
    }
    /// The popup as plain text, one entry per line.
    pub fn lines(&self) -> Vec<String> {
        let mut ret = vec![self.title.clone()];
        if let Some(ref c) = self.code {
            ret.push(format!("Código: {}", c));
        }
        if let Some(ref p) = self.place {
            ret.push(p.clone());
        }
        if let Some(a) = self.altitude_ft {
            ret.push(format!("Altitud: {} ft", a));
        }
        ret
    }
    /// The popup as an HTML fragment, title in bold. Everything is escaped.
    pub fn to_html(&self) -> String {
        let mut lines = self.lines().into_iter()
            .map(|l| html_escape(&l));
        let mut ret = format!("<b>{}</b>", lines.next().unwrap_or_default());
        for l in lines {
            ret.push_str("<br>");
            ret.push_str(&l);
        }
        ret
    }
}

/// What happens when a marker gets clicked.
///
/// Tells the backend about the click, and fetches the airport's details
/// (which nobody looks at). Neither request is waited on.
#[derive(Clone, Debug, PartialEq)]
pub struct ClickListener {
    identifier: String
}
impl ClickListener {
    pub fn new<T: Into<String>>(identifier: T) -> Self {
        ClickListener { identifier: identifier.into() }
    }
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
    pub fn on_click<B: AirportBackend + ?Sized>(&self, backend: &B) {
        debug!("Marker for {} clicked", self.identifier);
        backend.fire(OutboundRequest::Detail(self.identifier.clone()));
        backend.fire(OutboundRequest::Click(self.identifier.clone()));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub position: LatLng,
    pub popup: Popup,
    /// Only present for airports with a code to report clicks against.
    pub listener: Option<ClickListener>
}
impl Marker {
    /// Builds the marker for an airport, or returns `None` if it has no
    /// coordinates to put one at.
    pub fn for_airport(apt: &Airport) -> Option<Self> {
        let (lat, lng) = apt.lat_lng()?;
        Some(Marker {
            position: LatLng::new(lat, lng),
            popup: Popup::for_airport(apt),
            listener: apt.identifier().map(ClickListener::new)
        })
    }
    pub fn is_clickable(&self) -> bool {
        self.listener.is_some()
    }
}

/// The layer that groups markers together. Clustering itself happens in the
/// browser; this just holds the markers in insertion order.
#[derive(Clone, Debug, Default)]
pub struct ClusterGroup {
    markers: Vec<Marker>
}
impl ClusterGroup {
    pub fn new() -> Self {
        Self::default()
    }
    /// Builds one marker per airport that has coordinates.
    ///
    /// Airports without coordinates are skipped with a warning.
    pub fn from_airports(airports: &[Airport]) -> Self {
        let mut ret = Self::new();
        for apt in airports {
            match Marker::for_airport(apt) {
                Some(m) => ret.add_layer(m),
                None => {
                    warn!("Airport without coordinates: {}", apt.name);
                }
            }
        }
        ret
    }
    pub fn add_layer(&mut self, marker: Marker) {
        self.markers.push(marker);
    }
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
    pub fn len(&self) -> usize {
        self.markers.len()
    }
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let features = self.markers.iter()
            .enumerate()
            .map(|(i, m)| {
                let props = json!({
                    "marker": i,
                    "popup": m.popup.to_html(),
                    "identifier": m.listener.as_ref().map(|l| l.identifier()),
                    "clickable": m.is_clickable()
                });
                Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(Value::Point(vec![m.position.lng, m.position.lat]))),
                    id: None,
                    properties: props.as_object().cloned(),
                    foreign_members: None
                }
            })
            .collect();
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None
        }
    }
}

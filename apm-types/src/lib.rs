//! Types for the JSON served by the airport backend.

mod fns;
#[cfg(test)]
mod tests;

use serde_derive::{Serialize, Deserialize};
use crate::fns::*;

/// A GeoJSON-style point location.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Location {
    /// Geometry type; always `"Point"` in practice.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// `[longitude, latitude]`, in that order.
    #[serde(default, deserialize_with = "lenient_coordinates")]
    pub coordinates: Option<Vec<f64>>
}
impl Location {
    pub fn point(lng: f64, lat: f64) -> Self {
        Location {
            kind: Some("Point".into()),
            coordinates: Some(vec![lng, lat])
        }
    }
    /// Returns `(latitude, longitude)`, swapping the GeoJSON axis order.
    ///
    /// Anything shorter than two numbers counts as no coordinates at all.
    pub fn lat_lng(&self) -> Option<(f64, f64)> {
        match self.coordinates.as_ref().map(|c| &c[..]) {
            Some([lng, lat, ..]) => Some((*lat, *lng)),
            _ => None
        }
    }
}

/// One airport, as returned by `GET /airports`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Airport {
    #[serde(default, deserialize_with = "str_or_null")]
    pub name: String,
    /// IATA or FAA code.
    #[serde(default, deserialize_with = "non_empty_str_opt")]
    pub iata_faa: Option<String>,
    #[serde(default, deserialize_with = "non_empty_str_opt")]
    pub icao: Option<String>,
    /// What the backend itself calls the IATA code.
    #[serde(default, deserialize_with = "non_empty_str_opt")]
    pub iata_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt")]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "non_empty_str_opt")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "non_empty_str_opt")]
    pub country: Option<String>,
    /// Altitude, in feet.
    #[serde(default, deserialize_with = "lenient_f64_opt")]
    pub alt: Option<f64>,
    /// Timezone, as a name or a UTC offset.
    #[serde(default, deserialize_with = "lenient_str_opt")]
    pub tz: Option<String>
}
impl Airport {
    /// The code used to address this airport on the backend: `iata_faa` if
    /// set, otherwise `icao`, otherwise `iata_code`.
    pub fn identifier(&self) -> Option<&str> {
        self.iata_faa.as_ref()
            .or(self.icao.as_ref())
            .or(self.iata_code.as_ref())
            .map(|x| x as &str)
    }
    /// `(latitude, longitude)`, if the airport has usable coordinates.
    pub fn lat_lng(&self) -> Option<(f64, f64)> {
        self.location.as_ref().and_then(|l| l.lat_lng())
    }
    /// `"city, country"`, or whichever half exists.
    pub fn place(&self) -> Option<String> {
        match (&self.city, &self.country) {
            (Some(c), Some(n)) => Some(format!("{}, {}", c, n)),
            (Some(x), None) | (None, Some(x)) => Some(x.clone()),
            (None, None) => None
        }
    }
}

/// Result row of `GET /airports/nearby`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NearbyAirport {
    pub iata_code: String,
    pub distance_km: f64
}

/// Result row of `GET /airports/popular`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PopularAirport {
    pub iata_code: String,
    /// Click count over the backend's popularity window (a redis sorted-set
    /// score, hence the float).
    pub visits: f64
}

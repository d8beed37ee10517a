use crate::*;

macro_rules! mktest {
    ($($name:ident, $path:expr, $ty:ty),*) => {
        $(
        #[test]
        fn $name() {
            let data = include_str!($path);
            let _: $ty = serde_json::from_str(&data).unwrap();
        }
        )*
    }
}
mktest! {
    parse_airports_backend, "airports_backend.json", Vec<Airport>,
    parse_airports_mixed, "airports_mixed.json", Vec<Airport>
}

fn mixed() -> Vec<Airport> {
    serde_json::from_str(include_str!("airports_mixed.json")).unwrap()
}

#[test]
fn backend_iata_code_is_the_identifier() {
    let apts: Vec<Airport> = serde_json::from_str(include_str!("airports_backend.json")).unwrap();
    assert_eq!(apts[0].identifier(), Some("JFK"));
    assert_eq!(apts[1].identifier(), Some("ORD"));
    // Empty codes don't count.
    assert_eq!(apts[2].iata_code, None);
    assert_eq!(apts[2].identifier(), None);
}

#[test]
fn coordinates_are_swapped_to_lat_lng() {
    let apts = mixed();
    assert_eq!(apts[0].lat_lng(), Some((40.7, -73.9)));
    assert_eq!(apts[1].lat_lng(), Some((35.25, -120.5)));
}

#[test]
fn missing_or_short_coordinates_are_none() {
    let apts = mixed();
    assert_eq!(apts[2].location, None);
    assert_eq!(apts[2].lat_lng(), None);
    assert_eq!(apts[3].lat_lng(), None);
    assert_eq!(apts[5].lat_lng(), None);
}

#[test]
fn iata_faa_takes_precedence_over_icao() {
    let apts = mixed();
    assert_eq!(apts[0].identifier(), Some("TST"));
    assert_eq!(apts[1].identifier(), Some("KXYZ"));
    assert_eq!(apts[4].identifier(), Some("STR"));
}

#[test]
fn optional_fields() {
    let apts = mixed();
    assert_eq!(apts[0].place(), Some("NYC, US".into()));
    assert_eq!(apts[0].alt, None);
    assert_eq!(apts[1].place(), None);
    assert_eq!(apts[1].alt, Some(1234.0));
    assert_eq!(apts[4].alt, Some(512.0));
    assert_eq!(apts[4].tz.as_ref().map(|x| x as &str), Some("America/New_York"));
    assert_eq!(apts[5].name, "");
}

#[test]
fn place_with_one_half() {
    let apt = Airport {
        name: "Half".into(),
        country: Some("Iceland".into()),
        ..Default::default()
    };
    assert_eq!(apt.place(), Some("Iceland".into()));
}

#[test]
fn extra_coordinates_are_ignored() {
    let loc = Location {
        kind: None,
        coordinates: Some(vec![2.0, 1.0, 300.0])
    };
    assert_eq!(loc.lat_lng(), Some((1.0, 2.0)));
    assert_eq!(Location::point(-3.5, 7.25).lat_lng(), Some((7.25, -3.5)));
}

#[test]
fn parse_nearby_and_popular() {
    let nearby: Vec<NearbyAirport> = serde_json::from_str(r#"[{"iata_code": "JFK", "distance_km": 12.5}]"#).unwrap();
    assert_eq!(nearby[0].iata_code, "JFK");
    assert_eq!(nearby[0].distance_km, 12.5);
    let popular: Vec<PopularAirport> = serde_json::from_str(r#"[{"iata_code": "ORD", "visits": 3.0}]"#).unwrap();
    assert_eq!(popular[0].visits, 3.0);
}

#[test]
fn malformed_coordinates_only_drop_the_location() {
    let apts: Vec<Airport> = serde_json::from_str(r#"[
        {"name": "Good", "iata_faa": "GUD", "location": {"coordinates": [-73.9, 40.7]}},
        {"name": "Strings", "iata_faa": "BAD", "location": {"coordinates": ["x", "y"]}},
        {"name": "Scalar", "location": {"coordinates": "oops"}},
        {"name": "Flat", "location": "somewhere"},
        {"name": "Odd alt", "location": {"coordinates": [1, 2]}, "alt": true}
    ]"#).unwrap();
    assert_eq!(apts.len(), 5);
    assert_eq!(apts[0].lat_lng(), Some((40.7, -73.9)));
    assert_eq!(apts[1].lat_lng(), None);
    assert_eq!(apts[1].identifier(), Some("BAD"));
    assert_eq!(apts[2].lat_lng(), None);
    assert_eq!(apts[3].location, None);
    assert_eq!(apts[4].lat_lng(), Some((2.0, 1.0)));
    assert_eq!(apts[4].alt, None);
}

#[test]
fn both_iata_keys_are_accepted() {
    let apts: Vec<Airport> = serde_json::from_str(r#"[
        {"name": "Both", "iata_faa": "FAA", "iata_code": "IAT", "location": {"coordinates": [1, 2]}},
        {"name": "Code only", "iata_code": "IAT"},
        {"name": "Icao beats code", "icao": "KICA", "iata_code": "IAT"}
    ]"#).unwrap();
    assert_eq!(apts[0].identifier(), Some("FAA"));
    assert_eq!(apts[1].identifier(), Some("IAT"));
    assert_eq!(apts[2].identifier(), Some("KICA"));
}

#[test]
fn numeric_tz_is_accepted() {
    let apts: Vec<Airport> = serde_json::from_str(r#"[
        {"name": "Offset", "tz": -5},
        {"name": "Named", "tz": "America/Chicago"},
        {"name": "Blank", "tz": ""}
    ]"#).unwrap();
    assert_eq!(apts[0].tz.as_ref().map(|x| x as &str), Some("-5"));
    assert_eq!(apts[1].tz.as_ref().map(|x| x as &str), Some("America/Chicago"));
    assert_eq!(apts[2].tz, None);
}

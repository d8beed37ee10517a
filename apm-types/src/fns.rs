use serde::*;
use serde_derive::Deserialize;

/// Deserializes an optional string, treating `null`, `""` and all-whitespace
/// strings as absent.
pub fn non_empty_str_opt<'de, D>(d: D) -> Result<Option<String>, D::Error> where D: Deserializer<'de> {
    Deserialize::deserialize(d)
        .map(|x: Option<String>| {
            x.and_then(|x| {
                if x.trim().is_empty() {
                    None
                }
                else {
                    Some(x)
                }
            })
        })
}
/// Deserializes a string that may be `null`, turning `null` into `""`.
pub fn str_or_null<'de, D>(d: D) -> Result<String, D::Error> where D: Deserializer<'de> {
    Deserialize::deserialize(d)
        .map(|x: Option<String>| x.unwrap_or_default())
}
#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrStr {
    Num(f64),
    Str(String),
    Other(de::IgnoredAny)
}
/// Deserializes an optional number that some datasets ship as a string.
/// Anything else (booleans, objects, unparseable strings) counts as absent.
pub fn lenient_f64_opt<'de, D>(d: D) -> Result<Option<f64>, D::Error> where D: Deserializer<'de> {
    let x: Option<NumOrStr> = Deserialize::deserialize(d)?;
    Ok(match x {
        Some(NumOrStr::Num(n)) => Some(n),
        Some(NumOrStr::Str(s)) => s.trim().parse().ok(),
        Some(NumOrStr::Other(_)) | None => None
    })
}
/// Deserializes an optional string that may also arrive as a number (`-5`
/// rather than `"-5"`). Empty strings and other JSON types count as absent.
pub fn lenient_str_opt<'de, D>(d: D) -> Result<Option<String>, D::Error> where D: Deserializer<'de> {
    let x: Option<NumOrStr> = Deserialize::deserialize(d)?;
    Ok(match x {
        Some(NumOrStr::Num(n)) => Some(n.to_string()),
        Some(NumOrStr::Str(s)) => {
            if s.trim().is_empty() {
                None
            }
            else {
                Some(s)
            }
        },
        Some(NumOrStr::Other(_)) | None => None
    })
}
/// Deserializes GeoJSON `[lng, lat, ...]` coordinates. Anything that isn't
/// an array of at least two numbers counts as no coordinates.
pub fn lenient_coordinates<'de, D>(d: D) -> Result<Option<Vec<f64>>, D::Error> where D: Deserializer<'de> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Coords {
        Nums(Vec<f64>),
        Other(de::IgnoredAny)
    }
    let x: Option<Coords> = Deserialize::deserialize(d)?;
    Ok(match x {
        Some(Coords::Nums(v)) if v.len() >= 2 => Some(v),
        _ => None
    })
}
/// Deserializes an optional struct, treating a value of the wrong shape as
/// absent instead of failing the whole record.
pub fn lenient_opt<'de, D, T>(d: D) -> Result<Option<T>, D::Error> where D: Deserializer<'de>, T: Deserialize<'de> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OrElse<T> {
        Val(T),
        Other(de::IgnoredAny)
    }
    let x: Option<OrElse<T>> = Deserialize::deserialize(d)?;
    Ok(match x {
        Some(OrElse::Val(v)) => Some(v),
        _ => None
    })
}

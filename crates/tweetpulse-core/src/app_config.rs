use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::CoreError;

/// Search area: a center point and a radius such as `30mi` or `50km`.
#[derive(Debug, Clone, PartialEq)]
pub struct Geocode {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: String,
}

impl FromStr for Geocode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CoreError::InvalidGeocode {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [lat, lon, radius] = parts.as_slice() else {
            return Err(invalid("expected \"lat,lon,radius\""));
        };

        let latitude: f64 = lat.parse().map_err(|_| invalid("latitude is not a number"))?;
        let longitude: f64 = lon
            .parse()
            .map_err(|_| invalid("longitude is not a number"))?;
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid("latitude out of range"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid("longitude out of range"));
        }

        let unit_start = radius
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(|| invalid("radius needs a unit (mi or km)"))?;
        let (amount, unit) = radius.split_at(unit_start);
        if !matches!(unit, "mi" | "km") {
            return Err(invalid("radius unit must be mi or km"));
        }
        match amount.parse::<f64>() {
            Ok(v) if v > 0.0 => {}
            _ => return Err(invalid("radius must be a positive number")),
        }

        Ok(Self {
            latitude,
            longitude,
            radius: (*radius).to_string(),
        })
    }
}

impl fmt::Display for Geocode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.latitude, self.longitude, self.radius)
    }
}

/// Twitter API credentials.
///
/// Search runs with application-only auth: either `bearer_token` is used
/// directly or the consumer pair is exchanged for one. The user access pair
/// is carried for completeness but not needed by the search endpoint.
#[derive(Clone, Default)]
pub struct TwitterCredentials {
    pub consumer_key: Option<String>,
    pub consumer_secret: Option<String>,
    pub access_token: Option<String>,
    pub access_token_secret: Option<String>,
    pub bearer_token: Option<String>,
}

impl fmt::Debug for TwitterCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[redacted]");
        f.debug_struct("TwitterCredentials")
            .field("consumer_key", &redact(&self.consumer_key))
            .field("consumer_secret", &redact(&self.consumer_secret))
            .field("access_token", &redact(&self.access_token))
            .field("access_token_secret", &redact(&self.access_token_secret))
            .field("bearer_token", &redact(&self.bearer_token))
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: TwitterCredentials,
    pub api_base_url: String,
    pub query: String,
    pub geocode: Geocode,
    pub lang: String,
    pub page_size: u32,
    pub max_records: usize,
    pub csv_path: PathBuf,
    pub chart_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_london_geocode() {
        let geo: Geocode = "51.5073219,-0.1276474,30mi".parse().unwrap();
        assert!((geo.latitude - 51.507_321_9).abs() < 1e-9);
        assert!((geo.longitude + 0.127_647_4).abs() < 1e-9);
        assert_eq!(geo.radius, "30mi");
        assert_eq!(geo.to_string(), "51.5073219,-0.1276474,30mi");
    }

    #[test]
    fn accepts_km_radius_with_spaces() {
        let geo: Geocode = "40.7, -74.0, 12.5km".parse().unwrap();
        assert_eq!(geo.radius, "12.5km");
    }

    #[test]
    fn rejects_missing_radius() {
        let err = "51.5,-0.12".parse::<Geocode>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidGeocode { .. }));
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        assert!("91.0,0.0,1mi".parse::<Geocode>().is_err());
    }

    #[test]
    fn rejects_unknown_radius_unit() {
        assert!("51.5,-0.12,30ft".parse::<Geocode>().is_err());
        assert!("51.5,-0.12,30".parse::<Geocode>().is_err());
        assert!("51.5,-0.12,0mi".parse::<Geocode>().is_err());
    }

    #[test]
    fn credentials_debug_redacts_secrets() {
        let creds = TwitterCredentials {
            consumer_key: Some("ck-live".to_string()),
            consumer_secret: Some("cs-live".to_string()),
            ..TwitterCredentials::default()
        };
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("ck-live"));
        assert!(!rendered.contains("cs-live"));
        assert!(rendered.contains("[redacted]"));
        assert!(rendered.contains("bearer_token: None"));
    }
}

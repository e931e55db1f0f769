use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::time::Duration;

use super::{
    AircraftObservation, Bounds, FlightDataGateway, FlightDetails, FlightSummary, GatewayError,
    NOT_AVAILABLE, UNKNOWN,
};

const FEED_PARAMS: &[(&str, &str)] = &[
    ("faa", "1"),
    ("satellite", "1"),
    ("mlat", "1"),
    ("flarm", "1"),
    ("adsb", "1"),
    ("gnd", "1"),
    ("air", "1"),
    ("vehicles", "1"),
    ("estimated", "1"),
    ("maxage", "14400"),
    ("gliders", "1"),
    ("stats", "1"),
    ("limit", "5000"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    #[serde(default = "default_details_url")]
    pub details_url: String,
    #[serde(default = "default_timeout", deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            details_url: default_details_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_feed_url() -> String {
    "https://data-cloud.flightradar24.com/zones/fcgi/feed.js".to_string()
}

fn default_details_url() -> String {
    "https://data-live.flightradar24.com/clickhandler/".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36"
        .to_string()
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom)
}

/// Client for the public Flightradar24 data feeds.
pub struct Flightradar24Client {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl Flightradar24Client {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, GatewayError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl FlightDataGateway for Flightradar24Client {
    async fn list_flights(&self, bounds: &Bounds) -> Result<Vec<FlightSummary>, GatewayError> {
        let bounds = bounds.to_string();
        let mut query = vec![("bounds", bounds.as_str())];
        query.extend_from_slice(FEED_PARAMS);

        let feed = self.get_json(&self.config.feed_url, &query).await?;
        parse_feed(&feed)
    }

    async fn flight_details(
        &self,
        flight: &FlightSummary,
    ) -> Result<AircraftObservation, GatewayError> {
        let body = self
            .get_json(&self.config.details_url, &[("flight", flight.id.as_str())])
            .await?;
        let details = parse_details(body)?;
        if let Some(age) = flight.seconds_since_contact(Utc::now()) {
            log::debug!("Resolved {}, last contact {}s ago", flight.label(), age);
        }
        Ok(AircraftObservation::from_parts(flight, details))
    }
}

/// Maps the area feed into flight summaries.
///
/// Flight entries are keyed by a numeric id and hold positional arrays;
/// bookkeeping keys such as `full_count` or `stats` are skipped.
pub fn parse_feed(feed: &Value) -> Result<Vec<FlightSummary>, GatewayError> {
    let entries = feed
        .as_object()
        .ok_or_else(|| GatewayError::Decode("feed is not a JSON object".into()))?;

    let flights = entries
        .iter()
        .filter(|(id, _)| id.starts_with(|c: char| c.is_ascii_digit()))
        .filter_map(|(id, info)| info.as_array().map(|row| summary_from_row(id, row)))
        .collect();

    Ok(flights)
}

fn summary_from_row(id: &str, row: &[Value]) -> FlightSummary {
    FlightSummary {
        id: id.to_string(),
        latitude_deg: number_at(row, 1),
        longitude_deg: number_at(row, 2),
        heading_deg: number_at(row, 3),
        altitude_ft: number_at(row, 4),
        ground_speed_kt: number_at(row, 5),
        aircraft_code: text_at(row, 8),
        registration: text_at(row, 9),
        last_contact: row
            .get(10)
            .and_then(Value::as_i64)
            .and_then(|secs| DateTime::from_timestamp(secs, 0)),
        origin_iata: text_at(row, 11),
        destination_iata: text_at(row, 12),
        number: text_at(row, 13),
        callsign: text_at(row, 16),
    }
}

fn text_at(row: &[Value], index: usize) -> String {
    match row.get(index) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn number_at(row: &[Value], index: usize) -> f64 {
    match row.get(index) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    aircraft: Option<AircraftInfo>,
    airline: Option<Named>,
    airport: Option<Airports>,
}

#[derive(Debug, Deserialize)]
struct AircraftInfo {
    model: Option<AircraftModel>,
}

#[derive(Debug, Deserialize)]
struct AircraftModel {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Airports {
    origin: Option<Named>,
    destination: Option<Named>,
}

/// Maps a detail response, substituting `Unknown` for anything absent.
pub fn parse_details(body: Value) -> Result<FlightDetails, GatewayError> {
    if !body.is_object() {
        return Err(GatewayError::Decode("flight details are not a JSON object".into()));
    }
    let response: DetailsResponse = serde_json::from_value(body)?;

    let airports = response.airport;
    let (origin, destination) = match airports {
        Some(a) => (
            a.origin.and_then(|o| o.name),
            a.destination.and_then(|d| d.name),
        ),
        None => (None, None),
    };

    Ok(FlightDetails {
        aircraft_type: or_unknown(response.aircraft.and_then(|a| a.model).and_then(|m| m.text)),
        airline: or_unknown(response.airline.and_then(|a| a.name)),
        origin: or_unknown(origin),
        destination: or_unknown(destination),
    })
}

fn or_unknown(value: Option<String>) -> String {
    value
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

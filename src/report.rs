use crate::gateway::AircraftObservation;
use crate::ranking::{RankedObservation, Resolution};

pub const INSTRUCTIONS: &str = "Here is information about the aircraft near to me. Based on the following question, tell me the airline, type (for example, truncate to 777-300 ER from 777-336(ER)), departing and arriving CITIES of the SINGLE aircraft which most matches. Tell me the airport's country only if it is NOT in Western Europe or North America. You don't need to give a justification for your answer. Don't include redundant information. Here is the prompt:\n";

pub const NO_AIRCRAFT_NEARBY: &str = "No aircraft found within 10km of your location.";

pub fn listing_line(entry: &RankedObservation) -> String {
    match &entry.resolution {
        Resolution::Resolved(obs) => format!(
            "Aircraft: {} | Airline: {} | From: {} | To: {} | Altitude: {}ft | Heading: {}° | Distance: {:.2}km | Heading to Aircraft From My Location: {:.0}°",
            obs.aircraft_type,
            obs.airline,
            obs.origin,
            obs.destination,
            obs.altitude_ft(),
            obs.heading_deg,
            entry.distance_m / 1000.0,
            entry.bearing_deg
        ),
        Resolution::Unresolved(message) => message.clone(),
    }
}

/// One line per aircraft, closest first, followed by the instruction block.
///
/// The block always starts on its own line rather than being appended to the
/// last aircraft line.
pub fn listing(ranked: &[RankedObservation]) -> String {
    let lines: Vec<String> = ranked.iter().map(listing_line).collect();
    if lines.is_empty() {
        INSTRUCTIONS.to_string()
    } else {
        format!("{}\n{}", lines.join("\n"), INSTRUCTIONS)
    }
}

pub fn closest_sentence(obs: &AircraftObservation) -> String {
    format!(
        "{} {} departing from {} to {}.",
        obs.airline, obs.aircraft_type, obs.origin, obs.destination
    )
}

/// Summary of the nearest resolved aircraft; failed lookups are ignored.
pub fn closest(ranked: &[RankedObservation]) -> String {
    ranked
        .iter()
        .filter_map(RankedObservation::observation)
        .next()
        .map(closest_sentence)
        .unwrap_or_else(|| NO_AIRCRAFT_NEARBY.to_string())
}

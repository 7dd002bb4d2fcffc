//! Create/edit form for parking spots.
//!
//! Fills a `SpotDraft` field by field. Enter keeps the shown default,
//! "cancel" aborts the whole form; aborting never touches committed state.

use std::io;

use vaahan_core::domain::{Address, ParkingSpot, SpotDraft, SpotStatus};
use vaahan_shared::AMENITY_OPTIONS;

use crate::console::prompt;

/// Collect a draft, pre-filled from `initial` when editing.
/// `None` means the user cancelled (or input ended).
pub fn collect(initial: Option<&ParkingSpot>) -> io::Result<Option<SpotDraft>> {
    let defaults = match initial {
        Some(spot) => {
            println!("Editing '{}' (Enter keeps the current value, 'cancel' aborts)", spot.name);
            SpotDraft::from(spot.clone())
        }
        None => {
            println!("New parking spot (Enter accepts the default, 'cancel' aborts)");
            blank_draft()
        }
    };

    let Some(name) = required_field("Spot name", &defaults.name)? else {
        return Ok(None);
    };
    let Some(status) = status_field(defaults.status)? else {
        return Ok(None);
    };
    let Some(rate) = number_field("Hourly rate", defaults.rate)? else {
        return Ok(None);
    };
    let Some(images) = images_field(&defaults.images)? else {
        return Ok(None);
    };
    let Some(amenities) = amenities_field(defaults.amenities)? else {
        return Ok(None);
    };
    let Some(street) = field("Street", &defaults.address.street)? else {
        return Ok(None);
    };
    let Some(city) = field("City", &defaults.address.city)? else {
        return Ok(None);
    };
    let Some(state) = field("State", &defaults.address.state)? else {
        return Ok(None);
    };
    let Some(pincode) = field("Pincode", &defaults.address.pincode)? else {
        return Ok(None);
    };
    let Some(latitude) = number_field("Latitude", defaults.address.latitude)? else {
        return Ok(None);
    };
    let Some(longitude) = number_field("Longitude", defaults.address.longitude)? else {
        return Ok(None);
    };

    Ok(Some(SpotDraft {
        name,
        status,
        rate,
        images,
        amenities,
        address: Address {
            street,
            city,
            state,
            pincode,
            latitude,
            longitude,
        },
    }))
}

/// Form defaults for a new spot.
fn blank_draft() -> SpotDraft {
    SpotDraft {
        name: String::new(),
        status: SpotStatus::Available,
        rate: 2000.0,
        images: Vec::new(),
        amenities: Vec::new(),
        address: Address {
            street: String::new(),
            city: String::new(),
            state: String::new(),
            pincode: String::new(),
            latitude: 0.0,
            longitude: 0.0,
        },
    }
}

/// Prompt for one field; empty input keeps the default, "cancel" aborts.
fn field(label: &str, default: &str) -> io::Result<Option<String>> {
    let Some(input) = prompt(&format!("{label} [{default}]: "))? else {
        return Ok(None);
    };
    if input.eq_ignore_ascii_case("cancel") {
        return Ok(None);
    }
    Ok(Some(if input.is_empty() {
        default.to_string()
    } else {
        input
    }))
}

/// Like `field`, but re-prompts until the value is non-empty.
fn required_field(label: &str, default: &str) -> io::Result<Option<String>> {
    loop {
        match field(label, default)? {
            Some(value) if value.is_empty() => println!("  Required."),
            other => return Ok(other),
        }
    }
}

fn status_field(default: SpotStatus) -> io::Result<Option<SpotStatus>> {
    loop {
        let label = "Status (available/occupied/maintenance)";
        let Some(input) = field(label, default.as_str())? else {
            return Ok(None);
        };
        match parse_status(&input) {
            Some(status) => return Ok(Some(status)),
            None => println!("  Expected one of: available, occupied, maintenance."),
        }
    }
}

fn number_field(label: &str, default: f64) -> io::Result<Option<f64>> {
    loop {
        let Some(input) = field(label, &default.to_string())? else {
            return Ok(None);
        };
        match input.parse::<f64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("  Expected a number."),
        }
    }
}

fn images_field(current: &[String]) -> io::Result<Option<Vec<String>>> {
    let default = current.join(",");
    let Some(input) = field("Image references (comma separated)", &default)? else {
        return Ok(None);
    };
    Ok(Some(split_list(&input)))
}

/// Numbered checklist over the fixed amenity vocabulary.
fn amenities_field(mut selected: Vec<String>) -> io::Result<Option<Vec<String>>> {
    loop {
        println!("Amenities (toggle by number, Enter to accept):");
        for (i, option) in AMENITY_OPTIONS.iter().enumerate() {
            let mark = if selected.iter().any(|a| a == option) {
                "x"
            } else {
                " "
            };
            println!("  [{mark}] {}. {option}", i + 1);
        }

        let Some(input) = prompt("Toggle: ")? else {
            return Ok(None);
        };
        if input.is_empty() {
            return Ok(Some(selected));
        }
        if input.eq_ignore_ascii_case("cancel") {
            return Ok(None);
        }
        match input.parse::<usize>() {
            Ok(n) if (1..=AMENITY_OPTIONS.len()).contains(&n) => {
                toggle(&mut selected, AMENITY_OPTIONS[n - 1]);
            }
            _ => println!("  Expected a number between 1 and {}.", AMENITY_OPTIONS.len()),
        }
    }
}

fn parse_status(input: &str) -> Option<SpotStatus> {
    match input.to_ascii_lowercase().as_str() {
        "available" => Some(SpotStatus::Available),
        "occupied" => Some(SpotStatus::Occupied),
        "maintenance" => Some(SpotStatus::Maintenance),
        _ => None,
    }
}

/// Toggle semantics: remove when present, append otherwise.
fn toggle(selected: &mut Vec<String>, amenity: &str) {
    if selected.iter().any(|a| a == amenity) {
        selected.retain(|a| a != amenity);
    } else {
        selected.push(amenity.to_string());
    }
}

fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_draft_matches_form_defaults() {
        let draft = blank_draft();
        assert_eq!(draft.status, SpotStatus::Available);
        assert_eq!(draft.rate, 2000.0);
        assert!(draft.images.is_empty());
        assert!(draft.amenities.is_empty());
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("available"), Some(SpotStatus::Available));
        assert_eq!(parse_status("OCCUPIED"), Some(SpotStatus::Occupied));
        assert_eq!(parse_status("maintenance"), Some(SpotStatus::Maintenance));
        assert_eq!(parse_status("closed"), None);
    }

    #[test]
    fn test_toggle_appends_then_removes() {
        let mut selected = vec!["CC Camera".to_string()];

        toggle(&mut selected, "EV Charging");
        assert_eq!(selected, vec!["CC Camera", "EV Charging"]);

        toggle(&mut selected, "CC Camera");
        assert_eq!(selected, vec!["EV Charging"]);
    }

    #[test]
    fn test_split_list_trims_and_drops_empties() {
        assert_eq!(
            split_list("blob:a, blob:b ,,  "),
            vec!["blob:a".to_string(), "blob:b".to_string()]
        );
        assert!(split_list("").is_empty());
    }
}

//! Dashboard screen - the spot listing and its command loop.

use vaahan_core::domain::ParkingSpot;

use crate::config::AppConfig;
use crate::console::{confirm, form, prompt};
use crate::state::AppState;

/// Why the dashboard loop ended.
pub enum Outcome {
    LoggedOut,
    Quit,
}

/// A parsed dashboard command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List,
    Add,
    Edit(String),
    Delete(String),
    Logout,
    Quit,
    Help,
    Unknown(String),
}

impl Command {
    fn parse(input: &str) -> Self {
        let mut parts = input.split_whitespace();
        let head = parts.next().unwrap_or("").to_ascii_lowercase();
        let arg = parts.next().map(str::to_string);

        match (head.as_str(), arg) {
            ("list", _) => Self::List,
            ("add", _) => Self::Add,
            ("edit", Some(id)) => Self::Edit(id),
            ("delete", Some(id)) => Self::Delete(id),
            ("logout", _) => Self::Logout,
            ("quit", _) | ("exit", _) | ("q", _) => Self::Quit,
            ("help", _) | ("h", _) => Self::Help,
            _ => Self::Unknown(input.to_string()),
        }
    }
}

/// Run the dashboard until the user logs out or quits.
pub async fn run(state: &AppState, config: &AppConfig) -> anyhow::Result<Outcome> {
    println!("== Parking Spot Management ==");
    render_spots(&state.spots.spots().await, &config.currency);
    print_help();

    loop {
        let Some(line) = prompt("> ")? else {
            return Ok(Outcome::Quit);
        };
        if line.is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Command::List => render_spots(&state.spots.spots().await, &config.currency),
            Command::Add => match form::collect(None)? {
                Some(draft) => {
                    let spot = state.spots.create(draft).await?;
                    println!("Created spot {}.", spot.id);
                    render_spots(&state.spots.spots().await, &config.currency);
                }
                None => println!("Cancelled."),
            },
            Command::Edit(id) => match state.spots.get(&id).await {
                Some(current) => match form::collect(Some(&current))? {
                    Some(draft) => {
                        state.spots.update(&id, draft).await?;
                        render_spots(&state.spots.spots().await, &config.currency);
                    }
                    None => println!("Cancelled."),
                },
                None => println!("No spot with id {id}."),
            },
            Command::Delete(id) => {
                if confirm("Are you sure you want to delete this parking spot?")? {
                    state.spots.delete(&id).await?;
                    render_spots(&state.spots.spots().await, &config.currency);
                }
            }
            Command::Logout => {
                state.auth.logout().await?;
                println!("Signed out.\n");
                return Ok(Outcome::LoggedOut);
            }
            Command::Quit => return Ok(Outcome::Quit),
            Command::Help => print_help(),
            Command::Unknown(line) => {
                println!("Unrecognized command: {line}. Type 'help' for commands.")
            }
        }
    }
}

fn print_help() {
    println!("Commands: list | add | edit <id> | delete <id> | logout | quit");
}

fn render_spots(spots: &[ParkingSpot], currency: &str) {
    if spots.is_empty() {
        println!("No parking spots yet. Type 'add' to create one.");
        return;
    }

    println!(
        "{:<15} {:<24} {:<12} {:>12}  {:<9} {}",
        "Id", "Name", "Status", "Rate", "Amenities", "City"
    );
    for spot in spots {
        println!(
            "{:<15} {:<24} {:<12} {:>12}  {:<9} {}",
            spot.id,
            spot.name,
            spot.status.as_str(),
            format!("{}{}/hr", currency, spot.rate),
            spot.amenities.len(),
            spot.address.city
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("list"), Command::List);
        assert_eq!(Command::parse("ADD"), Command::Add);
        assert_eq!(Command::parse("logout"), Command::Logout);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("help"), Command::Help);
    }

    #[test]
    fn test_parse_commands_with_ids() {
        assert_eq!(Command::parse("edit 1"), Command::Edit("1".to_string()));
        assert_eq!(
            Command::parse("delete 1734000000000"),
            Command::Delete("1734000000000".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_missing_id() {
        assert_eq!(Command::parse("edit"), Command::Unknown("edit".to_string()));
        assert_eq!(
            Command::parse("delete"),
            Command::Unknown("delete".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_keeps_input() {
        assert_eq!(
            Command::parse("frobnicate 7"),
            Command::Unknown("frobnicate 7".to_string())
        );
    }
}

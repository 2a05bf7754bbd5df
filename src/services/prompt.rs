// src/services/prompt.rs
use crate::message::{HistoryEntry, HistoryRole, Location};

use super::knowledge::{self, ASSISTANT_NAME};

/// Compose the single prompt string sent to the generator.
pub fn build_prompt(message: &str, location: Option<&Location>, history: &[HistoryEntry]) -> String {
    let mut prompt = knowledge::preamble();

    if let Some(loc) = location {
        prompt.push_str(&format!(
            "\n\nUser's current location: Latitude {}, Longitude {}",
            loc.latitude, loc.longitude
        ));
        prompt.push_str("\nPlease provide location-specific advice for Bangladesh.");
    }

    if !history.is_empty() {
        prompt.push_str("\n\nConversation history:\n");
        for entry in history {
            let speaker = match entry.role {
                HistoryRole::User => "User",
                HistoryRole::Assistant => ASSISTANT_NAME,
            };
            prompt.push_str(&format!("{}: {}\n", speaker, entry.content));
        }
    }

    prompt.push_str(&format!("\n\nUser's current message: {}", message));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_message_follows_preamble() {
        let prompt = build_prompt("Is it safe?", None, &[]);
        assert!(prompt.starts_with(&knowledge::preamble()));
        assert!(prompt.ends_with("\n\nUser's current message: Is it safe?"));
        assert!(!prompt.contains("User's current location"));
        assert!(!prompt.contains("Conversation history"));
    }

    #[test]
    fn location_and_history_are_in_order() {
        let loc = Location { latitude: 22.5, longitude: 91.8 };
        let history = vec![
            HistoryEntry::user("Cyclone coming?"),
            HistoryEntry::assistant("Signal 7 is up."),
        ];
        let prompt = build_prompt("Where do I go?", Some(&loc), &history);

        let loc_at = prompt.find("User's current location: Latitude 22.5, Longitude 91.8").unwrap();
        let hist_at = prompt
            .find("Conversation history:\nUser: Cyclone coming?\nDPAI: Signal 7 is up.\n")
            .unwrap();
        let msg_at = prompt.find("User's current message: Where do I go?").unwrap();
        assert!(loc_at < hist_at && hist_at < msg_at);
        assert!(prompt.contains("Please provide location-specific advice for Bangladesh."));
    }
}

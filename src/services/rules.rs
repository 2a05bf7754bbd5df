// src/services/rules.rs
//! Ordered keyword rules. Each table is scanned top to bottom and the first rule
//! with a keyword contained in the lowercased message wins.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Emergency,
    Flood,
    Cyclone,
    Earthquake,
    Evacuation,
    General,
}

pub struct Rule {
    pub keywords: &'static [&'static str],
    pub topic: Topic,
}

pub const SUGGESTION_RULES: &[Rule] = &[
    Rule { keywords: &["flood"], topic: Topic::Flood },
    Rule { keywords: &["cyclone"], topic: Topic::Cyclone },
    Rule { keywords: &["earthquake"], topic: Topic::Earthquake },
    Rule { keywords: &["route", "evacuation"], topic: Topic::Evacuation },
];

pub const FALLBACK_RULES: &[Rule] = &[
    Rule { keywords: &["emergency", "help"], topic: Topic::Emergency },
    Rule { keywords: &["flood"], topic: Topic::Flood },
    Rule { keywords: &["cyclone"], topic: Topic::Cyclone },
];

pub const MAX_SUGGESTIONS: usize = 3;

/// Suggestions attached to every offline reply.
pub const FALLBACK_SUGGESTIONS: [&str; 3] = [
    "What should I do in case of flooding?",
    "Show me evacuation routes",
    "Emergency contact numbers",
];

pub fn classify(rules: &[Rule], message: &str) -> Topic {
    let lower = message.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
        .map(|rule| rule.topic)
        .unwrap_or(Topic::General)
}

/// Follow-up suggestions for a successful model reply, at most [`MAX_SUGGESTIONS`].
pub fn suggestions_for(message: &str) -> Vec<String> {
    let picks: &[&str] = match classify(SUGGESTION_RULES, message) {
        Topic::Flood => &[
            "What are the flood-prone areas in Bangladesh?",
            "How to prepare for monsoon floods?",
        ],
        Topic::Cyclone => &[
            "Where are the nearest cyclone shelters?",
            "Cyclone preparedness checklist",
        ],
        Topic::Earthquake => &[
            "Earthquake safety during and after shaking",
            "Building safety assessment after earthquake",
        ],
        Topic::Evacuation => &[
            "Alternative evacuation routes",
            "Transportation during emergencies",
        ],
        Topic::Emergency | Topic::General => &[
            "Current weather alerts for my area",
            "Emergency kit checklist",
            "How to stay updated during disasters",
        ],
    };
    picks.iter().take(MAX_SUGGESTIONS).map(|s| s.to_string()).collect()
}

pub fn fallback_suggestions() -> Vec<String> {
    FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

/// Canned reply used while the generation service is unreachable.
pub fn fallback_reply(message: &str) -> &'static str {
    match classify(FALLBACK_RULES, message) {
        Topic::Emergency => EMERGENCY_REPLY,
        Topic::Flood => FLOOD_REPLY,
        Topic::Cyclone => CYCLONE_REPLY,
        _ => GENERAL_REPLY,
    }
}

const EMERGENCY_REPLY: &str = "I'm currently experiencing connectivity issues, but here's immediate help:

🚨 EMERGENCY CONTACTS:
• National Emergency: 999
• Fire Service: 9555555
• Police: 100
• Ambulance: 199

If you're in immediate danger:
1. Move to a safe location
2. Call emergency services
3. Follow local authority instructions
4. Stay calm and help others if possible

I'll be back online shortly to provide more detailed assistance.";

const FLOOD_REPLY: &str = "Flood Safety (Offline Mode):

🌊 IMMEDIATE ACTIONS:
• Move to higher ground immediately
• Avoid walking/driving through flood water
• Turn off electricity if water is near outlets
• Listen to radio for updates

📍 SAFE AREAS:
• Multi-story buildings (2nd floor or higher)
• Schools and community centers on high ground
• Designated flood shelters

⚠️ AVOID:
• Electrical equipment when wet
• Contaminated flood water
• Driving through flooded roads

Contact 999 for emergency rescue services.";

const CYCLONE_REPLY: &str = "Cyclone Safety (Offline Mode):

🌪️ IMMEDIATE ACTIONS:
• Go to nearest cyclone shelter
• Secure loose objects outside
• Stock emergency supplies
• Charge all devices

📍 CYCLONE SHELTERS:
• Schools and community centers
• Multi-purpose cyclone shelters
• Concrete buildings away from coast

⚠️ STAY AWAY FROM:
• Coastal areas
• Weak structures
• Open areas during storm

Follow local evacuation orders immediately!";

const GENERAL_REPLY: &str = "I'm currently offline, but here are general disaster safety tips:

🛡️ GENERAL SAFETY:
• Stay informed through radio/TV
• Keep emergency kit ready
• Know your evacuation routes
• Have emergency contacts handy

📞 EMERGENCY NUMBERS:
• National Emergency: 999
• Fire Service: 9555555
• Police: 100

I'll provide more specific guidance once I'm back online. Stay safe!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(classify(SUGGESTION_RULES, "FLOODING near Sylhet"), Topic::Flood);
        assert_eq!(classify(SUGGESTION_RULES, "Cyclone Amphan"), Topic::Cyclone);
    }

    #[test]
    fn unmatched_message_is_general() {
        assert_eq!(classify(SUGGESTION_RULES, "what is the weather"), Topic::General);
        assert_eq!(classify(FALLBACK_RULES, "what is the weather"), Topic::General);
    }

    #[test]
    fn fallback_rules_rank_help_first() {
        assert_eq!(classify(FALLBACK_RULES, "help, flood!"), Topic::Emergency);
        assert_eq!(fallback_reply("help, flood!"), EMERGENCY_REPLY);
    }

    #[test]
    fn every_suggestion_list_fits_the_cap() {
        for msg in ["flood", "cyclone", "earthquake", "route", "evacuation", "hello", "help"] {
            let picks = suggestions_for(msg);
            assert!(!picks.is_empty());
            assert!(picks.len() <= MAX_SUGGESTIONS, "{msg}: {picks:?}");
        }
    }
}

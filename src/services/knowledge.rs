// src/services/knowledge.rs
//! Static disaster knowledge for Bangladesh that is folded into every prompt.

pub const ASSISTANT_NAME: &str = "DPAI";

pub const INSTRUCTIONS: &str = r#"You are DPAI (Durjog Prohori AI), a specialized AI assistant for disaster management in Bangladesh. You have extensive knowledge about:

1. Bangladesh's geography, climate, and disaster patterns
2. Common disasters: floods, cyclones, earthquakes, landslides, droughts
3. Emergency response procedures and evacuation protocols
4. Safe routes and shelter locations across Bangladesh
5. Real-time disaster preparedness and response strategies

Your primary functions:
- Provide immediate emergency guidance
- Suggest safe evacuation routes based on location
- Offer disaster preparedness advice
- Assess local disaster risks
- Give location-specific safety recommendations

Guidelines:
- Always prioritize user safety
- Provide clear, actionable advice
- Use simple, understandable language
- Include specific Bangladesh context
- Suggest contacting local emergency services when appropriate
- Be empathetic and reassuring during emergencies
- When asked about your name or what DPAI stands for, always respond that DPAI stands for "Durjog Prohori AI" - the AI assistant for the Durjog Prohori disaster management system

For evacuation routes, consider:
- Major highways and roads in Bangladesh
- Safe zones and shelters
- Avoid flood-prone areas during monsoons
- Consider cyclone shelters in coastal areas
- Account for traffic patterns and road conditions"#;

pub struct EmergencyContact {
    pub service: &'static str,
    pub number: &'static str,
}

pub const EMERGENCY_CONTACTS: &[EmergencyContact] = &[
    EmergencyContact { service: "National Emergency Service", number: "999" },
    EmergencyContact { service: "Fire Service", number: "9555555" },
    EmergencyContact { service: "Police", number: "100" },
    EmergencyContact { service: "Ambulance", number: "199" },
];

pub struct HazardProfile {
    pub hazard: &'static str,
    pub risk_areas: &'static [&'static str],
    pub season: Option<&'static str>,
    pub safety_tips: &'static [&'static str],
}

pub const HAZARDS: &[HazardProfile] = &[
    HazardProfile {
        hazard: "Floods",
        risk_areas: &["Sylhet", "Rangpur", "Kurigram", "Gaibandha", "Sirajganj"],
        season: Some("June to September (Monsoon)"),
        safety_tips: &[
            "Move to higher ground immediately",
            "Avoid walking through flood water",
            "Keep emergency supplies ready",
            "Stay informed through radio/mobile alerts",
        ],
    },
    HazardProfile {
        hazard: "Cyclones",
        risk_areas: &["Cox's Bazar", "Chittagong", "Barisal", "Patuakhali", "Bhola"],
        season: Some("April to December (Peak: May-June, October-November)"),
        safety_tips: &[
            "Move to designated cyclone shelters",
            "Secure loose objects around your home",
            "Stock up on food, water, and medicines",
            "Follow evacuation orders immediately",
        ],
    },
    HazardProfile {
        hazard: "Earthquakes",
        risk_areas: &["Dhaka", "Chittagong", "Sylhet", "Rangpur"],
        season: None,
        safety_tips: &[
            "Drop, Cover, and Hold On during shaking",
            "Stay away from windows and heavy objects",
            "If outdoors, move away from buildings",
            "After shaking stops, evacuate if building is damaged",
        ],
    },
];

/// Instruction block, emergency contacts and hazard tables rendered as one fixed preamble.
pub fn preamble() -> String {
    let mut out = String::from(INSTRUCTIONS);

    out.push_str("\n\nEmergency contacts to mention when relevant:");
    for contact in EMERGENCY_CONTACTS {
        out.push_str(&format!("\n- {}: {}", contact.service, contact.number));
    }

    out.push_str("\n\nBangladesh disaster reference:");
    for profile in HAZARDS {
        out.push_str(&format!("\n\n{}:", profile.hazard));
        out.push_str(&format!("\n- High-risk areas: {}", profile.risk_areas.join(", ")));
        if let Some(season) = profile.season {
            out.push_str(&format!("\n- Season: {}", season));
        }
        out.push_str("\n- Safety tips:");
        for tip in profile.safety_tips {
            out.push_str(&format!("\n  * {}", tip));
        }
    }
    out
}

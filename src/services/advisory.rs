// src/services/advisory.rs
//! Static risk and evacuation advice. No external calls.

use crate::message::{Location, RiskAssessment, RiskLevel, Route};

/// Latitude separating the cyclone-exposed south from the hilly north.
pub const NORTH_SOUTH_DIVIDE: f64 = 24.0;

pub const RECOMMENDATIONS: [&str; 3] = [
    "Keep emergency kit updated",
    "Know your evacuation routes",
    "Stay informed about weather alerts",
];

pub const NEAREST_SHELTERS: [&str; 3] = [
    "Community Center - 2.5 km",
    "School Building - 3.1 km",
    "Government Office - 4.2 km",
];

pub fn assess_risk(location: &Location) -> RiskAssessment {
    RiskAssessment {
        flood: RiskLevel::Moderate,
        cyclone: if location.latitude < NORTH_SOUTH_DIVIDE {
            RiskLevel::High
        } else {
            RiskLevel::Low
        },
        earthquake: RiskLevel::Moderate,
        landslide: if location.latitude > NORTH_SOUTH_DIVIDE {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        },
    }
}

pub fn recommendations() -> Vec<String> {
    RECOMMENDATIONS.iter().map(|s| s.to_string()).collect()
}

/// The same two routes for every location and hazard.
pub fn evacuation_routes(_location: &Location, _disaster_type: Option<&str>) -> Vec<Route> {
    vec![
        Route {
            name: "Primary Route".to_string(),
            description: "Main highway to nearest safe zone".to_string(),
            estimated_time: "15-30 minutes".to_string(),
            safety_level: RiskLevel::High,
        },
        Route {
            name: "Alternative Route".to_string(),
            description: "Secondary road avoiding flood-prone areas".to_string(),
            estimated_time: "20-40 minutes".to_string(),
            safety_level: RiskLevel::Moderate,
        },
    ]
}

pub fn nearest_shelters(_location: &Location) -> Vec<String> {
    NEAREST_SHELTERS.iter().map(|s| s.to_string()).collect()
}

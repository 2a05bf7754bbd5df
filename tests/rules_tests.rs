use dpai_backend::services::rules::{
    FALLBACK_RULES, SUGGESTION_RULES, Topic, classify, fallback_reply, suggestions_for,
};

#[test]
fn suggestion_rules_are_in_priority_order() {
    let order: Vec<Topic> = SUGGESTION_RULES.iter().map(|r| r.topic).collect();
    assert_eq!(
        order,
        vec![Topic::Flood, Topic::Cyclone, Topic::Earthquake, Topic::Evacuation]
    );
}

#[test]
fn fallback_rules_are_in_priority_order() {
    let order: Vec<Topic> = FALLBACK_RULES.iter().map(|r| r.topic).collect();
    assert_eq!(order, vec![Topic::Emergency, Topic::Flood, Topic::Cyclone]);
}

#[test]
fn test_suggestion_precedence() {
    let cases = [
        ("cyclone and flood", Topic::Flood),
        ("earthquake after the cyclone", Topic::Cyclone),
        ("evacuation after the earthquake", Topic::Earthquake),
        ("best ROUTE out of town", Topic::Evacuation),
        ("Evacuation centres", Topic::Evacuation),
        ("is it going to rain", Topic::General),
    ];
    for (msg, topic) in cases {
        assert_eq!(classify(SUGGESTION_RULES, msg), topic, "{msg}");
    }
}

#[test]
fn test_default_suggestions() {
    assert_eq!(
        suggestions_for("hello there"),
        vec![
            "Current weather alerts for my area",
            "Emergency kit checklist",
            "How to stay updated during disasters",
        ]
    );
}

#[test]
fn test_route_suggestions() {
    assert_eq!(
        suggestions_for("Which evacuation path?"),
        vec!["Alternative evacuation routes", "Transportation during emergencies"]
    );
}

#[test]
fn test_fallback_selection() {
    assert!(fallback_reply("EMERGENCY").contains("🚨 EMERGENCY CONTACTS:"));
    assert!(fallback_reply("please help me").contains("Ambulance: 199"));
    assert!(fallback_reply("Flooded street").starts_with("Flood Safety (Offline Mode):"));
    assert!(fallback_reply("cyclone and earthquake").starts_with("Cyclone Safety (Offline Mode):"));
    assert!(fallback_reply("earthquake").starts_with("I'm currently offline"));
}

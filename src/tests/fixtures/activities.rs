use crate::modules::activities::core::activity::Activity;
use rstest::fixture;

/// The two-activity registry the HTTP and handler tests run against.
pub fn test_seed() -> Vec<(String, Activity)> {
    vec![
        ("Chess Club".to_string(), chess_club()),
        (
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                ["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
    ]
}

#[fixture]
pub fn chess_club() -> Activity {
    Activity::new(
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        ["michael@mergington.edu", "daniel@mergington.edu"],
    )
}

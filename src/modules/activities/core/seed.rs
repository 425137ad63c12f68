// Activities the registry starts with on every boot.

use crate::modules::activities::core::activity::Activity;

pub fn seed_activities() -> Vec<(String, Activity)> {
    vec![
        (
            "Chess Club".into(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                ["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".into(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                ["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".into(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                ["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team".into(),
            Activity::new(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                ["liam@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Basketball Team".into(),
            Activity::new(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                ["ava@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Art Club".into(),
            Activity::new(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                ["amelia@mergington.edu", "harper@mergington.edu"],
            ),
        ),
        (
            "Drama Club".into(),
            Activity::new(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                ["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
        ),
        (
            "Math Club".into(),
            Activity::new(
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                ["james@mergington.edu", "benjamin@mergington.edu"],
            ),
        ),
        (
            "Debate Team".into(),
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                ["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        ),
    ]
}

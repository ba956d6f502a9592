//! Maps a chat presence update onto typed records, prints it, and writes it back out.
//!
//! Run with `cargo run --example presence`.

use mason_core::{from_json, record, scalar_alias, to_json, to_yaml, DynamicValue, MasonError, Record};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivityType {
    #[default]
    Game,
    Streaming,
    Listening,
    Watching,
    Custom,
    Competing,
    Unknown(i32),
}

impl From<i32> for ActivityType {
    fn from(value: i32) -> Self {
        match value {
            0 => ActivityType::Game,
            1 => ActivityType::Streaming,
            2 => ActivityType::Listening,
            3 => ActivityType::Watching,
            4 => ActivityType::Custom,
            5 => ActivityType::Competing,
            other => ActivityType::Unknown(other),
        }
    }
}

impl From<ActivityType> for i32 {
    fn from(value: ActivityType) -> Self {
        match value {
            ActivityType::Game => 0,
            ActivityType::Streaming => 1,
            ActivityType::Listening => 2,
            ActivityType::Watching => 3,
            ActivityType::Custom => 4,
            ActivityType::Competing => 5,
            ActivityType::Unknown(other) => other,
        }
    }
}

scalar_alias!(ActivityType => i32);

record! {
    pub struct Button {
        field label: Option<String>,
        field url: Option<String>,
    }
}

record! {
    pub struct Activity {
        field name: Option<String>,
        field kind = "type": ActivityType,
        field created_at: i64,
        field url: Option<String>,
        objects buttons: Button,
    }
}

record! {
    pub struct Presence {
        field since: i64,
        field status: Option<String>,
        field afk: bool,
        objects activities: Activity,
        multi test,
    }
}

const PAYLOAD: &str = r#"{
    "since": 17000000123,
    "status": "online",
    "afk": false,
    "activities": [
        {
            "name": "Playing Mason",
            "type": 0,
            "created_at": 4320456,
            "url": null,
            "buttons": [
                { "label": "Join", "url": "https://example.com" },
                { "label": "Watch", "url": "https://example.com/live" }
            ]
        },
        {
            "name": "Streaming",
            "type": 1,
            "created_at": 4320999,
            "url": "https://example.com/stream"
        }
    ],
    "test": [1, 2.5, "a", [], {}, 9999999999]
}"#;

fn main() -> Result<(), MasonError> {
    let mut presence: Presence = from_json(PAYLOAD)?;
    presence.print();

    for activity in &presence.activities {
        println!("{:?}: {} button(s)", activity.kind, activity.buttons.len());
    }
    for value in &presence.test {
        if let DynamicValue::Int64(wide) = value {
            println!("kept 64-bit value {wide}");
        }
    }

    println!("{}", to_json(&presence)?);
    println!("{}", to_yaml(&presence)?);
    println!("{}", Presence::schema().to_json()?);

    presence.free_members();
    assert_eq!(presence, Presence::default());
    Ok(())
}

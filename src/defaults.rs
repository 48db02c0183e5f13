//! Compiled default content for the 24 calendar days. These are the
//! process-wide constants every resolution starts from; admin overrides
//! layer on top and never mutate anything here.

use crate::content::{Clip, DayContent, ImageSource, TodoItem};

struct DaySeed {
    description: &'static str,
    todos: &'static [&'static str],
}

static DAY_SEEDS: [DaySeed; 24] = [
    DaySeed {
        description: "Ignition. The calendar comes online and the first door is \
                      ready. Systems green across the board.",
        todos: &["Open the first door", "Say hi in chat"],
    },
    DaySeed {
        description: "Second day in orbit. A quiet one for charting the route \
                      ahead.",
        todos: &["Catch the evening stream", "Pick a favorite moment"],
    },
    DaySeed {
        description: "Telemetry is coming in clean. Today we look back at the \
                      best signals so far.",
        todos: &["Watch the highlight", "Vote in the poll"],
    },
    DaySeed {
        description: "A supply run. Small tasks, big payoff.",
        todos: &["Finish the daily mission", "Share the calendar with a friend"],
    },
    DaySeed {
        description: "Dark side of the moon today. Keep the receiver tuned.",
        todos: &["Listen for the hidden code word", "Log it before midnight"],
    },
    DaySeed {
        description: "Course correction day. A short burn, then back to \
                      cruising.",
        todos: &["Check the schedule update", "Stretch for five minutes"],
    },
    DaySeed {
        description: "One week out. The station crew sends its regards.",
        todos: &["Rewatch the week-one recap", "Drop a comment"],
    },
    DaySeed {
        description: "Meteor shower expected. Best viewed with snacks.",
        todos: &["Prepare snacks", "Watch together at eight"],
    },
    DaySeed {
        description: "Maintenance window. The robots are doing their part; do \
                      yours.",
        todos: &["Tidy one corner of your desk", "Report completion in chat"],
    },
    DaySeed {
        description: "Red alert drill. Not an actual emergency — probably.",
        todos: &["Join the drill", "Keep calm"],
    },
    DaySeed {
        description: "Half a month of signals logged. Archive day.",
        todos: &["Browse the clip archive", "Nominate a clip of the week"],
    },
    DaySeed {
        description: "Deep space quiz night. No calculators allowed.",
        todos: &["Play the quiz", "Defend your score"],
    },
    DaySeed {
        description: "Lucky thirteen. The airlock sticks a little; give it a \
                      push.",
        todos: &["Open the door anyway", "Tell someone it went fine"],
    },
    DaySeed {
        description: "Cargo manifest day. Something unexpected in bay four.",
        todos: &["Guess what's in the crate", "Check back tomorrow"],
    },
    DaySeed {
        description: "Crew story hour. Bring a blanket.",
        todos: &["Listen to the story", "Share one of your own"],
    },
    DaySeed {
        description: "Solar wind is up. Good day for sailing.",
        todos: &["Catch the afternoon stream", "Try the co-op mission"],
    },
    DaySeed {
        description: "Navigation check. We are exactly where we should be.",
        todos: &["Mark your favorite day so far", "Finish any missed missions"],
    },
    DaySeed {
        description: "Signal boost day. The relay needs every hand.",
        todos: &["Boost the signal", "Welcome a newcomer"],
    },
    DaySeed {
        description: "Six doors left. The station is getting festive.",
        todos: &["Decorate something", "Post a photo"],
    },
    DaySeed {
        description: "Purple nebula on the viewscreen all day. No one is \
                      getting any work done.",
        todos: &["Stare at the nebula", "Accept that this is fine"],
    },
    DaySeed {
        description: "Final systems review. Checklists all the way down.",
        todos: &["Run your personal checklist", "Check the community one"],
    },
    DaySeed {
        description: "Packages are being wrapped in zero gravity. It is going \
                      about as well as you'd expect.",
        todos: &["Wrap one gift", "Watch the wrapping disaster clip"],
    },
    DaySeed {
        description: "The eve of the eve. Engines warm, lights low.",
        todos: &["Join the countdown warm-up", "Get some rest"],
    },
    DaySeed {
        description: "Landing day. Twenty-four doors, one crew. Thanks for \
                      flying with us.",
        todos: &["Open the last door", "Celebrate"],
    },
];

/// Default content for any day number. Days 1..=24 get the compiled seed;
/// anything else resolves to a generic record so out-of-range lookups
/// degrade instead of failing.
#[must_use]
pub fn day_content(day: u8) -> DayContent {
    let seed = usize::from(day)
        .checked_sub(1)
        .and_then(|i| DAY_SEEDS.get(i));

    let (description, todo_texts): (&str, &[&str]) = match seed {
        Some(seed) => (seed.description, seed.todos),
        None => ("Unscheduled day.", &["Check the calendar"]),
    };

    let todos = todo_texts
        .iter()
        .enumerate()
        .map(|(i, text)| TodoItem {
            id: i as u32 + 1,
            text: (*text).to_string(),
            done: false,
        })
        .collect();

    let mut content = DayContent {
        description: description.to_string(),
        image: ImageSource::DefaultArt,
        todos,
        ..DayContent::default()
    };

    // Per-day extras. Days 10 and 20 deliberately carry no color so the
    // legacy per-day fallback still decides their theme.
    match day {
        1 => {
            content.color = Some("amber".to_string());
            content.stream_link = Some("https://twitch.tv/adventide".to_string());
        }
        5 => content.color = Some("cyan".to_string()),
        8 => {
            content.clip_link = Some("https://clips.example.com/meteor-night".to_string());
        }
        11 => {
            content.clips = vec![
                Clip {
                    id: "archive-1".to_string(),
                    url: "https://clips.example.com/archive-1".to_string(),
                    label: "Docking gone wrong".to_string(),
                },
                Clip {
                    id: "archive-2".to_string(),
                    url: "https://clips.example.com/archive-2".to_string(),
                    label: "The code word incident".to_string(),
                },
            ];
            // Stale legacy link kept on purpose; the clips list supersedes it.
            content.clip_link = Some("#".to_string());
        }
        13 => content.color = Some("green".to_string()),
        22 => content.clip_link = Some("#".to_string()),
        24 => {
            content.title = Some("Landing Day".to_string());
            content.color = Some("#fcd34d".to_string());
            content.stream_link = Some("https://twitch.tv/adventide".to_string());
        }
        _ => {}
    }

    content
}

//! Sample bakery calendar used by `bakecal seed`

use chrono::{Datelike, Duration, NaiveDate};

use super::calendar::format_iso;
use crate::types::{Event, EventType};

/// (day offset from today, time, type, title, description)
const RELATIVE_EVENTS: &[(i64, &str, EventType, &str, Option<&str>)] = &[
    (-3, "07:30", EventType::Order, "Sourdough standing order - Green Cafe", None),
    (0, "06:00", EventType::Reminder, "Check flour delivery", Some("Supplier: Millstone Farms")),
    (0, "10:00", EventType::Order, "Birthday cake pickup - Alvarez", Some("Chocolate, 2 tiers")),
    (1, "09:00", EventType::Order, "Croissant order - Riverside Hotel", Some("120 butter croissants")),
    (2, "14:00", EventType::Training, "Laminated dough workshop", Some("New bakers, kitchen B")),
    (4, "11:30", EventType::Catering, "Office lunch catering - Harbor Tech", Some("Sandwich platters for 40")),
    (4, "08:00", EventType::Order, "Bagel order - Northside Community", None),
    (7, "16:00", EventType::Reminder, "Oven maintenance visit", None),
    (9, "12:00", EventType::Catering, "Wedding dessert table - Chen & Patel", Some("Macarons and mini tarts")),
    (12, "09:30", EventType::Training, "Food safety refresher", None),
    (15, "10:00", EventType::Order, "Community bread box delivery", Some("Eastgate delivery group")),
    (21, "13:00", EventType::Catering, "School fundraiser bake sale", None),
];

/// Fixed-date closures for the year of `today` and the following year
const HOLIDAYS: &[(u32, u32, &str)] = &[
    (1, 1, "New Year's Day - closed"),
    (7, 4, "Independence Day - closed"),
    (11, 27, "Thanksgiving - closed"),
    (12, 25, "Christmas Day - closed"),
];

/// Build the sample event set around `today`
pub fn sample_events(today: NaiveDate) -> Vec<Event> {
    let mut events: Vec<Event> = RELATIVE_EVENTS
        .iter()
        .enumerate()
        .map(|(idx, &(offset, time, event_type, title, description))| Event {
            id: format!("sample-{}", idx + 1),
            title: title.to_string(),
            date: format_iso(today + Duration::days(offset)),
            time: time.to_string(),
            event_type,
            description: description.map(String::from),
        })
        .collect();

    for year in [today.year(), today.year() + 1] {
        for &(month, day, title) in HOLIDAYS {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                events.push(Event {
                    id: format!("holiday-{}-{:02}-{:02}", year, month, day),
                    title: title.to_string(),
                    date: format_iso(date),
                    time: "00:00".to_string(),
                    event_type: EventType::Holiday,
                    description: None,
                });
            }
        }
    }

    events
}

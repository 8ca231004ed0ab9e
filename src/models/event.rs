use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One bookable time range within a date, as authored by an administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotTemplate {
    pub id: String,
    pub time: String,
}

/// Time-of-day range during which booking a date's slots is permitted.
/// Bounds are "HH:MM" strings as stored in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentWindow {
    pub start_time: String,
    pub end_time: String,
}

/// Event configuration as held in the durable configuration store. Missing
/// fields fall back to the compiled-in defaults when an older file is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    pub event_title: String,
    pub event_subtitle: String,
    pub event_description: String,
    pub event_dates: Vec<NaiveDate>,
    /// Fallback template list for dates without a specific one.
    pub time_slots: Vec<SlotTemplate>,
    pub date_slots: BTreeMap<NaiveDate, Vec<SlotTemplate>>,
    /// When set, applies uniformly to every date and overrides `enrollment_windows`.
    pub global_enrollment_window: Option<EnrollmentWindow>,
    pub enrollment_windows: BTreeMap<NaiveDate, EnrollmentWindow>,
    pub instructions: Vec<String>,
}

impl EventConfig {
    /// Templates for a given date, falling back to the shared list.
    pub fn slots_for(&self, date: NaiveDate) -> &[SlotTemplate] {
        self.date_slots
            .get(&date)
            .map(|slots| slots.as_slice())
            .unwrap_or(&self.time_slots)
    }

    /// Every date keyed in `date_slots` must appear in `event_dates`.
    pub fn validate(&self) -> Result<(), String> {
        for date in self.date_slots.keys() {
            if !self.event_dates.contains(date) {
                return Err(format!(
                    "Date {} has slot templates but is not listed in event_dates",
                    date
                ));
            }
        }
        Ok(())
    }
}

impl Default for EventConfig {
    fn default() -> Self {
        let dates: Vec<NaiveDate> = [
            "2025-10-06",
            "2025-10-07",
            "2025-10-08",
            "2025-10-09",
            "2025-10-10",
        ]
        .iter()
        .map(|d| d.parse().expect("valid default event date"))
        .collect();

        let templates = vec![
            SlotTemplate { id: "1".to_string(), time: "1:45 PM - 2:15 PM".to_string() },
            SlotTemplate { id: "2".to_string(), time: "2:15 PM - 2:45 PM".to_string() },
            SlotTemplate { id: "3".to_string(), time: "2:45 PM - 3:15 PM".to_string() },
            SlotTemplate { id: "4".to_string(), time: "3:15 PM - 3:45 PM".to_string() },
        ];

        let date_slots = dates
            .iter()
            .map(|date| (*date, templates.clone()))
            .collect::<BTreeMap<_, _>>();

        let enrollment_windows = dates
            .iter()
            .map(|date| {
                (
                    *date,
                    EnrollmentWindow {
                        start_time: "16:00".to_string(),
                        end_time: "18:00".to_string(),
                    },
                )
            })
            .collect::<BTreeMap<_, _>>();

        Self {
            event_title: "IRP Booking System".to_string(),
            event_subtitle: "Innovation & Research Park".to_string(),
            event_description: "Book review slots for your project presentations".to_string(),
            event_dates: dates,
            time_slots: templates,
            date_slots,
            global_enrollment_window: None,
            enrollment_windows,
            instructions: vec![
                "Reviewers will come from industry professionals".to_string(),
                "Make sure to give a professional presentation".to_string(),
                "Get your PPT prepared and professional".to_string(),
                "Once booked, you cannot change your slot".to_string(),
                "Be punctual and arrive 10 minutes before your slot".to_string(),
            ],
        }
    }
}

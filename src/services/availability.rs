use crate::models::{BookingWithUser, EventConfig, Slot, SlotDef};
use crate::repositories::BookingRepository;
use crate::services::catalog::build_catalog;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::HashMap;
use std::sync::Arc;

fn parse_hm(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Whether booking a slot on `date` is permitted at `now`. A past date is
/// closed, a future date open; today is open only while the wall clock falls
/// inside the window. A date without a configured window is always open.
pub fn enrollment_window_open(config: &EventConfig, date: NaiveDate, now: NaiveDateTime) -> bool {
    let window = config
        .global_enrollment_window
        .as_ref()
        .or_else(|| config.enrollment_windows.get(&date));

    let Some(window) = window else {
        return true;
    };

    if date < now.date() {
        return false;
    }
    if date > now.date() {
        return true;
    }

    match (parse_hm(&window.start_time), parse_hm(&window.end_time)) {
        (Some(start), Some(end)) => {
            let time = now.time();
            start <= time && time <= end
        }
        _ => {
            tracing::warn!(
                "Unparsable enrollment window {}..{} for {} - treating as open",
                window.start_time,
                window.end_time,
                date
            );
            true
        }
    }
}

/// Index bookings by stable slot id and by the legacy (date, time-label)
/// pair. Rows without a slot id are only reachable through the label key.
pub fn index_bookings<'a>(
    bookings: &'a [BookingWithUser],
) -> (
    HashMap<&'a str, &'a BookingWithUser>,
    HashMap<(NaiveDate, &'a str), &'a BookingWithUser>,
) {
    let mut by_slot_id = HashMap::new();
    let mut by_date_time = HashMap::new();

    for booking in bookings {
        if let Some(slot_id) = &booking.slot_id {
            by_slot_id.insert(slot_id.as_str(), booking);
        }
        by_date_time.insert((booking.slot_date, booking.slot_time.as_str()), booking);
    }

    (by_slot_id, by_date_time)
}

/// Joins the slot catalog against the current booking set. A slot is
/// available exactly when no booking matches it and its enrollment window is
/// open at `now`.
pub fn reconcile(
    catalog: &[SlotDef],
    bookings: &[BookingWithUser],
    config: &EventConfig,
    now: NaiveDateTime,
) -> Vec<Slot> {
    let (by_slot_id, by_date_time) = index_bookings(bookings);

    catalog
        .iter()
        .map(|def| {
            let booking = by_slot_id
                .get(def.id.as_str())
                .copied()
                .or_else(|| by_date_time.get(&(def.date, def.time.as_str())).copied());

            Slot {
                id: def.id.clone(),
                date: def.date,
                time: def.time.clone(),
                is_available: booking.is_none() && enrollment_window_open(config, def.date, now),
                booked_by: booking.map(|b| b.name.clone()),
                project_name: booking.and_then(|b| b.project_name.clone()),
            }
        })
        .collect()
}

/// Computes reconciled slot availability from the live booking set.
pub struct AvailabilityService {
    bookings: Arc<dyn BookingRepository>,
}

impl AvailabilityService {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    /// One full reconciliation pass. A failed booking fetch degrades to
    /// every slot available rather than blocking the caller.
    pub async fn snapshot(&self, config: &EventConfig, now: NaiveDateTime) -> Vec<Slot> {
        let catalog = build_catalog(config);

        match self.bookings.find_all_with_users().await {
            Ok(rows) => reconcile(&catalog, &rows, config, now),
            Err(e) => {
                tracing::warn!("Failed to fetch bookings, treating all slots as available: {}", e);
                catalog
                    .into_iter()
                    .map(|def| Slot {
                        id: def.id,
                        date: def.date,
                        time: def.time,
                        is_available: true,
                        booked_by: None,
                        project_name: None,
                    })
                    .collect()
            }
        }
    }
}

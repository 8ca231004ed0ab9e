use chrono::NaiveDate;
use std::collections::BTreeMap;

use irp_booking_backend::models::{EventConfig, SlotTemplate};
use irp_booking_backend::services::catalog::build_catalog;

fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid date")
}

fn template(id: &str, time: &str) -> SlotTemplate {
    SlotTemplate {
        id: id.to_string(),
        time: time.to_string(),
    }
}

#[test]
fn test_catalog_length_equals_sum_of_template_lists() {
    let d1 = date("2025-10-06");
    let d2 = date("2025-10-07");

    let mut date_slots = BTreeMap::new();
    date_slots.insert(
        d1,
        vec![
            template("1", "1:45 PM - 2:15 PM"),
            template("2", "2:15 PM - 2:45 PM"),
            template("3", "2:45 PM - 3:15 PM"),
            template("4", "3:15 PM - 3:45 PM"),
        ],
    );
    date_slots.insert(
        d2,
        vec![
            template("1", "10:00 AM - 10:30 AM"),
            template("2", "10:30 AM - 11:00 AM"),
        ],
    );

    let config = EventConfig {
        event_dates: vec![d1, d2],
        time_slots: vec![],
        date_slots,
        ..EventConfig::default()
    };

    let catalog = build_catalog(&config);
    let expected: usize = config
        .event_dates
        .iter()
        .map(|d| config.slots_for(*d).len())
        .sum();

    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.len(), expected);
}

#[test]
fn test_catalog_preserves_order_and_composite_ids() {
    let config = EventConfig::default();
    let catalog = build_catalog(&config);

    // Five default dates with four templates each
    assert_eq!(catalog.len(), 20);
    assert_eq!(catalog[0].id, "2025-10-06-1");
    assert_eq!(catalog[0].time, "1:45 PM - 2:15 PM");
    assert_eq!(catalog[3].id, "2025-10-06-4");
    assert_eq!(catalog[4].id, "2025-10-07-1");
    assert_eq!(catalog[19].id, "2025-10-10-4");
}

#[test]
fn test_empty_configuration_yields_empty_catalog() {
    let config = EventConfig {
        event_dates: vec![],
        time_slots: vec![],
        date_slots: BTreeMap::new(),
        ..EventConfig::default()
    };

    assert!(build_catalog(&config).is_empty());
}

#[test]
fn test_dates_without_specific_slots_use_shared_templates() {
    let d1 = date("2025-10-06");
    let config = EventConfig {
        event_dates: vec![d1],
        time_slots: vec![template("a", "9:00 AM - 9:30 AM")],
        date_slots: BTreeMap::new(),
        ..EventConfig::default()
    };

    let catalog = build_catalog(&config);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].id, "2025-10-06-a");
    assert_eq!(catalog[0].time, "9:00 AM - 9:30 AM");
}

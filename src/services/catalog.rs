use crate::models::{EventConfig, SlotDef};

/// Expands the configured event dates and their per-date slot templates into
/// the full ordered slot space. A degenerate empty configuration yields an
/// empty catalog.
pub fn build_catalog(config: &EventConfig) -> Vec<SlotDef> {
    let mut catalog = Vec::new();

    for date in &config.event_dates {
        for template in config.slots_for(*date) {
            catalog.push(SlotDef {
                id: format!("{}-{}", date, template.id),
                date: *date,
                time: template.time.clone(),
            });
        }
    }

    catalog
}

use crate::event_config::EventConfigStore;
use crate::models::{
    AdminSlotBooking, AdminSlotData, BookSlotForm, BookingRecord, BookingWithUser, ServiceError,
    TeamProfile,
};
use crate::repositories::{BookingRepository, StudentRepository};
use crate::services::availability::{enrollment_window_open, index_bookings};
use crate::services::catalog::build_catalog;
use crate::services::changes::{ChangeHub, TableChange};
use crate::services::refresh::RefreshCoordinator;
use crate::services::status_service::StatusService;
use chrono::Local;
use std::sync::Arc;

pub struct BookingService {
    bookings: Arc<dyn BookingRepository>,
    students: Arc<dyn StudentRepository>,
    config_store: Arc<EventConfigStore>,
    status: Arc<StatusService>,
    coordinator: Arc<RefreshCoordinator>,
    hub: Arc<ChangeHub>,
}

impl BookingService {
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        students: Arc<dyn StudentRepository>,
        config_store: Arc<EventConfigStore>,
        status: Arc<StatusService>,
        coordinator: Arc<RefreshCoordinator>,
        hub: Arc<ChangeHub>,
    ) -> Self {
        Self {
            bookings,
            students,
            config_store,
            status,
            coordinator,
            hub,
        }
    }

    /// Place a booking for a slot. Re-checks system status, the enrollment
    /// window, and slot availability immediately before committing, so a
    /// just-closed window or a just-taken slot is caught here rather than at
    /// the constraint.
    pub async fn place_booking(&self, form: &BookSlotForm) -> Result<BookingRecord, ServiceError> {
        let status = self.status.load_or_current().await;
        if !status.system_active {
            return Err(ServiceError::ValidationError(
                "The booking system is currently closed".to_string(),
            ));
        }

        let student = self
            .students
            .find_by_id(form.user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;

        if self.bookings.find_by_user_id(student.id).await?.is_some() {
            return Err(ServiceError::Conflict(
                "You already have a booking. Each team can book only one slot.".to_string(),
            ));
        }

        let config = self.config_store.load();
        let catalog = build_catalog(&config);
        let slot = catalog
            .iter()
            .find(|def| def.id == form.slot_id)
            .ok_or_else(|| ServiceError::NotFound("Unknown slot".to_string()))?;

        if !enrollment_window_open(&config, slot.date, Local::now().naive_local()) {
            return Err(ServiceError::ValidationError(
                "Enrollment is closed for this date".to_string(),
            ));
        }

        // Fresh reconciliation pass before acting on the slot.
        let slots = self.coordinator.refresh_now().await?;
        if let Some(current) = slots.iter().find(|s| s.id == slot.id) {
            if !current.is_available {
                return Err(ServiceError::Conflict(
                    "This slot has already been booked".to_string(),
                ));
            }
        }

        let profile = TeamProfile {
            team_lead_name: form.team_lead_name.clone(),
            team_lead_roll_no: form.team_lead_roll_no.clone(),
            project_name: form.project_name.clone(),
        };

        let record = match self.bookings.commit_booking(student.id, &profile, slot).await {
            Ok(record) => record,
            Err(ServiceError::DatabaseError(msg)) => return Err(Self::map_booking_conflict(msg)),
            Err(e) => return Err(e),
        };

        self.hub.publish(TableChange::Bookings);
        tracing::info!(
            "Booking {} placed by user {} for slot {}",
            record.id,
            record.user_id,
            slot.id
        );
        Ok(record)
    }

    /// Two submissions can both pass the availability check; the constraint
    /// catches the loser, and the error text tells us which rule fired.
    fn map_booking_conflict(msg: String) -> ServiceError {
        if msg.contains("UNIQUE constraint failed") || msg.contains("duplicate key") {
            if msg.contains("user_id") {
                ServiceError::Conflict(
                    "You already have a booking. Each team can book only one slot.".to_string(),
                )
            } else {
                ServiceError::Conflict("This slot has already been booked".to_string())
            }
        } else {
            ServiceError::DatabaseError(msg)
        }
    }

    pub async fn booking_for_user(
        &self,
        user_id: i64,
    ) -> Result<Option<BookingWithUser>, ServiceError> {
        self.bookings.find_with_user_by_user_id(user_id).await
    }

    pub async fn booking_with_user(
        &self,
        booking_id: i64,
    ) -> Result<Option<BookingWithUser>, ServiceError> {
        self.bookings.find_with_user(booking_id).await
    }

    /// All bookings joined with their occupants, newest first.
    pub async fn admin_bookings(&self) -> Result<Vec<BookingWithUser>, ServiceError> {
        self.bookings.find_all_with_users().await
    }

    /// Admin slot grid: every catalog slot with full occupant detail.
    pub async fn admin_slots(&self) -> Result<Vec<AdminSlotData>, ServiceError> {
        let config = self.config_store.load();
        let catalog = build_catalog(&config);
        let bookings = self.bookings.find_all_with_users().await?;
        let (by_slot_id, by_date_time) = index_bookings(&bookings);

        let slots = catalog
            .iter()
            .map(|def| {
                let booking = by_slot_id
                    .get(def.id.as_str())
                    .copied()
                    .or_else(|| by_date_time.get(&(def.date, def.time.as_str())).copied());

                AdminSlotData {
                    id: def.id.clone(),
                    date: def.date,
                    time: def.time.clone(),
                    is_available: booking.is_none(),
                    booking_info: booking.map(|b| AdminSlotBooking {
                        booking_id: b.id,
                        booked_by: b.name.clone(),
                        project_name: b.project_name.clone(),
                        team_lead_name: b.team_lead_name.clone(),
                        team_lead_roll_no: b.team_lead_roll_no.clone(),
                    }),
                }
            })
            .collect();

        Ok(slots)
    }

    pub async fn remove_booking(&self, booking_id: i64) -> Result<String, ServiceError> {
        let booking = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Booking not found".to_string()))?;

        self.bookings.delete(booking.id).await?;
        self.hub.publish(TableChange::Bookings);

        tracing::info!("Booking {} removed", booking.id);
        Ok(format!("Booking {} removed successfully", booking.id))
    }
}

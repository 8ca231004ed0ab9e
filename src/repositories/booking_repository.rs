use crate::models::{BookingRecord, BookingWithUser, ServiceError, SlotDef, TeamProfile};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn find_all_with_users(&self) -> Result<Vec<BookingWithUser>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<BookingRecord>, ServiceError>;
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<BookingRecord>, ServiceError>;
    async fn find_with_user(&self, id: i64) -> Result<Option<BookingWithUser>, ServiceError>;
    async fn find_with_user_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Option<BookingWithUser>, ServiceError>;
    /// Writes the team profile onto the student row and inserts the booking
    /// in a single transaction, so a failure leaves neither write behind.
    async fn commit_booking(
        &self,
        user_id: i64,
        profile: &TeamProfile,
        slot: &SlotDef,
    ) -> Result<BookingRecord, ServiceError>;
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}

pub struct SqliteBookingRepository {
    pool: SqlitePool,
}

impl SqliteBookingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const JOINED_COLUMNS: &str = "b.id, b.user_id, b.slot_id, b.slot_date, b.slot_time, b.status, b.created_at, \
     u.name, u.roll_no, u.department, u.email, u.year, u.team_lead_name, u.team_lead_roll_no, u.project_name";

#[async_trait]
impl BookingRepository for SqliteBookingRepository {
    async fn find_all_with_users(&self) -> Result<Vec<BookingWithUser>, ServiceError> {
        let bookings = sqlx::query_as::<_, BookingWithUser>(&format!(
            "SELECT {} FROM bookings b JOIN users u ON u.id = b.user_id ORDER BY b.created_at DESC",
            JOINED_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BookingRecord>, ServiceError> {
        let booking = sqlx::query_as::<_, BookingRecord>(
            "SELECT id, user_id, slot_id, slot_date, slot_time, status, created_at
             FROM bookings WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<BookingRecord>, ServiceError> {
        let booking = sqlx::query_as::<_, BookingRecord>(
            "SELECT id, user_id, slot_id, slot_date, slot_time, status, created_at
             FROM bookings WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn find_with_user(&self, id: i64) -> Result<Option<BookingWithUser>, ServiceError> {
        let booking = sqlx::query_as::<_, BookingWithUser>(&format!(
            "SELECT {} FROM bookings b JOIN users u ON u.id = b.user_id WHERE b.id = ?",
            JOINED_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn find_with_user_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Option<BookingWithUser>, ServiceError> {
        let booking = sqlx::query_as::<_, BookingWithUser>(&format!(
            "SELECT {} FROM bookings b JOIN users u ON u.id = b.user_id WHERE b.user_id = ?",
            JOINED_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn commit_booking(
        &self,
        user_id: i64,
        profile: &TeamProfile,
        slot: &SlotDef,
    ) -> Result<BookingRecord, ServiceError> {
        let created_at = Utc::now();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "UPDATE users SET team_lead_name = ?, team_lead_roll_no = ?, project_name = ? WHERE id = ?",
        )
        .bind(&profile.team_lead_name)
        .bind(&profile.team_lead_roll_no)
        .bind(&profile.project_name)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query(
            "INSERT INTO bookings (user_id, slot_id, slot_date, slot_time, status, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(&slot.id)
        .bind(slot.date)
        .bind(&slot.time)
        .bind("confirmed")
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        let id = result.last_insert_rowid();
        tx.commit().await?;

        Ok(BookingRecord {
            id,
            user_id,
            slot_id: Some(slot.id.clone()),
            slot_date: slot.date,
            slot_time: slot.time.clone(),
            status: "confirmed".to_string(),
            created_at,
        })
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

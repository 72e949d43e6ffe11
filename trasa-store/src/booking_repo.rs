use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use trasa_core::booking::{Booking, BookingStatus};
use trasa_core::repository::BookingRepository;
use trasa_core::{BookingError, BookingResult};

/// PostgreSQL booking repository
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Struct to map SQL results
#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i64,
    user_id: i64,
    route_id: i64,
    qty: i32,
    status: String,
    price_total: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BookingRow {
    fn into_booking(self, op: &'static str) -> BookingResult<Booking> {
        let status = BookingStatus::from_str(&self.status).ok_or_else(|| {
            BookingError::storage(
                op,
                format!("unknown status '{}' on booking {}", self.status, self.id),
            )
        })?;

        Ok(Booking {
            id: self.id,
            user_id: self.user_id,
            route_id: self.route_id,
            qty: self.qty,
            status,
            price_total: self.price_total,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn create(&self, booking: &Booking) -> BookingResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO bookings (user_id, route_id, qty, status, price_total, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(booking.user_id)
        .bind(booking.route_id)
        .bind(booking.qty)
        .bind(booking.status.as_str())
        .bind(booking.price_total)
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| BookingError::storage("create", e))?;

        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> BookingResult<Booking> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, user_id, route_id, qty, status, price_total, created_at, updated_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BookingError::storage("get_by_id", e))?;

        match row {
            Some(row) => row.into_booking("get_by_id"),
            None => Err(BookingError::NotFound(id)),
        }
    }

    async fn update(&self, booking: &Booking) -> BookingResult<()> {
        // created_at stays out of the SET list on purpose.
        let result = sqlx::query(
            r#"
            UPDATE bookings
            SET user_id = $2, route_id = $3, qty = $4, status = $5, price_total = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(booking.id)
        .bind(booking.user_id)
        .bind(booking.route_id)
        .bind(booking.qty)
        .bind(booking.status.as_str())
        .bind(booking.price_total)
        .bind(booking.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BookingError::storage("update", e))?;

        if result.rows_affected() == 0 {
            return Err(BookingError::NotFound(booking.id));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> BookingResult<()> {
        // Deleting an absent id is a no-op by contract.
        sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| BookingError::storage("delete", e))?;

        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> BookingResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, user_id, route_id, qty, status, price_total, created_at, updated_at
            FROM bookings
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookingError::storage("list", e))?;

        rows.into_iter().map(|row| row.into_booking("list")).collect()
    }
}

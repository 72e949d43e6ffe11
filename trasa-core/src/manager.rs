use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::booking::{Booking, BookingStatus, CreateBookingRequest, UpdateBookingRequest};
use crate::repository::BookingRepository;
use crate::{BookingError, BookingResult};

/// Page size when the caller asks for nothing usable.
const DEFAULT_LIMIT: i64 = 10;
/// Hard ceiling on page size.
const MAX_LIMIT: i64 = 100;

/// Manages booking lifecycle and state transitions, delegating persistence
/// to a [`BookingRepository`].
pub struct BookingManager {
    repo: Arc<dyn BookingRepository>,
}

impl BookingManager {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo }
    }

    /// Create a new booking. Status is forced to `Created` and both
    /// timestamps are stamped here; the store assigns the identifier.
    pub async fn create(&self, req: CreateBookingRequest) -> BookingResult<Booking> {
        if req.qty <= 0 {
            return Err(BookingError::InvalidQuantity(req.qty));
        }

        let now = Utc::now();
        let mut booking = Booking {
            id: 0,
            user_id: req.user_id,
            route_id: req.route_id,
            qty: req.qty,
            status: BookingStatus::Created,
            price_total: req.price_total,
            created_at: now,
            updated_at: now,
        };
        booking.id = self.repo.create(&booking).await?;

        info!("Created booking {}", booking.id);
        Ok(booking)
    }

    /// Get a booking by ID
    pub async fn get(&self, id: i64) -> BookingResult<Booking> {
        self.repo.get_by_id(id).await
    }

    /// Replace a booking. The stored `created_at` always wins over anything
    /// the caller sent; a missing status keeps the stored one, while a
    /// supplied status is persisted as-is so payment and confirmation flows
    /// can move the lifecycle forward.
    pub async fn update(&self, id: i64, req: UpdateBookingRequest) -> BookingResult<Booking> {
        let existing = self.repo.get_by_id(id).await?;

        if req.qty <= 0 {
            return Err(BookingError::InvalidQuantity(req.qty));
        }

        let booking = Booking {
            id,
            user_id: req.user_id,
            route_id: req.route_id,
            qty: req.qty,
            status: req.status.unwrap_or(existing.status),
            price_total: req.price_total,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };
        self.repo.update(&booking).await?;

        info!("Updated booking {}", booking.id);
        Ok(booking)
    }

    /// Cancel a booking by expiring it in place. Confirmed bookings cannot
    /// be cancelled, and the row is never deleted.
    pub async fn cancel(&self, id: i64) -> BookingResult<Booking> {
        let mut booking = self.repo.get_by_id(id).await?;

        if booking.status == BookingStatus::Confirmed {
            return Err(BookingError::BookingConfirmed(id));
        }

        booking.update_status(BookingStatus::Expired);
        self.repo.update(&booking).await?;

        info!("Cancelled booking {}", id);
        Ok(booking)
    }

    /// Page through bookings, newest first. Out-of-range paging input is
    /// clamped rather than rejected: limit <= 0 falls back to 10, limit
    /// above 100 caps at 100, a negative offset becomes 0.
    pub async fn list(&self, limit: i64, offset: i64) -> BookingResult<Vec<Booking>> {
        let limit = if limit <= 0 {
            DEFAULT_LIMIT
        } else {
            limit.min(MAX_LIMIT)
        };
        let offset = offset.max(0);

        self.repo.list(limit, offset).await
    }
}

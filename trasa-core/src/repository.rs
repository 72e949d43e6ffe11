use async_trait::async_trait;

use crate::booking::Booking;
use crate::BookingResult;

/// Repository trait for booking data access
///
/// Adapters keep `list` ordered by creation time, newest first, and report
/// backend failures as [`BookingError::Storage`](crate::BookingError::Storage)
/// instead of swallowing them.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a new row and return the identifier assigned by the store.
    async fn create(&self, booking: &Booking) -> BookingResult<i64>;

    /// Fetch one booking, `NotFound` when no row matches.
    async fn get_by_id(&self, id: i64) -> BookingResult<Booking>;

    /// Overwrite the row keyed by `booking.id`, `NotFound` when it vanished.
    /// `created_at` is immutable and never written back.
    async fn update(&self, booking: &Booking) -> BookingResult<()>;

    /// Remove a row. Deleting an absent id succeeds as a no-op. Kept for
    /// administrative use; cancellation goes through `update`.
    async fn delete(&self, id: i64) -> BookingResult<()>;

    /// Page through bookings ordered by `created_at` descending.
    async fn list(&self, limit: i64, offset: i64) -> BookingResult<Vec<Booking>>;
}

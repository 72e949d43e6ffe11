use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::booking::Booking;
use crate::repository::BookingRepository;
use crate::{BookingError, BookingResult};

/// In-memory booking repository
///
/// Reference adapter used by tests and demos. Identifiers are sequential
/// and listing matches the relational adapter: `created_at` descending,
/// higher id first on equal timestamps.
pub struct InMemoryBookingRepository {
    inner: Mutex<Inner>,
}

struct Inner {
    rows: HashMap<i64, Booking>,
    next_id: i64,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                rows: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only means another test panicked mid-write.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for InMemoryBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, booking: &Booking) -> BookingResult<i64> {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        let mut row = booking.clone();
        row.id = id;
        inner.rows.insert(id, row);
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> BookingResult<Booking> {
        self.lock()
            .rows
            .get(&id)
            .cloned()
            .ok_or(BookingError::NotFound(id))
    }

    async fn update(&self, booking: &Booking) -> BookingResult<()> {
        let mut inner = self.lock();
        match inner.rows.get_mut(&booking.id) {
            Some(row) => {
                *row = booking.clone();
                Ok(())
            }
            None => Err(BookingError::NotFound(booking.id)),
        }
    }

    async fn delete(&self, id: i64) -> BookingResult<()> {
        self.lock().rows.remove(&id);
        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> BookingResult<Vec<Booking>> {
        let mut rows: Vec<Booking> = self.lock().rows.values().cloned().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(rows
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingStatus;
    use chrono::Utc;

    fn sample(qty: i32) -> Booking {
        let now = Utc::now();
        Booking {
            id: 0,
            user_id: 7,
            route_id: 12,
            qty,
            status: BookingStatus::Created,
            price_total: 4500,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryBookingRepository::new();

        let first = repo.create(&sample(1)).await.unwrap();
        let second = repo.create(&sample(2)).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn test_get_by_id_reports_missing_rows() {
        let repo = InMemoryBookingRepository::new();

        let id = repo.create(&sample(1)).await.unwrap();
        assert_eq!(repo.get_by_id(id).await.unwrap().qty, 1);

        let err = repo.get_by_id(id + 1).await.unwrap_err();
        assert!(matches!(err, BookingError::NotFound(i) if i == id + 1));
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let repo = InMemoryBookingRepository::new();

        let mut row = sample(1);
        row.id = 99;
        let err = repo.update(&row).await.unwrap_err();
        assert!(matches!(err, BookingError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_delete_absent_row_is_a_noop() {
        let repo = InMemoryBookingRepository::new();
        repo.delete(123).await.unwrap();

        let id = repo.create(&sample(1)).await.unwrap();
        repo.delete(id).await.unwrap();
        assert!(matches!(
            repo.get_by_id(id).await.unwrap_err(),
            BookingError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_list_orders_newest_first_and_pages() {
        let repo = InMemoryBookingRepository::new();
        for qty in 1..=5 {
            let mut row = sample(qty);
            // Spread creation times so ordering does not hinge on the tie-break.
            row.created_at = Utc::now() + chrono::Duration::milliseconds(qty as i64);
            repo.create(&row).await.unwrap();
        }

        let page = repo.list(2, 0).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].qty, 5);
        assert_eq!(page[1].qty, 4);

        let next = repo.list(2, 2).await.unwrap();
        assert_eq!(next[0].qty, 3);
        assert_eq!(next[1].qty, 2);

        let past_the_end = repo.list(10, 5).await.unwrap();
        assert!(past_the_end.is_empty());
    }

    #[tokio::test]
    async fn test_list_breaks_timestamp_ties_by_id() {
        let repo = InMemoryBookingRepository::new();
        let row = sample(1);
        repo.create(&row).await.unwrap();
        repo.create(&row).await.unwrap();

        let page = repo.list(10, 0).await.unwrap();
        assert_eq!(page[0].id, 2);
        assert_eq!(page[1].id, 1);
    }
}

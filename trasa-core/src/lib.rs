pub mod booking;
pub mod manager;
pub mod memory;
pub mod repository;

pub use booking::{Booking, BookingStatus, CreateBookingRequest, UpdateBookingRequest};
pub use manager::BookingManager;
pub use memory::InMemoryBookingRepository;
pub use repository::BookingRepository;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("quantity must be greater than zero, got {0}")]
    InvalidQuantity(i32),
    #[error("booking {0} not found")]
    NotFound(i64),
    #[error("cannot cancel a confirmed booking ({0})")]
    BookingConfirmed(i64),
    #[error("storage failure during {op}: {message}")]
    Storage { op: &'static str, message: String },
}

impl BookingError {
    /// Wrap a backend failure with the gateway operation that hit it.
    pub fn storage(op: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Storage {
            op,
            message: err.to_string(),
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;

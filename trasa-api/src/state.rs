use std::sync::Arc;

use trasa_core::BookingManager;

#[derive(Clone)]
pub struct AppState {
    pub bookings: Arc<BookingManager>,
}

impl AppState {
    pub fn new(bookings: Arc<BookingManager>) -> Self {
        Self { bookings }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Created,
    Paid,
    Confirmed,
    Expired,
}

impl BookingStatus {
    /// Storage spelling, identical to the wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Created => "CREATED",
            BookingStatus::Paid => "PAID",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Expired => "EXPIRED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "CREATED" => Some(BookingStatus::Created),
            "PAID" => Some(BookingStatus::Paid),
            "CONFIRMED" => Some(BookingStatus::Confirmed),
            "EXPIRED" => Some(BookingStatus::Expired),
            _ => None,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A seat reservation on a route, from creation through payment,
/// confirmation or expiry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub route_id: i64,
    pub qty: i32,
    pub status: BookingStatus,
    pub price_total: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Update booking status
    pub fn update_status(&mut self, new_status: BookingStatus) {
        self.status = new_status;
        self.updated_at = Utc::now();
    }
}

/// Payload for creating a booking. Identifier, status and timestamps are
/// assigned by the service, never the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingRequest {
    pub user_id: i64,
    pub route_id: i64,
    pub qty: i32,
    pub price_total: i64,
}

/// Payload for replacing a booking. A missing `status` keeps the stored
/// one; payment and confirmation services send `PAID` / `CONFIRMED` here
/// to move the lifecycle forward.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBookingRequest {
    pub user_id: i64,
    pub route_id: i64,
    pub qty: i32,
    pub price_total: i64,
    #[serde(default)]
    pub status: Option<BookingStatus>,
}

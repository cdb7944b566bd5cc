mod booking;

pub use booking::{Booking, Guests};

/// Helper function to generate a new booking ID.
///
/// IDs are the creation wall-clock timestamp in milliseconds, rendered as a
/// decimal string. Uniqueness is only as strong as millisecond granularity.
pub fn new_booking_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

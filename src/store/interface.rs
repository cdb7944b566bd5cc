use std::{future::Future, pin::Pin};

use crate::models::Booking;

/// Storage backend for the booking collection.
///
/// Implementations own the slot-uniqueness invariant: [`insert_booking`] must
/// atomically check for a `(date, time)` collision and persist, so that two
/// concurrent inserts for the same slot cannot both succeed.
///
/// [`insert_booking`]: StoreClient::insert_booking
pub trait StoreClient: Send + Sync + 'static {
    /// Returns every persisted booking. A store that has never been written
    /// to yields an empty collection, not an error.
    fn list_bookings(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Booking>, StoreError>> + Send + '_>>;

    /// Persists a new booking, failing with [`StoreError::SlotTaken`] if its
    /// `(date, time)` slot is already occupied.
    fn insert_booking<'b>(
        &self,
        booking: &'b Booking,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + 'b>>;
}

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("slot is already booked")]
    SlotTaken,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored booking data is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

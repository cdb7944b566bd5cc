use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::{
    api::{ApiError, ApiState},
    models::{Booking, Guests, new_booking_id},
};

/// Payload for creating a booking.
///
/// Every field is optional at the serde level so that an absent field
/// surfaces as the API's own validation error instead of a deserialization
/// rejection.
#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    date: Option<String>,
    time: Option<String>,
    guests: Option<Guests>,
    name: Option<String>,
    contact: Option<String>,
}

impl BookingRequest {
    /// Checks that all five fields are present and non-blank, producing the
    /// booking to persist with a freshly generated ID.
    fn into_booking(self) -> Result<Booking, ApiError> {
        let (Some(date), Some(time), Some(guests), Some(name), Some(contact)) =
            (self.date, self.time, self.guests, self.name, self.contact)
        else {
            return Err(ApiError::MissingFields);
        };
        if date.is_empty()
            || time.is_empty()
            || guests.is_blank()
            || name.is_empty()
            || contact.is_empty()
        {
            return Err(ApiError::MissingFields);
        }
        Ok(Booking {
            id: new_booking_id(),
            date,
            time,
            guests,
            name,
            contact,
        })
    }
}

/// Response body for a successful creation.
#[derive(Debug, Serialize)]
pub struct BookingCreated {
    message: &'static str,
    booking: Booking,
}

pub async fn get_bookings(
    State(store): State<ApiState>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let bookings = store.list_bookings().await.map_err(ApiError::Fetch)?;
    Ok(Json(bookings))
}

pub async fn post_booking(
    State(store): State<ApiState>,
    Json(request): Json<BookingRequest>,
) -> Result<(StatusCode, Json<BookingCreated>), ApiError> {
    let booking = request.into_booking()?;
    store
        .insert_booking(&booking)
        .await
        .map_err(ApiError::from_save)?;
    Ok((
        StatusCode::CREATED,
        Json(BookingCreated {
            message: "Booking successful!",
            booking,
        }),
    ))
}

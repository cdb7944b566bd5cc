//! # Booking server
//!
//! A small HTTP API for restaurant table reservations. Bookings are persisted
//! as a single JSON document on disk; a slot is identified by its
//! `(date, time)` pair and may only be booked once.

pub mod api;
pub mod models;
pub mod store;

//! # Booking Crate
//!
//! The booking wizard's domain logic: room rates and quotes, guest-detail
//! validation, and booking records.
//!
//! ## Main Components
//!
//! - **rates**: RoomType rate table and BookingQuote calculation
//! - **validate**: email/phone/CNIC validators
//! - **booking**: BookingRequest, GuestDetails, Booking records
//! - **error**: Error types, including per-field validation failures
//!
//! ## Example Usage
//!
//! ```ignore
//! use booking::{Booking, BookingQuote, BookingRequest, RoomType};
//!
//! let quote = BookingQuote::calculate(RoomType::Double, 3);
//! assert_eq!(quote.total, 29500);
//!
//! let record = Booking::create(&hostel, request, guest)?;
//! println!("Booked: {}", record.booking_id);
//! ```
//!
//! Everything here is pure calculation and validation; persistence and the
//! simulated confirmation delay live with the orchestrator.

pub mod booking;
pub mod error;
pub mod rates;
pub mod validate;

// Re-export commonly used types
pub use booking::{Booking, BookingRequest, BookingStatus, GuestDetails, generate_booking_id};
pub use error::{BookingError, FieldError, Result};
pub use rates::{BookingQuote, RoomType, SECURITY_DEPOSIT, SERVICE_FEE};

//! Booking requests, guest details, and confirmed booking records.

use catalog::Hostel;
use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BookingError, FieldError, Result};
use crate::rates::{BookingQuote, RoomType};
use crate::validate::{is_valid_cnic, is_valid_email, is_valid_phone};

/// What the wizard's first step collects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BookingRequest {
    pub room_type: RoomType,
    pub checkin_date: NaiveDate,
    pub duration_months: u32,
    pub students_count: u32,
}

impl BookingRequest {
    /// Check-out is check-in plus the stay duration, in calendar months
    pub fn checkout_date(&self) -> Option<NaiveDate> {
        self.checkin_date
            .checked_add_months(Months::new(self.duration_months))
    }

    fn validate(&self) -> Result<()> {
        if self.duration_months == 0 {
            return Err(BookingError::InvalidValue {
                field: "duration_months".to_string(),
                value: "0".to_string(),
            });
        }
        if self.students_count == 0 {
            return Err(BookingError::InvalidValue {
                field: "students_count".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

/// What the wizard's details step collects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub cnic: String,
    pub university: String,
    pub student_id: String,
    pub emergency_name: String,
    pub emergency_phone: String,
    #[serde(default)]
    pub special_requests: Option<String>,
}

impl GuestDetails {
    /// Every failing field, in form order; empty when the details are good.
    pub fn validation_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if !is_valid_email(&self.email) {
            errors.push(FieldError {
                field: "email",
                message: "Please enter a valid email address",
            });
        }
        if !is_valid_phone(&self.phone) {
            errors.push(FieldError {
                field: "phone",
                message: "Please enter a valid phone number",
            });
        }
        if !is_valid_cnic(&self.cnic) {
            errors.push(FieldError {
                field: "cnic",
                message: "Please enter a valid CNIC (XXXXX-XXXXXXX-X)",
            });
        }
        if !is_valid_phone(&self.emergency_phone) {
            errors.push(FieldError {
                field: "emergency_phone",
                message: "Please enter a valid emergency phone number",
            });
        }
        errors
    }

    pub fn validate(&self) -> Result<()> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(BookingError::InvalidDetails(errors))
        }
    }
}

/// Lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// A completed booking, as stored in booking history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: String,
    pub hostel_id: String,
    pub hostel_name: String,
    pub room_type: RoomType,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    pub duration_months: u32,
    pub students_count: u32,
    pub guest: GuestDetails,
    pub quote: BookingQuote,
    pub status: BookingStatus,
    pub booked_at: DateTime<Utc>,
}

impl Booking {
    /// Assemble a pending booking from validated wizard input.
    ///
    /// Guest details and the request are validated here; a booking record
    /// cannot exist with bad fields.
    pub fn create(hostel: &Hostel, request: BookingRequest, guest: GuestDetails) -> Result<Self> {
        guest.validate()?;
        request.validate()?;

        let checkout_date = request
            .checkout_date()
            .ok_or_else(|| BookingError::InvalidDate(request.checkin_date.to_string()))?;
        let quote = BookingQuote::calculate(request.room_type, request.duration_months);

        Ok(Self {
            booking_id: generate_booking_id(),
            hostel_id: hostel.id.clone(),
            hostel_name: hostel.name.clone(),
            room_type: request.room_type,
            checkin_date: request.checkin_date,
            checkout_date,
            duration_months: request.duration_months,
            students_count: request.students_count,
            guest,
            quote,
            status: BookingStatus::Pending,
            booked_at: Utc::now(),
        })
    }
}

const ID_SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Booking reference: "BK", the last eight digits of the current unix
/// millisecond clock, and three random uppercase alphanumerics.
pub fn generate_booking_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let digits = (millis.rem_euclid(100_000_000)) as u32;
    let suffix: String = (0..3)
        .map(|_| ID_SUFFIX_CHARSET[rand::random_range(0..ID_SUFFIX_CHARSET.len())] as char)
        .collect();
    format!("BK{digits:08}{suffix}")
}

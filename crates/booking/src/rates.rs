//! Room types and the rate table.
//!
//! Rates are matched exhaustively over a closed enum; there is no
//! string-keyed fallback row.

use crate::error::{BookingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Monthly security deposit charged on every booking, in whole units
pub const SECURITY_DEPOSIT: u32 = 5000;

/// Flat service fee charged on every booking, in whole units
pub const SERVICE_FEE: u32 = 500;

/// Room sharing options offered by the booking wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    /// The wizard's preselected option
    #[default]
    Double,
    Triple,
}

impl RoomType {
    /// Monthly rate in whole currency units
    pub fn monthly_rate(&self) -> u32 {
        match self {
            RoomType::Single => 12000,
            RoomType::Double => 8000,
            RoomType::Triple => 6500,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Triple => "Triple",
        }
    }
}

impl FromStr for RoomType {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "single" => Ok(RoomType::Single),
            "double" => Ok(RoomType::Double),
            "triple" => Ok(RoomType::Triple),
            _ => Err(BookingError::InvalidValue {
                field: "room_type".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Priced breakdown of a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingQuote {
    /// Monthly rate × duration
    pub room_rent: u32,
    pub security_deposit: u32,
    pub service_fee: u32,
    pub total: u32,
}

impl BookingQuote {
    /// Price a stay: rent for the full duration plus the fixed deposit
    /// and service fee.
    pub fn calculate(room_type: RoomType, duration_months: u32) -> Self {
        let room_rent = room_type.monthly_rate() * duration_months;
        Self {
            room_rent,
            security_deposit: SECURITY_DEPOSIT,
            service_fee: SERVICE_FEE,
            total: room_rent + SECURITY_DEPOSIT + SERVICE_FEE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_table() {
        assert_eq!(RoomType::Single.monthly_rate(), 12000);
        assert_eq!(RoomType::Double.monthly_rate(), 8000);
        assert_eq!(RoomType::Triple.monthly_rate(), 6500);
    }

    #[test]
    fn test_quote_double_three_months() {
        let quote = BookingQuote::calculate(RoomType::Double, 3);

        assert_eq!(quote.room_rent, 24000);
        assert_eq!(quote.security_deposit, 5000);
        assert_eq!(quote.service_fee, 500);
        assert_eq!(quote.total, 29500);
    }

    #[test]
    fn test_quote_single_year() {
        let quote = BookingQuote::calculate(RoomType::Single, 12);
        assert_eq!(quote.total, 12000 * 12 + 5000 + 500);
    }

    #[test]
    fn test_room_type_parsing() {
        assert_eq!(RoomType::from_str("single").unwrap(), RoomType::Single);
        assert_eq!(RoomType::from_str("triple").unwrap(), RoomType::Triple);
        assert!(RoomType::from_str("penthouse").is_err());
    }

    #[test]
    fn test_default_room_type_is_double() {
        assert_eq!(RoomType::default(), RoomType::Double);
    }
}

//! Guest-detail validation.
//!
//! The patterns match what the booking form accepts: a loose email shape,
//! phone numbers of at least ten digits with common separators, and the
//! national XXXXX-XXXXXXX-X CNIC format.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").expect("phone pattern"));

static CNIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}-[0-9]{7}-[0-9]{1}$").expect("cnic pattern"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn is_valid_cnic(cnic: &str) -> bool {
    CNIC_RE.is_match(cnic)
}

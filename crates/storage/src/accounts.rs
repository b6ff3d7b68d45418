//! Demo account registration and login.
//!
//! Accounts live as a JSON list under the `users` key and the active
//! session under `current_user`, exactly as deep as the marketing site's
//! localStorage flow goes: passwords are stored as typed and the token is
//! an opaque random string nothing verifies. Two demo accounts are always
//! accepted so the flows can be tried without registering.

use chrono::{DateTime, Utc};
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use tracing::info;

use crate::error::{Result, StorageError};
use crate::store::Store;

const USERS_KEY: &str = "users";
const SESSION_KEY: &str = "current_user";

// Same shapes the registration form checks
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").expect("phone pattern"));

/// Who an account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Warden,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => f.write_str("student"),
            Role::Warden => f.write_str("warden"),
        }
    }
}

/// A registered account, as stored in the users list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Stored as typed; this is a demo flow, not authentication
    pub password: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub verified: bool,
}

/// What the registration form submits.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub accepted_terms: bool,
}

impl RegistrationForm {
    /// Every failing check's message, in form order
    fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.password.len() < 8 {
            errors.push("Password must be at least 8 characters".to_string());
        }
        if self.password != self.confirm_password {
            errors.push("Passwords do not match".to_string());
        }
        if !EMAIL_RE.is_match(&self.email) {
            errors.push("Please enter a valid email address".to_string());
        }
        if !PHONE_RE.is_match(&self.phone) {
            errors.push("Please enter a valid phone number".to_string());
        }
        if !self.accepted_terms {
            errors.push("You must agree to the terms and conditions".to_string());
        }
        errors
    }
}

/// The logged-in state, stored under `current_user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub name: String,
    pub role: Role,
    pub token: String,
    pub logged_in_at: DateTime<Utc>,
    pub remember_me: bool,
}

/// Account operations over a store.
pub struct Accounts<'a> {
    store: &'a Store,
}

impl<'a> Accounts<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Register a new account and log it in.
    ///
    /// Validation reports every failing field; duplicate emails are
    /// rejected against the stored users list.
    pub fn register(&self, form: RegistrationForm) -> Result<Session> {
        let errors = form.validation_errors();
        if !errors.is_empty() {
            return Err(StorageError::RegistrationInvalid(errors));
        }

        let mut users = self.users()?;
        if users
            .iter()
            .any(|user| user.email.eq_ignore_ascii_case(&form.email))
        {
            return Err(StorageError::EmailTaken { email: form.email });
        }

        let account = UserAccount {
            id: generate_user_id(),
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            phone: form.phone,
            password: form.password,
            role: form.role,
            created_at: Utc::now(),
            verified: false,
        };
        users.push(account.clone());
        self.store.set(USERS_KEY, &users)?;
        info!("Registered account {} for {}", account.id, account.email);

        // Registration auto-logs-in
        self.save_session(
            account.email,
            format!("{} {}", form.first_name, form.last_name),
            account.role,
            false,
        )
    }

    /// Log in with email and password.
    ///
    /// Registered accounts are checked first, then the built-in demo
    /// credentials (`student@test.com` / `warden@test.com`, password
    /// `password123`).
    pub fn login(&self, email: &str, password: &str, remember_me: bool) -> Result<Session> {
        let users = self.users()?;
        if let Some(user) = users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))
        {
            if user.password == password {
                let name = format!("{} {}", user.first_name, user.last_name);
                return self.save_session(user.email.clone(), name, user.role, remember_me);
            }
            return Err(StorageError::InvalidCredentials);
        }

        for (demo_email, demo_name, demo_role) in [
            ("student@test.com", "Ahmed Khan", Role::Student),
            ("warden@test.com", "Mr. Warden", Role::Warden),
        ] {
            if email.eq_ignore_ascii_case(demo_email) && password == "password123" {
                return self.save_session(
                    demo_email.to_string(),
                    demo_name.to_string(),
                    demo_role,
                    remember_me,
                );
            }
        }

        Err(StorageError::InvalidCredentials)
    }

    /// The active session, if someone is logged in
    pub fn current(&self) -> Result<Option<Session>> {
        self.store.get(SESSION_KEY)
    }

    /// Clear the active session
    pub fn logout(&self) -> Result<()> {
        self.store.remove(SESSION_KEY)
    }

    fn users(&self) -> Result<Vec<UserAccount>> {
        Ok(self.store.get(USERS_KEY)?.unwrap_or_default())
    }

    fn save_session(
        &self,
        email: String,
        name: String,
        role: Role,
        remember_me: bool,
    ) -> Result<Session> {
        let session = Session {
            email,
            name,
            role,
            token: generate_token(),
            logged_in_at: Utc::now(),
            remember_me,
        };
        self.store.set(SESSION_KEY, &session)?;
        info!("Session opened for {}", session.email);
        Ok(session)
    }
}

const UPPER_ALNUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const LOWER_ALNUM: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// "USR", the last six digits of the unix millisecond clock, and three
/// random uppercase alphanumerics.
fn generate_user_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let digits = (millis.rem_euclid(1_000_000)) as u32;
    let mut rng = rand::rng();
    let suffix: String = (0..3)
        .map(|_| UPPER_ALNUM[rng.random_range(0..UPPER_ALNUM.len())] as char)
        .collect();
    format!("USR{digits:06}{suffix}")
}

/// Opaque demo token; nothing ever verifies it
fn generate_token() -> String {
    let mut rng = rand::rng();
    let body: String = (0..24)
        .map(|_| LOWER_ALNUM[rng.random_range(0..LOWER_ALNUM.len())] as char)
        .collect();
    format!("tok_{body}")
}

//! Advisory format checks and required-field checks for the profile.
//!
//! # Responsibility
//! - Produce ordered, human-readable format warnings for contact fields.
//! - Produce field-keyed errors that block profile submission.
//!
//! # Invariants
//! - Warnings never block state mutation or navigation.
//! - Warning order is fixed: email, phone, postal code.
//! - Digit classes are ASCII-only (`[0-9]`), not Unicode `\d`.

use crate::model::profile::{Profile, ProfileField};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\-()+\s]+$").expect("valid phone regex"));
static POSTAL_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}-?[0-9]{4}$").expect("valid postal code regex"));
static POSTAL_CODE_SCAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{3}-?[0-9]{4}").expect("valid postal code scan regex"));

const MIN_PHONE_CHARS: usize = 10;

/// Message attached to a blank `name` on submit.
pub const NAME_REQUIRED_MESSAGE: &str = "氏名は必須です";

/// Field-keyed blocking errors for profile submission.
pub type FieldErrors = BTreeMap<ProfileField, String>;

/// Contact fields inspected by `validation_warnings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactFields<'a> {
    pub email: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
}

impl<'a> From<&'a Profile> for ContactFields<'a> {
    fn from(profile: &'a Profile) -> Self {
        Self {
            email: profile.email.as_str(),
            phone: profile.phone.as_str(),
            address: profile.address.as_str(),
        }
    }
}

/// One advisory format warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationWarning {
    Email,
    Phone,
    PostalCode,
}

impl ValidationWarning {
    pub fn message(self) -> &'static str {
        match self {
            Self::Email => "メールアドレスの形式をご確認ください",
            Self::Phone => "電話番号の形式をご確認ください",
            Self::PostalCode => "郵便番号の形式をご確認ください",
        }
    }
}

impl Display for ValidationWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Digits, `-`, `(`, `)`, `+` and whitespace, at least 10 characters.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone) && phone.chars().count() >= MIN_PHONE_CHARS
}

/// `123-4567` or `1234567`.
pub fn is_valid_postal_code(postal_code: &str) -> bool {
    POSTAL_CODE_RE.is_match(postal_code)
}

/// Returns format warnings for the given contact fields.
///
/// Blank email/phone are not warned about. The postal code check looks at
/// the first postal-code-shaped substring of the address; since the scan and
/// the validity pattern accept the same shapes, it only fires if they drift.
pub fn validation_warnings(fields: ContactFields<'_>) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if !fields.email.is_empty() && !is_valid_email(fields.email) {
        warnings.push(ValidationWarning::Email);
    }

    if !fields.phone.is_empty() && !is_valid_phone(fields.phone) {
        warnings.push(ValidationWarning::Phone);
    }

    if let Some(found) = POSTAL_CODE_SCAN_RE.find(fields.address) {
        if !is_valid_postal_code(found.as_str()) {
            warnings.push(ValidationWarning::PostalCode);
        }
    }

    warnings
}

/// Same as `validation_warnings`, rendered as display strings.
pub fn warning_messages(fields: ContactFields<'_>) -> Vec<String> {
    validation_warnings(fields)
        .into_iter()
        .map(|warning| warning.message().to_string())
        .collect()
}

/// Blocking errors for profile submission. Only `name` is required.
pub fn required_field_errors(profile: &Profile) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if profile.name.trim().is_empty() {
        errors.insert(ProfileField::Name, NAME_REQUIRED_MESSAGE.to_string());
    }
    errors
}

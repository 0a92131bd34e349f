//! User profile and checkout form types.

use serde::{Deserialize, Serialize};

/// The "logged-in" profile held by the session store.
///
/// This is a mock session record, not a security credential: no password is
/// ever stored, and the only validation anywhere is "required fields are
/// non-empty at submission time".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl UserProfile {
    /// Placeholder display name used when logging in without a registration.
    pub const PLACEHOLDER_NAME: &'static str = "Пользователь";
    /// Placeholder phone used when logging in without a registration.
    pub const PLACEHOLDER_PHONE: &'static str = "+7 999 999-99-99";
}

/// Checkout form filled in by the shell.
///
/// `comment` is the one optional field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OrderForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub comment: String,
}

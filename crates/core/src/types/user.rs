//! User account type.

use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::UserId;

/// A logged-in shopper.
///
/// Created by the (simulated) auth service on login or registration, held in
/// client-side storage, and destroyed on logout. There is no server-side
/// account record behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Validated email address.
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Derived avatar URL, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

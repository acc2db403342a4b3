//! Wire DTOs for the account backend.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON and numeric user IDs. IDs are carried as
//! strings on the client so they round-trip through localStorage and route
//! params unchanged. Passwords are write-only: they serialize on requests but
//! are never read back from responses.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// ROLE
// =============================================================================

/// Account role as reported by the backend.
///
/// Unknown role strings are preserved in `Other` so newer backend roles still
/// display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Customer,
    WarehouseSupervisor,
    SalesClerk,
    Other(String),
}

impl Role {
    /// Roles offered on the registration form, in display order.
    pub const SELECTABLE: [Role; 4] = [Role::Admin, Role::Customer, Role::WarehouseSupervisor, Role::SalesClerk];

    /// Parse a role name, ignoring surrounding whitespace and case.
    /// Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "" => None,
            "ADMIN" => Some(Self::Admin),
            "CUSTOMER" => Some(Self::Customer),
            "WAREHOUSE_SUPERVISOR" => Some(Self::WarehouseSupervisor),
            "SALES_CLERK" => Some(Self::SalesClerk),
            _ => Some(Self::Other(normalized)),
        }
    }

    /// Extract the role from a login `roleMessage` such as `"Role: admin"`.
    /// The role is the text after the first `:`.
    pub fn from_role_message(message: &str) -> Option<Self> {
        let (_, rest) = message.split_once(':')?;
        Self::parse(rest.split(':').next().unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "ADMIN",
            Self::Customer => "CUSTOMER",
            Self::WarehouseSupervisor => "WAREHOUSE_SUPERVISOR",
            Self::SalesClerk => "SALES_CLERK",
            Self::Other(name) => name,
        }
    }

    /// Human label for form options.
    pub fn label(&self) -> &str {
        match self {
            Self::Admin => "Admin",
            Self::Customer => "Customer",
            Self::WarehouseSupervisor => "Warehouse Supervisor",
            Self::SalesClerk => "Sales Clerk",
            Self::Other(name) => name,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Self::parse(&raw).unwrap_or(Self::Other(raw))
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

// =============================================================================
// USER RECORD
// =============================================================================

/// A user account as returned by `/users` endpoints and sent on registration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /auth/login` response body. Every field is optional because the
/// backend reuses this shape for failures.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub role_message: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /auth/forgotLogin` request body. Blank optional fields are omitted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForgotLoginRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Profile edit payload for `PATCH /users/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub username: String,
    pub email: String,
    pub home_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Response to a profile update. A new `token` is issued when the username
/// changes.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UpdateResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{ "message": ... }` body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// ID HELPERS
// =============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Number(i64),
    Text(String),
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<IdRepr>::deserialize(deserializer)?.map(|id| match id {
        IdRepr::Number(n) => n.to_string(),
        IdRepr::Text(s) => s,
    }))
}

//! Shared wire and storage records for the auth boundary.
//!
//! DESIGN
//! ======
//! The same types are used by the browser client, the persisted session
//! entries, and the server's credential endpoints, so serde round-trips stay
//! lossless across all three. Input records validate at construction and at
//! deserialization; a value of these types is always well formed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account role. Closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    IntendedParent,
    Surrogate,
    Admin,
}

impl Role {
    /// Roles offered by the public signup form.
    pub const SELF_SERVICE: [Role; 2] = [Role::IntendedParent, Role::Surrogate];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IntendedParent => "intended_parent",
            Self::Surrogate => "surrogate",
            Self::Admin => "admin",
        }
    }

    /// Whether the role may be chosen at signup.
    #[must_use]
    pub fn is_self_service(self) -> bool {
        Self::SELF_SERVICE.contains(&self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "intended_parent" => Ok(Self::IntendedParent),
            "surrogate" => Ok(Self::Surrogate),
            "admin" => Ok(Self::Admin),
            other => Err(FormError::UnknownRole(other.to_owned())),
        }
    }
}

/// An authenticated principal.
///
/// Serialized in camelCase; this is also the shape of the persisted `user`
/// entry in browser storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub is_authenticated: bool,
}

/// Token plus user, as issued by the credential service and persisted by the
/// session store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub token: String,
    pub user: User,
}

/// Error body returned by the credential endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Reason a login or signup form value was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("role {0} cannot be chosen at signup")]
    RoleNotSelfService(Role),
}

fn required(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(())
}

/// Email + password pair submitted to `login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CredentialsWire")]
pub struct Credentials {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct CredentialsWire {
    email: String,
    password: String,
}

impl TryFrom<CredentialsWire> for Credentials {
    type Error = FormError;

    fn try_from(wire: CredentialsWire) -> Result<Self, Self::Error> {
        Self::new(&wire.email, &wire.password)
    }
}

impl Credentials {
    /// Build credentials; the email is trimmed, the password kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns `FormError::MissingField` when either value is blank.
    pub fn new(email: &str, password: &str) -> Result<Self, FormError> {
        required("email", email)?;
        required("password", password)?;
        Ok(Self { email: email.trim().to_owned(), password: password.to_owned() })
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration payload submitted to `signup`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SignupWire")]
pub struct SignupData {
    name: String,
    email: String,
    password: String,
    role: Role,
}

#[derive(Deserialize)]
struct SignupWire {
    name: String,
    email: String,
    password: String,
    role: Role,
}

impl TryFrom<SignupWire> for SignupData {
    type Error = FormError;

    fn try_from(wire: SignupWire) -> Result<Self, Self::Error> {
        Self::new(&wire.name, &wire.email, &wire.password, wire.role)
    }
}

impl SignupData {
    /// Build a signup payload.
    ///
    /// # Errors
    ///
    /// Returns `FormError::MissingField` for blank values and
    /// `FormError::RoleNotSelfService` for roles that cannot self-register.
    pub fn new(name: &str, email: &str, password: &str, role: Role) -> Result<Self, FormError> {
        required("name", name)?;
        required("email", email)?;
        required("password", password)?;
        if !role.is_self_service() {
            return Err(FormError::RoleNotSelfService(role));
        }
        Ok(Self {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            password: password.to_owned(),
            role,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }
}

impl fmt::Debug for SignupData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupData")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

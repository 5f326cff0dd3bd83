use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::entity::employee::{NAME_MAX_LEN, PHONE_MAX_LEN};
use crate::error::ValidationError;

pub use crate::entity::employee::Model as Employee;

/// One entry of the seed catalog. Ids are assigned by the database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmployeeSeed {
    pub name: &'static str,
    pub phone: &'static str,
    pub is_admin: bool,
}

impl EmployeeSeed {
    pub const fn new(name: &'static str, phone: &'static str, is_admin: bool) -> Self {
        EmployeeSeed { name, phone, is_admin }
    }
}

impl Display for EmployeeSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.phone)
    }
}

/// Body of a "create employee" request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewEmployee {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    /// Defaults to `false` when omitted.
    #[serde(default)]
    pub is_admin: Option<bool>,
}

impl NewEmployee {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, is_admin: bool) -> Self {
        NewEmployee {
            name: name.into(),
            phone: phone.into(),
            is_admin: Some(is_admin),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin.unwrap_or(false)
    }

    /// Applies the same rules the `employees` table enforces, so bad input is
    /// rejected before a round trip.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_field("name", &self.name, NAME_MAX_LEN)?;
        check_field("phone", &self.phone, PHONE_MAX_LEN)
    }
}

fn check_field(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();

    if value.trim().is_empty() {
        return Err(ValidationError::Missing { field });
    }

    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }

    Ok(())
}

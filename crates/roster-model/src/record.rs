//! The roster record and its editable fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ModelError, RecordId};

/// One person on the roster.
///
/// Only `name`, `email` and `role` are editable. None of them carry a format
/// constraint: any string, including the empty string, is a valid value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Record {
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Value of one editable field.
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::Name => &self.name,
            RecordField::Email => &self.email,
            RecordField::Role => &self.role,
        }
    }

    pub fn set_field(&mut self, field: RecordField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RecordField::Name => self.name = value,
            RecordField::Email => self.email = value,
            RecordField::Role => self.role = value,
        }
    }

    /// Copy the editable fields of `other` onto `self`, keeping `self.id`.
    pub fn apply_fields_from(&mut self, other: &Record) {
        self.name.clone_from(&other.name);
        self.email.clone_from(&other.email);
        self.role.clone_from(&other.role);
    }
}

/// An editable record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordField {
    Name,
    Email,
    Role,
}

impl RecordField {
    pub const ALL: [RecordField; 3] = [Self::Name, Self::Email, Self::Role];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RecordField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "role" => Ok(Self::Role),
            _ => Err(ModelError::UnknownField(s.to_string())),
        }
    }
}

//! Student records
//!
//! Students exist only inside the request that names them; they are
//! created when a row is added in the form and dropped with it.

use serde::{Deserialize, Serialize};

/// A student named on a single-mode request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Student {
    /// Session-local identity, assigned by the input layer
    #[serde(default)]
    pub id: u32,
    /// First name, may be blank
    #[serde(default)]
    pub first_name: String,
    /// Last name, may be blank
    #[serde(default)]
    pub last_name: String,
    /// Street and house number
    #[serde(default)]
    pub street: Option<String>,
    /// Postal code
    #[serde(default)]
    pub zip: Option<String>,
    /// City
    #[serde(default)]
    pub city: Option<String>,
}

impl Student {
    /// Create a student with just a name
    pub fn named(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    /// Add an address to the student
    pub fn with_address(
        mut self,
        street: impl Into<String>,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        self.street = Some(street.into());
        self.zip = Some(zip.into());
        self.city = Some(city.into());
        self
    }

    /// True when every field is blank
    ///
    /// Fully-empty students are skipped when the document header is
    /// drawn.
    pub fn is_blank(&self) -> bool {
        self.first_name.trim().is_empty()
            && self.last_name.trim().is_empty()
            && self.street.as_deref().unwrap_or("").trim().is_empty()
            && self.zip.as_deref().unwrap_or("").trim().is_empty()
            && self.city.as_deref().unwrap_or("").trim().is_empty()
    }
}

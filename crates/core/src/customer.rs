//! Customer records and their partial-update patch.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A registered customer. `customer_id` is the unique collection key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(
        customer_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Email: {}",
            self.customer_id, self.name, self.email
        )
    }
}

/// Field-level patch applied by the customer repository's modify operation.
///
/// `None` leaves a field unchanged; `Some(value)` always applies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CustomerPatch {
    pub fn apply(&self, customer: &mut Customer) {
        if let Some(name) = &self.name {
            customer.name = name.clone();
        }
        if let Some(email) = &self.email {
            customer.email = email.clone();
        }
    }
}

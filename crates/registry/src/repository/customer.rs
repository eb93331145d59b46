//! Customer collection repository.

use std::path::Path;

use frontdesk_core::{Customer, CustomerPatch};

use crate::error::Result;
use crate::repository::{CollectionRepository, Record};

pub(crate) const CUSTOMERS_FILE: &str = "customers.json";

impl Record for Customer {
    const KIND: &'static str = "customer";

    fn key(&self) -> &str {
        &self.customer_id
    }
}

/// Typed view over the customer collection.
pub struct CustomerRepository {
    inner: CollectionRepository<Customer>,
}

impl CustomerRepository {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            inner: CollectionRepository::new(base_dir, CUSTOMERS_FILE),
        }
    }

    pub fn create(
        &self,
        customer_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Customer> {
        self.inner.create(Customer::new(customer_id, name, email))
    }

    pub fn find(&self, customer_id: &str) -> Option<Customer> {
        self.inner.find(customer_id)
    }

    pub fn display(&self, customer_id: &str) -> Option<String> {
        self.inner.display(customer_id)
    }

    /// Apply the supplied fields to the matching customer. Returns whether
    /// the customer existed.
    pub fn modify(&self, customer_id: &str, patch: &CustomerPatch) -> bool {
        self.inner.update(customer_id, |customer| patch.apply(customer))
    }

    pub fn delete(&self, customer_id: &str) -> bool {
        self.inner.delete(customer_id)
    }
}

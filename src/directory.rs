//! Customer directory keyed by phone number

use crate::error::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, PosResult, ValidationError, require_phone, require_text,
};
use crate::ids;
use crate::models::Customer;
use crate::store::RecordStore;

/// Customer records with phone as the natural key
///
/// At most one record per phone value; records are never deleted. Name
/// and address always reflect the most recent order (last write wins, no
/// history).
#[derive(Clone)]
pub struct CustomerDirectory {
    store: RecordStore,
}

impl CustomerDirectory {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// All customers, stored order
    pub fn list(&self) -> Vec<Customer> {
        self.store.read()
    }

    /// Exact-match lookup by phone
    pub fn find_by_phone(&self, phone: &str) -> Option<Customer> {
        self.list().into_iter().find(|c| c.phone == phone)
    }

    /// Resolve the customer record for an order
    ///
    /// Name and address are trimmed before compare and store. A hit with
    /// identical values returns the stored record without writing; a hit
    /// with differing values overwrites name and address in place; a
    /// miss appends a new record. This is the only mutation path for
    /// customers.
    pub fn find_or_create_or_update(
        &self,
        name: &str,
        phone: &str,
        address: &str,
    ) -> PosResult<Customer> {
        let mut errors = ValidationError::new();
        require_text(name, "name", MAX_NAME_LEN, &mut errors);
        require_phone(phone, &mut errors);
        if address.len() > MAX_ADDRESS_LEN {
            errors.add(
                "address",
                format!("address is too long ({} chars, max {MAX_ADDRESS_LEN})", address.len()),
            );
        }
        errors.into_result()?;

        let name = name.trim();
        let address = address.trim();

        let mut customers = self.list();
        if let Some(pos) = customers.iter().position(|c| c.phone == phone) {
            if customers[pos].name == name && customers[pos].address == address {
                return Ok(customers[pos].clone());
            }

            customers[pos].name = name.to_string();
            customers[pos].address = address.to_string();
            let updated = customers[pos].clone();
            self.store.write(&customers)?;

            tracing::debug!(customer_id = %updated.id, phone = %updated.phone, "Customer details updated");
            return Ok(updated);
        }

        let customer = Customer {
            id: ids::new_record_id(),
            name: name.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        };
        customers.push(customer.clone());
        self.store.write(&customers)?;

        tracing::debug!(customer_id = %customer.id, phone = %customer.phone, "Customer created");
        Ok(customer)
    }
}

//! Factory functions for generating mock bank service models.
//!
//! These build in-memory model instances without touching the store.

use entity::bank_service::Model as BankServiceModel;

/// Create a mock bank service model for testing.
///
/// The returned model has no identifier, as it has not been inserted yet.
///
/// # Arguments
/// - `name` - Business key of the bank service
///
/// # Returns
/// - `BankServiceModel` - A bank service with standard test values
pub fn mock_bank(name: &str) -> BankServiceModel {
    BankServiceModel {
        id: None,
        name: name.to_string(),
        details: format!("{} test details", name),
        number_of_users: 100,
        status: "active".to_string(),
        service_type: "savings".to_string(),
        icon: "bank.png".to_string(),
    }
}

/// Name of the `index`th generated bank, zero padded so names sort in insertion order.
pub fn mock_bank_name(index: usize) -> String {
    format!("Bank {:02}", index)
}

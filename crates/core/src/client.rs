//! The client entity.

use crate::account::AccountType;

/// A client of the service.
///
/// Request-scoped: decoded fresh from each request body, never persisted and
/// never re-serialized. Carries no identity key for that reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    name: String,
    age: u8,
    account_type: AccountType,
    salary: f64,
}

impl Client {
    pub fn new(name: String, age: u8, account_type: AccountType, salary: f64) -> Self {
        Self {
            name,
            age,
            account_type,
            salary,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn getters_expose_constructed_values() {
        let client = Client::new("Ana".to_string(), 30, AccountType::Premium, 5000.0);
        assert_eq!(client.name(), "Ana");
        assert_eq!(client.age(), 30);
        assert_eq!(client.account_type(), AccountType::Premium);
        assert_eq!(client.salary(), 5000.0);
    }
}

use super::car::Car;
use super::customer::Customer;
use serde::Serialize;

/// The record of a completed rental: who rented which car, until when, for how
/// much. Two transactions are equal when all four fields are equal.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub customer: Customer,
    pub car: Car,
    pub due_date: String,
    pub amount: String,
}

impl Transaction {
    pub fn new(customer: Customer, car: Car, due_date: String, amount: String) -> Self {
        Self {
            customer,
            car,
            due_date,
            amount,
        }
    }
}

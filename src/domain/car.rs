use super::ports::Record;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A physical unit that can be rented.
///
/// The engine never inspects or modifies a `Car`; it hands back exactly what the
/// inventory lookup resolved.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: String,
    pub name: String,
    pub release_year: u16,
    pub available: bool,
    pub gas_available: bool,
}

impl Record for Car {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A class of cars sharing a daily rate and a pool of candidate units.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CarCategory {
    pub id: String,
    pub name: String,
    /// Base daily rate.
    pub price: Decimal,
    /// Identifiers of the cars that may be handed out for this category.
    pub car_ids: Vec<String>,
}

impl Record for CarCategory {
    fn id(&self) -> &str {
        &self.id
    }
}

use super::ports::Record;
use serde::{Deserialize, Serialize};

/// A person renting a car. The age drives the tax bracket lookup.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub age: u32,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }
}

impl Record for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}

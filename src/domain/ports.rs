use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Anything that can be looked up by a string identifier.
pub trait Record {
    fn id(&self) -> &str;
}

/// Inventory lookup by identifier.
///
/// Implementations report an unknown id as `RentalError::NotFound` and an
/// unreadable or malformed backing store as `IoError`/`MalformedData`.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    async fn find(&self, id: &str) -> Result<T>;
    async fn find_all(&self) -> Result<Vec<T>>;
}

/// Source of uniformly distributed indices.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..upper`. Callers guarantee `upper > 0`.
    fn next_index(&self, upper: usize) -> usize;
}

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Renders a monetary amount for display.
pub trait CurrencyFormatter: Send + Sync {
    fn format(&self, amount: Decimal) -> String;
}

pub type RepositoryBox<T> = Box<dyn Repository<T>>;
pub type RandomSourceBox = Box<dyn RandomSource>;
pub type ClockBox = Box<dyn Clock>;
pub type CurrencyFormatterBox = Box<dyn CurrencyFormatter>;

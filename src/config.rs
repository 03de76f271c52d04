//! Process-wide rental settings: the tax schedule and the display formats.
//!
//! Settings are read from a JSON file; every field is optional and falls back
//! to its default. Validation happens while deserializing, so a loaded
//! `RentalConfig` always holds a well-formed schedule and date pattern.
//!
//! ```json
//! {
//!   "taxSchedule": [
//!     { "from": 18, "to": 25, "multiplier": "1.1" },
//!     { "from": 26, "to": 30, "multiplier": "1.5" },
//!     { "from": 31, "to": 100, "multiplier": "1.3" }
//!   ],
//!   "currency": { "symbol": "$", "decimalSeparator": ".", "groupSeparator": "," },
//!   "dateFormat": "%B %-d, %Y"
//! }
//! ```

use crate::application::engine::RentalEngine;
use crate::domain::calendar::DateFormat;
use crate::domain::car::Car;
use crate::domain::money::CurrencyFormat;
use crate::domain::ports::RepositoryBox;
use crate::domain::tax::TaxSchedule;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct RentalConfig {
    pub tax_schedule: TaxSchedule,
    pub currency: CurrencyFormat,
    pub date_format: DateFormat,
}

impl RentalConfig {
    /// Reads and validates a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        debug!(
            path = %path.as_ref().display(),
            brackets = config.tax_schedule.brackets().len(),
            "Loaded rental configuration"
        );
        Ok(config)
    }

    /// Builds an engine over `cars` using these settings.
    pub fn into_engine(self, cars: RepositoryBox<Car>) -> RentalEngine {
        RentalEngine::new(cars, self.tax_schedule)
            .with_currency_formatter(Box::new(self.currency))
            .with_date_format(self.date_format)
    }
}

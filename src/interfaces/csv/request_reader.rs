use crate::error::{RentalError, Result};
use serde::Deserialize;
use std::io::Read;

/// One line of a rental request file: who rents which category for how long.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct RentalRequest {
    pub customer: String,
    pub category: String,
    pub days: i64,
}

/// Reads rental requests from a CSV source with a `customer,category,days`
/// header.
///
/// Whitespace around fields is trimmed and records of unexpected length are
/// surfaced per row rather than aborting the whole file.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<RentalRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(RentalError::from))
    }
}

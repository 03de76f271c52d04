//! Application layer containing the rental orchestration.
//!
//! This module defines the `RentalEngine`, the entry point for choosing a car,
//! pricing a rental and producing its `Transaction`.

pub mod engine;

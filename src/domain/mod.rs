//! Domain layer: entities, value objects and the ports the engine depends on.
//!
//! Nothing in here performs I/O. Adapters for the ports live in
//! `crate::infrastructure`.

pub mod calendar;
pub mod car;
pub mod customer;
pub mod money;
pub mod ports;
pub mod selection;
pub mod tax;
pub mod transaction;

//! SeaORM entity models for the SUN UP bot database.
//!
//! One module per table, plus a `prelude` re-exporting each table's `Entity`
//! under its table name.

pub mod prelude;

pub mod points;
pub mod setting;

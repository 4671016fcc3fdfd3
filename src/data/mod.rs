//! Database repository layer.
//!
//! Repository structs hold a borrowed database connection and perform a single SQL
//! statement per operation. They use SeaORM entity models internally and return domain
//! models from `crate::model`, so no entity type leaks into the service layer.

pub mod points;
pub mod setting;

#[cfg(test)]
mod test;

//! Domain models shared between the data, service and bot layers.
//!
//! Models here are plain data: repositories convert SeaORM entities into them at the
//! database boundary, and the bot layer converts Serenity events into them at the
//! Discord boundary, so services never see either library's types.

pub mod drop;
pub mod points;
pub mod reaction;

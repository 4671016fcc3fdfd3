//! Background scheduling of drop events.
//!
//! - `window` - Time-of-day window, wait range and clock abstractions
//! - `drops` - The armed/idle drop scheduler and its cron job

pub mod drops;
pub mod window;

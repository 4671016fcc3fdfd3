//! Bot services.
//!
//! Services hold the bot's behavior and talk to Discord only through
//! [`crate::gateway::Gateway`], so every one of them can be exercised against an
//! in-memory database and a recording gateway.

pub mod diagnostics;
pub mod drop;
pub mod leaderboard;
pub mod participation;
pub mod reaction;

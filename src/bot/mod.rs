//! Discord gateway client for the SUN UP drop bot.
//!
//! The bot listens for reactions and text commands in the configured guild. Outbound
//! calls (posting drops, granting roles) go through the shared [`crate::gateway::Gateway`]
//! held in the bot state, so the scheduler can post drops without access to the
//! gateway client itself.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel data for the cache
//! - `GUILD_MEMBERS` - Member data attached to reactions (privileged intent)
//! - `GUILD_MESSAGES` - Text commands
//! - `GUILD_MESSAGE_REACTIONS` - Drop claims and join/leave reactions
//! - `MESSAGE_CONTENT` - Reading command text (privileged intent)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer
//! Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;

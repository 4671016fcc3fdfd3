//! Factory methods for creating test data.
//!
//! Each table has a factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let points = factory::points::PointsFactory::new(&db).score(12).build().await?;
//! let setting = factory::create_setting(&db, "join_message_id", "42").await?;
//! ```

pub mod helpers;
pub mod points;
pub mod setting;

pub use points::create_points;
pub use setting::create_setting;

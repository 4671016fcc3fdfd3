//! Drop outcome selection.
//!
//! A drop is first rolled against the super-drop probability; only when that
//! roll misses is the regular pool consulted, using a weighted categorical pick.

use rand::{
    distr::{weighted::WeightedIndex, Distribution},
    Rng,
};

use crate::{
    error::config::ConfigError,
    model::drop::{DropKind, DropOutcome, SuperDrop},
};

/// Picks drop outcomes from a validated regular pool and super-drop definition.
///
/// The weighted index is built once at construction, so picking never fails.
#[derive(Debug, Clone)]
pub struct DropSelector {
    pool: Vec<DropKind>,
    index: WeightedIndex<u32>,
    super_drop: SuperDrop,
}

impl DropSelector {
    /// Creates a selector after validating the pool and super-drop settings.
    ///
    /// # Arguments
    /// - `pool` - Regular drop kinds with their selection weights
    /// - `super_drop` - Super drop probability and payout
    ///
    /// # Returns
    /// - `Ok(DropSelector)` - Selector ready to pick outcomes
    /// - `Err(ConfigError::InvalidDropSettings)` - Empty pool, zero total weight,
    ///   non-positive points or a probability outside `[0, 1]`
    pub fn new(pool: Vec<DropKind>, super_drop: SuperDrop) -> Result<Self, ConfigError> {
        if let Some(kind) = pool.iter().find(|kind| kind.points <= 0) {
            return Err(ConfigError::InvalidDropSettings(format!(
                "drop {} must award a positive number of points",
                kind.emoji
            )));
        }

        if !(0.0..=1.0).contains(&super_drop.chance) {
            return Err(ConfigError::InvalidDropSettings(format!(
                "super drop chance {} is outside [0, 1]",
                super_drop.chance
            )));
        }

        if super_drop.points <= 0 {
            return Err(ConfigError::InvalidDropSettings(
                "super drop must award a positive number of points".to_string(),
            ));
        }

        let index = WeightedIndex::new(pool.iter().map(|kind| kind.weight))
            .map_err(|e| ConfigError::InvalidDropSettings(format!("regular pool: {}", e)))?;

        Ok(Self {
            pool,
            index,
            super_drop,
        })
    }

    /// Picks the outcome of the next drop.
    ///
    /// # Arguments
    /// - `rng` - Random source; `rand::rng()` in production, seeded in tests
    ///
    /// # Returns
    /// - `DropOutcome` - The super drop with probability `super_drop.chance`,
    ///   otherwise a weighted pick from the regular pool
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> DropOutcome {
        if rng.random::<f64>() < self.super_drop.chance {
            return DropOutcome {
                emoji: self.super_drop.emoji.clone(),
                points: self.super_drop.points,
                is_super: true,
            };
        }

        self.pick_regular(rng)
    }

    /// Picks from the regular pool only, skipping the super-drop roll.
    pub fn pick_regular<R: Rng + ?Sized>(&self, rng: &mut R) -> DropOutcome {
        let kind = &self.pool[self.index.sample(rng)];

        DropOutcome {
            emoji: kind.emoji.clone(),
            points: kind.points,
            is_super: false,
        }
    }

    pub fn pool(&self) -> &[DropKind] {
        &self.pool
    }

    pub fn super_drop(&self) -> &SuperDrop {
        &self.super_drop
    }
}

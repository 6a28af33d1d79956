//! Core library for normalizing Hero Smith ability and complication data.

pub mod abilities;
pub mod characteristics;
pub mod complications;
pub mod config;
pub mod costs;
pub mod error;
pub mod file_utils;
pub mod legacy;
pub mod models;
pub mod power_roll;
pub mod processors;
pub mod range;
pub mod tiers;

pub use abilities::{rewrite_abilities, rewrite_ability, RewriteSummary};
pub use complications::{simplify_complication, simplify_complications, split_description};
pub use error::{HeroSmithError, Result};

//! Game entities module.
//!
//! This module organizes the enemy agents and projectile flights, each of
//! which runs as its own task against the shared session.

pub mod enemy;
pub mod projectile;

pub use enemy::*;
pub use projectile::*;

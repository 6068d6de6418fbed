//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the booking service. Entities are plain data structures without
//! business logic beyond field validation.
//!
//! # Entity Types
//!
//! - [`Planet`] - A destination planet
//! - [`Scientist`] - A scientist bookable onto missions
//! - [`Mission`] - The join entity linking one planet and one scientist
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewPlanet`, `NewScientist`, `NewMission`. Joined composites
//! ([`PlanetWithMissions`], [`ScientistWithMissions`], [`MissionDetail`])
//! carry an entity together with its related rows for serialization.

pub mod mission;
pub mod planet;
pub mod scientist;

pub use mission::{Mission, MissionDetail, NewMission};
pub use planet::{NewPlanet, Planet, PlanetWithMissions};
pub use scientist::{NewScientist, Scientist, ScientistWithMissions};

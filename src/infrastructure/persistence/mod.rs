//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-checked queries and `FromRow` row mapping.
//!
//! # Repositories
//!
//! - [`SqlitePlanetRepository`] - Planet storage and retrieval
//! - [`SqliteScientistRepository`] - Scientist storage and retrieval
//! - [`SqliteMissionRepository`] - Mission booking and join projections

pub mod sqlite_mission_repository;
pub mod sqlite_planet_repository;
pub mod sqlite_scientist_repository;

pub use sqlite_mission_repository::SqliteMissionRepository;
pub use sqlite_planet_repository::SqlitePlanetRepository;
pub use sqlite_scientist_repository::SqliteScientistRepository;

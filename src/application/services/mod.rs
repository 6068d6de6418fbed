//! Business logic services for the application layer.

pub mod mission_service;
pub mod planet_service;
pub mod scientist_service;

pub use mission_service::MissionService;
pub use planet_service::PlanetService;
pub use scientist_service::ScientistService;

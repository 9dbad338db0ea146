//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod alert_repo;
pub mod location_repo;
pub mod map_element_repo;
pub mod person_repo;
pub mod resource_repo;
pub mod route_repo;
pub mod session_repo;
pub mod stats_repo;
pub mod user_repo;

pub use alert_repo::AlertRepo;
pub use location_repo::LocationRepo;
pub use map_element_repo::MapElementRepo;
pub use person_repo::PersonRepo;
pub use resource_repo::ResourceRepo;
pub use route_repo::EvacuationRouteRepo;
pub use session_repo::SessionRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;

//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO carrying already-normalized values for inserts
//! - An update DTO (all `Option` fields) for partial updates
//!
//! Row structs serialize with camelCase keys and export TypeScript bindings
//! for the front end.

pub mod alert;
pub mod location;
pub mod map_element;
pub mod person;
pub mod resource;
pub mod route;
pub mod session;
pub mod stats;
pub mod user;

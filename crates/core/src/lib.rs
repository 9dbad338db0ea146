//! Pure domain logic for Ghost Legion.
//!
//! Nothing in this crate touches the network or the database. The API and
//! client crates share these types so that the server and the map editor
//! validate input with the same rules.

pub mod alert;
pub mod error;
pub mod geo;
pub mod location;
pub mod map_editor;
pub mod map_element;
pub mod personnel;
pub mod resource;
pub mod roles;
pub mod route;
pub mod text_enum;
pub mod types;
pub mod validation;

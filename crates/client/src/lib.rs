//! Typed client for the Ghost Legion map-element API.
//!
//! [`ApiClient`] talks HTTP; [`MapSync`] keeps an [`ElementCache`] in step
//! with whatever [`MapElementBackend`] it is given, which is how the map
//! viewer and the admin editor stay consistent with the store.

pub mod api;
pub mod backend;
pub mod cache;
pub mod error;
pub mod models;

pub use api::ApiClient;
pub use backend::MapElementBackend;
pub use cache::{ElementCache, MapSync};
pub use error::ClientError;
pub use models::{MapElement, MapElementPatch};

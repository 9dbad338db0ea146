pub mod admin;
pub mod alerts;
pub mod auth;
pub mod evacuation_routes;
pub mod locations;
pub mod map_elements;
pub mod people;
pub mod resources;
pub mod stats;

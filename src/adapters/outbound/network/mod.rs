/// Network adapters for the Satellite REST API
pub mod api_models;
mod satellite_client;

pub use satellite_client::{Credentials, SatelliteClient};

//! Persistence module split across logical submodules.

mod connection;
mod departures;

pub use connection::StorageConfig;
pub use departures::Repository;

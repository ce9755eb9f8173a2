//! Domain layer for Pesca Lombardia
//!
//! Contains the fishing-activity engine: zones, species profiles, the
//! thermal water-temperature model, lunar and seasonal helpers, and the
//! activity scorer. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use services::*;
pub use value_objects::*;

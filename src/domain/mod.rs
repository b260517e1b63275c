//! Domain Layer
//!
//! Pure logic for naming and classifying ontologies, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - LoadedOntology and its graph payload
//! - `value_objects/` - Handle, HandleKind, CacheKey
//! - `services/` - Handle classification rules
//! - `ports/` - Interfaces implemented by the infrastructure layer

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

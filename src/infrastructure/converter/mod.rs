//! Converter implementations

mod external;

pub use external::ExternalConverter;

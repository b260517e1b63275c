//! Artifact loader implementations

mod obograph;

pub use obograph::ObographJsonLoader;

//! Domain Services
//!
//! Pure business logic with no I/O of its own.

pub mod classifier;

pub use classifier::{classify, classify_with, ClassificationRule, ClassifierSettings, RULES};

//! Runtime settings read from the environment.

mod settings;

pub use settings::*;

//! Book SQL: fixed statements plus the list/count builder. Values are always bound parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;

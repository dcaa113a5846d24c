//! Invoice totals and the printable tax summary built from them

pub mod summary;
pub mod totals;

pub use summary::*;
pub use totals::*;

//! GST engine: regime resolution, HSN/SAC grouping and tax computation

pub mod gst;
pub mod hsn;
pub mod regime;

pub use gst::*;
pub use hsn::*;
pub use regime::*;

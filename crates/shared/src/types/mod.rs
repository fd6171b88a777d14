//! Common types used across the application.

pub mod coerce;
pub mod id;

pub use coerce::{coerce_amount, coerce_quantity};
pub use id::*;

//! Order form editing
//!
//! Conversion between `Order` records and their form representation, the
//! validation rules the form enforces, and file-backed loading and saving
//! used by the `order-editor` terminal application.

pub mod config;
pub mod state;
pub mod storage;

//! Utility modules shared across the server.

pub mod date;
pub mod html;
pub mod mime;

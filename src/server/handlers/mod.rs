//! HTTP handlers for the server.

pub mod cart;
pub mod catalog;
pub mod discount;
pub mod receipt;

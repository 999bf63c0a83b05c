//! HTTP client for the UniFi Network controller.
//!
//! Listing walks an ordered set of endpoint strategies and stops at the first
//! usable answer; block and unblock walk an ordered set of command requests and
//! stop at the first 200/204.

mod client;
pub mod endpoints;
pub mod normalize;
mod session;

pub use client::UnifiController;

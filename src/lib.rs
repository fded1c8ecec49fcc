//! Backend for creating events and letting attendees register by email.
//!
//! The interesting part lives in [`domain`]: the temporal invariants that
//! govern when an event may be published and when its registration window
//! is open, plus the eligibility gate evaluated before every registration
//! write. [`service`] wraps those decisions in transactions; everything
//! else is HTTP and storage plumbing.

pub mod config;
pub mod domain;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod store;
pub mod utils;

//! Interest recommendation service
//!
//! Recommends three interests for a personality code by blending the most
//! frequent interest in a statistical dataset with entries from a static
//! reference catalog.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

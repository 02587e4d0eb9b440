//! Database module
//!
//! This module handles database connections and repositories. The tables are
//! owned by the web application; this service only reads them.

pub mod connection;
pub mod repositories;

pub use connection::*;

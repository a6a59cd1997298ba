//! Campus Companion Backend Library
//!
//! This library exports the core modules for the campus companion backend
//! server: authentication, record collections, and the assistant chat proxy.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

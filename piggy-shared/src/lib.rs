//! Types shared by the PiggyBank landing page: backend payloads, display
//! settings, error types and the frontend configuration.

#![forbid(unsafe_code)]

pub mod config;
pub mod models;

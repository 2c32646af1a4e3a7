//! Backend API
//!
//! HTTP client for the divergence analysis backend.

pub mod client;

pub use client::{backend_base, fetch_progress, fetch_stock_chart, fetch_stocks};

//! # Graylog API Endpoints
//!
//! Endpoint implementations for the Graylog universal search API.

pub mod logs;

//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds token-bound clients and issues requests, `error` classifies
//! failures, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;

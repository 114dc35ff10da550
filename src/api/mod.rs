//! HTTP API
//!
//! Routes for the spaces collection plus the generated OpenAPI document.

pub mod openapi;
pub mod spaces;

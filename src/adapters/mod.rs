//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `html` - Server-rendered calculator page (implements `DashboardRenderer`)
//! - `http` - Axum routes, DTOs and middleware stack

pub mod html;
pub mod http;

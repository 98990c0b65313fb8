//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Presentation Ports
//!
//! - `DashboardRenderer` - Render step fed by the evaluation handler

mod dashboard_renderer;

pub use dashboard_renderer::{DashboardRenderer, RenderError};

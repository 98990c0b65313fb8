//! Dashboard view model - what the calculator page displays.

pub mod notes;
pub mod overview;
pub mod spectrum;

pub use notes::ReferenceNotes;
pub use overview::{ControlView, DissonanceDashboard, InputAdjustment};
pub use spectrum::{ChartPoint, MarkerStyle, SpectrumChart};

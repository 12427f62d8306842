//! chart-bars: bar list and category bar chart components.
//!
//! The numeric core (`core`) turns values into proportional widths and finds
//! the category segment holding a marker. `api` builds serializable layouts
//! and backend-agnostic render frames on top of it; `render` backends draw
//! those frames.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod theme;

pub use api::{BarListChart, BarListConfig, CategoryBarChart, CategoryBarConfig};
pub use error::{ChartError, ChartResult};

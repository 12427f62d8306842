pub mod bar;
pub mod bar_widths;
pub mod category_segments;
pub mod types;

pub use bar::{Bar, BarIcon, BarLink, LinkTarget};
pub use bar_widths::{MIN_VISIBLE_WIDTH_PERCENT, widths_from_values};
pub use category_segments::{
    CategorySegment, category_prefix_sums, category_segments, locate_marker_segment,
};
pub use types::Viewport;

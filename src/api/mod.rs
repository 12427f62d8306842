mod bar_list_chart;
mod bar_list_config;
mod bar_list_layout;
mod bar_list_render_frame_builder;
mod category_bar_chart;
mod category_bar_config;
mod category_bar_layout;
mod category_bar_render_frame_builder;
mod json_contract;
mod validation;
mod value_format;

pub use bar_list_chart::{BarListChart, ThemeHandle};
pub use bar_list_config::{BarListConfig, BarListMetrics, LabelPosition};
pub use bar_list_layout::{
    BAR_TRANSITION_DURATION_MS, BarFill, BarListLayout, BarRowLayout, BarTransition,
    build_bar_list_layout,
};
pub use bar_list_render_frame_builder::{BAR_FILL_OPACITY, bar_fill_color};
pub use category_bar_chart::CategoryBarChart;
pub use category_bar_config::{CategoryBarConfig, CategoryBarMetrics};
pub use category_bar_layout::{
    CategoryBarLayout, CategoryLabelLayout, CategoryLabelsLayout, CategoryMarkerLayout,
    CategorySegmentLayout, LabelVisibility, build_category_bar_layout, segment_color,
};
pub use json_contract::{
    BAR_LIST_LAYOUT_JSON_SCHEMA_V1, BarListLayoutJsonContractV1,
    CATEGORY_BAR_LAYOUT_JSON_SCHEMA_V1, CategoryBarLayoutJsonContractV1,
};
pub use value_format::{ValueFormatterFn, default_value_formatter};

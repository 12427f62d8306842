use serde::{Deserialize, Serialize};

/// Percent-space extent of one category inside the bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategorySegment {
    pub index: usize,
    pub start_percent: f64,
    pub width_percent: f64,
    pub end_percent: f64,
}

/// Inclusive running totals over `categories`.
#[must_use]
pub fn category_prefix_sums(categories: &[f64]) -> Vec<f64> {
    categories
        .iter()
        .scan(0.0, |prefix_sum, width| {
            *prefix_sum += width;
            Some(*prefix_sum)
        })
        .collect()
}

/// Lays categories end to end starting at 0.
#[must_use]
pub fn category_segments(categories: &[f64]) -> Vec<CategorySegment> {
    let mut start = 0.0;
    categories
        .iter()
        .enumerate()
        .map(|(index, &width_percent)| {
            let end_percent = start + width_percent;
            let segment = CategorySegment {
                index,
                start_percent: start,
                width_percent,
                end_percent,
            };
            start = end_percent;
            segment
        })
        .collect()
}

/// Finds the category that contains `target`.
///
/// Returns the index of the first category whose inclusive prefix sum is
/// `>= target`. Returns `None` when no target is given or when the categories
/// never add up to it.
#[must_use]
pub fn locate_marker_segment(categories: &[f64], target: Option<f64>) -> Option<usize> {
    let target = target?;
    let mut prefix_sum = 0.0;
    for (index, width) in categories.iter().enumerate() {
        prefix_sum += width;
        if prefix_sum >= target {
            return Some(index);
        }
    }
    None
}

//! Document-wide font statistics.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::TextElement;

/// Font size statistics for one document.
///
/// Computed once per parse and passed by reference into classification;
/// nothing here is shared between documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FontProfile {
    /// Arithmetic mean of element font sizes (0 for an empty document)
    pub average_font_size: f32,
    /// Number of elements measured
    pub sample_count: usize,
    /// Observed sizes, keyed in tenths of a point
    pub size_histogram: BTreeMap<i32, usize>,
}

impl FontProfile {
    /// Measure every element in a single pass.
    pub fn compute(elements: &[TextElement]) -> Self {
        let mut sum = 0.0f64;
        let mut size_histogram = BTreeMap::new();

        for element in elements {
            sum += f64::from(element.font_size);
            *size_histogram.entry(size_key(element.font_size)).or_insert(0) += 1;
        }

        let sample_count = elements.len();
        let average_font_size = if sample_count == 0 {
            0.0
        } else {
            (sum / sample_count as f64) as f32
        };

        Self {
            average_font_size,
            sample_count,
            size_histogram,
        }
    }

    /// Check if no elements were measured.
    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }

    /// The most common font size, ties going to the smaller size.
    pub fn body_size(&self) -> Option<f32> {
        self.size_histogram
            .iter()
            .max_by(|(ka, ca), (kb, cb)| ca.cmp(cb).then(kb.cmp(ka)))
            .map(|(key, _)| *key as f32 / 10.0)
    }

    /// The largest observed font size.
    pub fn max_size(&self) -> Option<f32> {
        self.size_histogram
            .keys()
            .next_back()
            .map(|key| *key as f32 / 10.0)
    }

    /// Number of distinct sizes at 0.1pt precision.
    pub fn distinct_sizes(&self) -> usize {
        self.size_histogram.len()
    }
}

fn size_key(size: f32) -> i32 {
    (size * 10.0).round() as i32
}

//! Arc-length parameterization table.
//!
//! A balanced binary tree over the curve parameter `[0, 1]`. Each leaf
//! covers a parameter span split into [`LEAF_SUBDIVISIONS`] equal parts and
//! stores the cumulative arc length at every part boundary, integrating the
//! derivative magnitude with two-point Gauss-Legendre quadrature. Lookups in
//! either direction descend the tree and interpolate linearly within a part.

use tracing::trace;

use crate::precision::{num_approximation_segments, LEAF_SUBDIVISIONS, MAX_TREE_HEIGHT};

/// Gauss-Legendre node offset for two points on `[-1, 1]`: `1 / sqrt(3)`.
const GAUSS_OFFSET: f64 = 0.577_350_269_189_625_8;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SegmentTree {
    Node {
        length_at_end: f64,
        param_at_start: f64,
        left: Box<SegmentTree>,
        right: Box<SegmentTree>,
    },
    Leaf {
        param_at_start: f64,
        param_at_end: f64,
        /// Cumulative lengths at the `LEAF_SUBDIVISIONS + 1` part boundaries.
        lengths: [f64; LEAF_SUBDIVISIONS + 1],
    },
}

impl SegmentTree {
    /// Builds a table whose leaves together hold at least as many parts as
    /// a polyline approximation to within `max_error` would need.
    pub(crate) fn build(
        derivative_magnitude: &impl Fn(f64) -> f64,
        max_error: f64,
        max_second_derivative_magnitude: f64,
    ) -> Self {
        let segments = num_approximation_segments(max_error, max_second_derivative_magnitude);
        let height = tree_height(segments);
        let tree = Self::build_span(derivative_magnitude, height, 0.0, 0.0, 1.0);
        trace!(segments, height, arc_length = tree.length_at_end(), "built arc length table");
        tree
    }

    fn build_span(
        derivative_magnitude: &impl Fn(f64) -> f64,
        height: u32,
        length_at_start: f64,
        param_at_start: f64,
        param_at_end: f64,
    ) -> Self {
        if height == 0 {
            let mut lengths = [length_at_start; LEAF_SUBDIVISIONS + 1];
            let step = (param_at_end - param_at_start) / LEAF_SUBDIVISIONS as f64;
            for i in 0..LEAF_SUBDIVISIONS {
                let a = param_at_start + step * i as f64;
                let b = if i + 1 == LEAF_SUBDIVISIONS { param_at_end } else { a + step };
                lengths[i + 1] = lengths[i] + integrate(derivative_magnitude, a, b);
            }
            return Self::Leaf { param_at_start, param_at_end, lengths };
        }
        let param_at_mid = param_at_start + 0.5 * (param_at_end - param_at_start);
        let left = Self::build_span(
            derivative_magnitude,
            height - 1,
            length_at_start,
            param_at_start,
            param_at_mid,
        );
        let right = Self::build_span(
            derivative_magnitude,
            height - 1,
            left.length_at_end(),
            param_at_mid,
            param_at_end,
        );
        Self::Node {
            length_at_end: right.length_at_end(),
            param_at_start,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub(crate) fn length_at_end(&self) -> f64 {
        match self {
            Self::Node { length_at_end, .. } => *length_at_end,
            Self::Leaf { lengths, .. } => lengths[LEAF_SUBDIVISIONS],
        }
    }

    /// Parameter value at the given arc length. Lengths at or below zero map
    /// to exactly 0 and lengths at or above the total map to exactly 1.
    pub(crate) fn parameter_value(&self, length: f64) -> f64 {
        if length.is_nan() || length <= 0.0 {
            0.0
        } else if length >= self.length_at_end() {
            1.0
        } else {
            self.descend_to_parameter(length)
        }
    }

    fn descend_to_parameter(&self, length: f64) -> f64 {
        match self {
            Self::Node { left, right, .. } => {
                if length < left.length_at_end() {
                    left.descend_to_parameter(length)
                } else {
                    right.descend_to_parameter(length)
                }
            }
            Self::Leaf { param_at_start, param_at_end, lengths } => {
                let step = (param_at_end - param_at_start) / LEAF_SUBDIVISIONS as f64;
                let index = lengths[1..LEAF_SUBDIVISIONS]
                    .iter()
                    .position(|&boundary| length < boundary)
                    .unwrap_or(LEAF_SUBDIVISIONS - 1);
                let part_start = param_at_start + step * index as f64;
                let part_length = lengths[index + 1] - lengths[index];
                if part_length <= 0.0 {
                    return part_start;
                }
                let fraction = ((length - lengths[index]) / part_length).clamp(0.0, 1.0);
                part_start + fraction * step
            }
        }
    }

    /// Arc length from the start of the curve to the given parameter value,
    /// with the parameter clamped to `[0, 1]`.
    pub(crate) fn length_at(&self, parameter: f64) -> f64 {
        if parameter.is_nan() || parameter <= 0.0 {
            0.0
        } else if parameter >= 1.0 {
            self.length_at_end()
        } else {
            self.descend_to_length(parameter)
        }
    }

    fn descend_to_length(&self, parameter: f64) -> f64 {
        match self {
            Self::Node { left, right, .. } => {
                if parameter < right.param_at_start() {
                    left.descend_to_length(parameter)
                } else {
                    right.descend_to_length(parameter)
                }
            }
            Self::Leaf { param_at_start, param_at_end, lengths } => {
                let step = (param_at_end - param_at_start) / LEAF_SUBDIVISIONS as f64;
                let scaled = (parameter - param_at_start) / step;
                let index = (scaled.floor() as usize).min(LEAF_SUBDIVISIONS - 1);
                let fraction = (scaled - index as f64).clamp(0.0, 1.0);
                lengths[index] + fraction * (lengths[index + 1] - lengths[index])
            }
        }
    }

    fn param_at_start(&self) -> f64 {
        match self {
            Self::Node { param_at_start, .. } | Self::Leaf { param_at_start, .. } => *param_at_start,
        }
    }
}

/// Smallest height whose leaves hold at least `segments` parts.
fn tree_height(segments: usize) -> u32 {
    let leaves = segments.div_ceil(LEAF_SUBDIVISIONS).max(1);
    leaves.next_power_of_two().trailing_zeros().min(MAX_TREE_HEIGHT)
}

/// Two-point Gauss-Legendre quadrature over `[a, b]`.
fn integrate(f: &impl Fn(f64) -> f64, a: f64, b: f64) -> f64 {
    let mid = 0.5 * (a + b);
    let half_width = 0.5 * (b - a);
    let offset = half_width * GAUSS_OFFSET;
    half_width * (f(mid - offset) + f(mid + offset))
}

//! Scale widget - a slider that proportionally rescales its children
//!
//! The invariant is strict: `value` is inside `[min, max]` at all times.
//! Assigning min or max re-clamps the value; assigning the value clamps
//! first and reports a change only if the clamped value differs from the
//! previous one, so observers get at most one notification per actual
//! change.
//!
//! Children snapshot their original anchor, offsets, and size at attach
//! time; every layout pass recomputes their scaled dimension from that
//! fixed baseline, never cumulatively.

use super::core::{Anchor, Axis};
use super::Widget;

/// Original layout of a scale child, captured at attach time
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChildBaseline {
    pub(crate) anchor: Anchor,
    pub(crate) offset_x: f32,
    pub(crate) offset_y: f32,
    pub(crate) width: f32,
    pub(crate) height: f32,
}

/// A child widget plus its pre-scaling baseline
#[derive(Debug)]
pub struct ScaleChild {
    pub(crate) widget: Widget,
    pub(crate) baseline: ChildBaseline,
}

/// Scale widget payload
#[derive(Debug)]
pub struct ScaleWidget {
    min: f32,
    max: f32,
    value: f32,
    /// Primary axis: the axis along which pointer fraction is read and
    /// child dimensions are scaled
    pub axis: Axis,
    pub(crate) children: Vec<ScaleChild>,
}

impl ScaleWidget {
    /// Create a scale widget; `value` is clamped into `[min, max]`
    ///
    /// Range validity (`min <= max`) is enforced by the [`Widget::scale`]
    /// constructor, which owns the widget id needed for the error.
    pub(crate) fn new(axis: Axis, min: f32, max: f32, value: f32) -> Self {
        Self {
            min,
            max,
            value: value.clamp(min, max),
            axis,
            children: Vec::new(),
        }
    }

    /// Current value, always within `[min, max]`
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Range minimum
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Range maximum
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Assign a new value, clamping into range
    ///
    /// Returns true if the clamped value differs from the previous one;
    /// clamping itself is documented behavior, not an error.
    pub fn set_value(&mut self, value: f32) -> bool {
        let clamped = value.clamp(self.min, self.max);
        if (clamped - self.value).abs() > f32::EPSILON {
            self.value = clamped;
            true
        } else {
            false
        }
    }

    /// Replace the range, re-clamping the current value
    ///
    /// Returns true if the re-clamped value changed. Range validity is
    /// checked by the owning [`Widget`] mutation helpers.
    pub(crate) fn set_range_unchecked(&mut self, min: f32, max: f32) -> bool {
        self.min = min;
        self.max = max;
        let clamped = self.value.clamp(min, max);
        if (clamped - self.value).abs() > f32::EPSILON {
            self.value = clamped;
            true
        } else {
            false
        }
    }

    /// Scale factor `(value - min) / (max - min)`; 1.0 when min == max
    pub fn factor(&self) -> f32 {
        let span = self.max - self.min;
        if span > 0.0 {
            (self.value - self.min) / span
        } else {
            1.0
        }
    }

    /// Convert a 0..1 fraction along the primary axis into a range value
    pub fn fraction_to_value(&self, fraction: f32) -> f32 {
        self.min + fraction.clamp(0.0, 1.0) * (self.max - self.min)
    }

    /// Attach a child, snapshotting its original anchor, offsets, and size
    pub fn add_child(&mut self, widget: Widget) {
        let baseline = ChildBaseline {
            anchor: widget.base.anchor,
            offset_x: widget.base.offset_x,
            offset_y: widget.base.offset_y,
            width: widget.base.width,
            height: widget.base.height,
        };
        self.children.push(ScaleChild { widget, baseline });
    }

    /// Child widgets in insertion order
    pub fn children(&self) -> impl Iterator<Item = &Widget> {
        self.children.iter().map(|c| &c.widget)
    }
}

// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A backend that records operations instead of drawing them.

use alloc::vec::Vec;

use peniko::Color;

use crate::{
    DiagramBackend, DrawOp, ImageDesc, ImageId, ImagingOp, ResourceBackend, StateOp, StrokeStyle,
};

/// Snapshot of the current imaging state inside [`RecordingBackend`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateSnapshot {
    /// Current paint, if set.
    pub paint: Option<Color>,
    /// Current stroke style, if set.
    pub stroke: Option<StrokeStyle>,
}

/// Event recorded by [`RecordingBackend`].
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// State operation and the resulting state.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state it was drawn with.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

impl Event {
    /// State attached to this event.
    #[must_use]
    pub fn state(&self) -> &StateSnapshot {
        match self {
            Self::State { state, .. } | Self::Draw { state, .. } => state,
        }
    }
}

/// Stateful backend for tests and debugging.
///
/// It does not rasterize. It keeps image descriptors keyed by ID, tracks the
/// current paint and stroke, and logs every operation together with the state
/// it was applied under.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    images: Vec<Option<ImageDesc>>,
    events: Vec<Event>,
    ops: Vec<ImagingOp>,
    state: StateSnapshot,
}

impl RecordingBackend {
    /// Recorded events, in application order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Raw imaging operations, in application order.
    #[must_use]
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Descriptor of a live image.
    #[must_use]
    pub fn image(&self, id: ImageId) -> Option<ImageDesc> {
        self.images.get(id.0 as usize).copied().flatten()
    }

    /// Clears recorded events, ops, and state but keeps images.
    pub fn clear(&mut self) {
        self.events.clear();
        self.ops.clear();
        self.state = StateSnapshot::default();
    }
}

impl ResourceBackend for RecordingBackend {
    fn create_image(&mut self, desc: ImageDesc) -> ImageId {
        // IDs past u32::MAX alias the last slot; nothing realistic gets there.
        let id = u32::try_from(self.images.len()).unwrap_or(u32::MAX);
        self.images.push(Some(desc));
        ImageId(id)
    }

    fn destroy_image(&mut self, id: ImageId) {
        if let Some(slot) = self.images.get_mut(id.0 as usize) {
            *slot = None;
        }
    }
}

impl DiagramBackend for RecordingBackend {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetPaint(color) => self.state.paint = Some(*color),
            StateOp::SetStroke(stroke) => self.state.stroke = Some(stroke.clone()),
        }
        self.ops.push(ImagingOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(ImagingOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }
}

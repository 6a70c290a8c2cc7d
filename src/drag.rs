//! Pointer tracking while the indicator is dragged.
//!
//! Widgets own a [`DragState`] and feed it every pointer event. Mapping a
//! pointer onto a shape can fail (zero-sized layout, non-finite positions);
//! such failures never interrupt a drag. The caller picks a [`Fallback`] and
//! the failure is only logged.

use floem::kurbo::{Point, Size};

use crate::error::Result;
use crate::offset::NormalizedOffset;
use crate::shape::Constrain;

/// What to report when a pointer position cannot be mapped onto the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fallback {
    /// Normalize the unmapped position, clamped to the bounding box.
    #[default]
    RawPosition,
    /// Report the last successfully mapped offset again.
    KeepPrevious,
}

/// Clamp `position` onto `shape`, then normalize it by `size`.
pub fn map_pointer<S>(position: Point, size: Size, shape: &S) -> Result<NormalizedOffset>
where
    S: Constrain + ?Sized,
{
    let constrained = shape.constrain(position)?;
    NormalizedOffset::from_position(constrained, size)
}

/// Drag state of one widget: whether a drag is in progress and the last
/// offset that mapped cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    last_valid: NormalizedOffset,
    active: bool,
}

impl DragState {
    pub fn new(initial: NormalizedOffset) -> Self {
        Self {
            last_valid: initial,
            active: false,
        }
    }

    pub fn last_valid_offset(&self) -> NormalizedOffset {
        self.last_valid
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Move the indicator without a pointer, e.g. when the color is set from
    /// outside the widget.
    pub fn reset(&mut self, offset: NormalizedOffset) {
        self.last_valid = offset;
    }

    pub fn begin(&mut self) {
        self.active = true;
    }

    pub fn end(&mut self) {
        self.active = false;
    }

    /// Map a pointer position, updating the last valid offset on success.
    pub fn pointer_moved<S>(
        &mut self,
        position: Point,
        size: Size,
        shape: &S,
        fallback: Fallback,
    ) -> NormalizedOffset
    where
        S: Constrain + ?Sized,
    {
        match map_pointer(position, size, shape) {
            Ok(offset) => {
                self.last_valid = offset;
                offset
            }
            Err(err) => {
                tracing::debug!(
                    %err,
                    x = position.x,
                    y = position.y,
                    ?fallback,
                    "pointer not mapped"
                );
                match fallback {
                    Fallback::RawPosition => {
                        NormalizedOffset::from_position(position, size).unwrap_or(self.last_valid)
                    }
                    Fallback::KeepPrevious => self.last_valid,
                }
            }
        }
    }
}

//! Input source seam.
//!
//! The camera + hand detector live behind [`InputSource`] so the match
//! loop can run against anything that produces per-tick control frames -
//! including scripted sources in tests.

use std::error::Error;
use std::fmt;

use game_core::{ControlFrame, ControlSample, Side};

/// Input source failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The source could not be acquired (camera missing or busy).
    /// Fatal for `start`; the match stays idle.
    Unavailable(String),
    /// A single poll failed. Recoverable - the tick degrades to AI control.
    ReadFailed(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Unavailable(reason) => {
                write!(f, "input source unavailable: {}", reason)
            }
            SourceError::ReadFailed(reason) => write!(f, "sample read failed: {}", reason),
        }
    }
}

impl Error for SourceError {}

/// Handedness label as reported by the detector, in mirrored camera
/// coordinates (the preview flips the image so players see themselves
/// mirror-style).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandLabel {
    Left,
    Right,
}

impl HandLabel {
    /// The paddle a labeled hand drives. The mirror flip means the
    /// detector's "Left" hand sits on the player's right and controls
    /// the right paddle, and vice versa.
    pub fn paddle_side(self) -> Side {
        match self {
            HandLabel::Left => Side::Right,
            HandLabel::Right => Side::Left,
        }
    }
}

/// One labeled hand position from the detector. `norm_y` is the tracked
/// landmark's vertical position normalized to [0, 1] of the camera frame
/// height (raw pixel y divided by frame height at the adapter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandDetection {
    pub label: HandLabel,
    pub norm_y: f32,
}

/// Fold 0, 1, or 2 labeled detections into a per-side control frame.
/// A later detection with the same label overwrites an earlier one.
pub fn frame_from_detections(detections: &[HandDetection]) -> ControlFrame {
    let mut frame = ControlFrame::new();
    for detection in detections {
        frame.set(
            detection.label.paddle_side(),
            ControlSample::detected(detection.norm_y),
        );
    }
    frame
}

/// A per-tick provider of control frames. `poll_samples` must never
/// block: if nothing new is available, return an empty frame.
pub trait InputSource {
    /// Take ownership of the underlying device. Bounds the running phase.
    fn acquire(&mut self) -> Result<(), SourceError>;

    /// Release the underlying device.
    fn release(&mut self);

    /// Latest control frame, one call per tick, non-blocking.
    fn poll_samples(&mut self) -> Result<ControlFrame, SourceError>;
}

use crate::foundation::error::{ReelError, ReelResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Height of the visible scene in scene units. Scene space is y-up with the
/// origin at the frame center; width follows the canvas aspect ratio.
pub const FRAME_HEIGHT: f64 = 8.0;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    pub start: FrameIndex,
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    pub fn new(start: FrameIndex, end: FrameIndex) -> ReelResult<Self> {
        if start.0 > end.0 {
            return Err(ReelError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> ReelResult<Self> {
        if den == 0 {
            return Err(ReelError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ReelError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Nearest frame boundary for a time offset. Cue times are sums of
    /// decimal seconds, so rounding keeps e.g. `0.1 + 0.2` on frame 9 at 30fps.
    pub fn secs_to_frames_round(self, secs: f64) -> u64 {
        (secs * self.as_f64()).round().max(0.0) as u64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn validate(self) -> ReelResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        Ok(())
    }

    /// Pixels per scene unit.
    pub fn pixels_per_unit(self) -> f64 {
        f64::from(self.height) / FRAME_HEIGHT
    }

    /// The visible scene rectangle, in scene units.
    pub fn scene_frame(self) -> Rect {
        let half_h = FRAME_HEIGHT * 0.5;
        let half_w = half_h * f64::from(self.width) / f64::from(self.height);
        Rect::new(-half_w, -half_h, half_w, half_h)
    }

    /// Maps y-up scene units to y-down pixel coordinates.
    pub fn scene_to_pixels(self) -> Affine {
        let s = self.pixels_per_unit();
        Affine::new([
            s,
            0.0,
            0.0,
            -s,
            f64::from(self.width) * 0.5,
            f64::from(self.height) * 0.5,
        ])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

use crate::{
    animation::keyframes::Keyframes,
    foundation::color::Color,
    foundation::core::{Canvas, Fps, FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    scene::session::Catalog,
    scene::visual::VisualId,
};

/// Renderer-facing document: what is on screen, where, and when.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Reel {
    pub fps: Fps,
    pub canvas: Canvas,
    pub background: Color,
    pub duration: FrameIndex, // total frames
    pub visuals: Catalog,
    pub clips: Vec<Clip>, // sorted by start frame, then id
}

/// One on-screen interval of a visual. Keyframes are clip-local.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Clip {
    pub id: String,
    pub visual: VisualId,
    pub range: FrameRange, // [start,end)
    pub opacity: Keyframes<f64>, // 0..1 clamped in eval
    pub reveal: Keyframes<f64>,  // drawn fraction of strokes, 0..1
    pub scale: Keyframes<f64>,   // about the visual's bounds center
}

impl Reel {
    pub fn validate(&self) -> ReelResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(ReelError::validation("fps must have num>0 and den>0"));
        }
        self.canvas.validate()?;
        if self.duration.0 == 0 {
            return Err(ReelError::validation("duration must be > 0 frames"));
        }

        for clip in &self.clips {
            if !self.visuals.contains_key(&clip.visual) {
                return Err(ReelError::validation(format!(
                    "clip '{}' references missing visual '{}'",
                    clip.id, clip.visual
                )));
            }
            if clip.range.start.0 > clip.range.end.0 {
                return Err(ReelError::validation(format!(
                    "clip '{}' has invalid range (start > end)",
                    clip.id
                )));
            }
            if clip.range.end.0 > self.duration.0 {
                return Err(ReelError::validation(format!(
                    "clip '{}' range exceeds reel duration",
                    clip.id
                )));
            }
            clip.opacity.validate()?;
            clip.reveal.validate()?;
            clip.scale.validate()?;
        }

        Ok(())
    }

    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration.0)
    }

    pub fn to_json_pretty(&self) -> ReelResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReelError::Other(anyhow::Error::new(e).context("serialize reel")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reel/model.rs"]
mod tests;

use std::collections::BTreeMap;

use crate::{
    animation::{
        ease::Ease,
        keyframes::{Keyframe, Keyframes},
    },
    foundation::color::Color,
    foundation::core::{Canvas, Fps, FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    reel::model::{Clip, Reel},
    scene::session::{Catalog, Cue, CueAction, CueSink},
    scene::visual::VisualId,
    timeline::{
        builder::Timeline,
        step::{Entrance, Exit},
    },
};

/// Peak scale reached while a visual is emphasized.
pub const EMPHASIS_SCALE: f64 = 1.2;

/// Turns session cues into frame-ranged clips.
pub struct ReelRecorder {
    fps: Fps,
    open: BTreeMap<VisualId, OpenClip>,
    closed: Vec<Clip>,
    appearances: BTreeMap<VisualId, usize>,
    end: Option<f64>,
}

struct OpenClip {
    id: String,
    start: FrameIndex,
    opacity: Keyframes<f64>,
    reveal: Keyframes<f64>,
    scale: Keyframes<f64>,
}

impl OpenClip {
    fn close(self, visual: VisualId, end: FrameIndex) -> Clip {
        let end = FrameIndex(end.0.max(self.start.0 + 1));
        Clip {
            id: self.id,
            visual,
            range: FrameRange {
                start: self.start,
                end,
            },
            opacity: self.opacity,
            reveal: self.reveal,
            scale: self.scale,
        }
    }
}

fn steady(value: f64) -> Keyframes<f64> {
    Keyframes::linear(vec![Keyframe {
        frame: FrameIndex(0),
        value,
        ease: Ease::Linear,
    }])
}

fn ramp(from: f64, to: f64, frames: u64) -> Keyframes<f64> {
    Keyframes::linear(vec![
        Keyframe {
            frame: FrameIndex(0),
            value: from,
            ease: Ease::Smooth,
        },
        Keyframe {
            frame: FrameIndex(frames),
            value: to,
            ease: Ease::Linear,
        },
    ])
}

impl ReelRecorder {
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            open: BTreeMap::new(),
            closed: Vec::new(),
            appearances: BTreeMap::new(),
            end: None,
        }
    }

    /// Clip-local start and end frames of a cue on the clip that began at
    /// `start`.
    fn local_span(&self, cue: &Cue, start: FrameIndex) -> (FrameIndex, FrameIndex) {
        let a = self.fps.secs_to_frames_round(cue.at);
        let b = self.fps.secs_to_frames_round(cue.at + cue.run_time);
        (
            FrameIndex(a.saturating_sub(start.0)),
            FrameIndex(b.saturating_sub(start.0)),
        )
    }

    fn enter(&mut self, cue: &Cue, entrance: Entrance) -> ReelResult<()> {
        if self.open.contains_key(&cue.visual) {
            return Err(ReelError::timeline(format!(
                "visual '{}' entered twice without exiting",
                cue.visual
            )));
        }
        let start = FrameIndex(self.fps.secs_to_frames_round(cue.at));
        let (_, done) = self.local_span(cue, start);

        let n = self.appearances.entry(cue.visual.clone()).or_insert(0);
        let id = format!("{}#{}", cue.visual, n);
        *n += 1;

        let (opacity, reveal) = match entrance {
            Entrance::Write | Entrance::Create => (steady(1.0), ramp(0.0, 1.0, done.0)),
            Entrance::FadeIn => (ramp(0.0, 1.0, done.0), steady(1.0)),
        };
        self.open.insert(
            cue.visual.clone(),
            OpenClip {
                id,
                start,
                opacity,
                reveal,
                scale: steady(1.0),
            },
        );
        Ok(())
    }

    fn emphasize(&mut self, cue: &Cue) -> ReelResult<()> {
        let start = self.open_start(&cue.visual)?;
        let (from, to) = self.local_span(cue, start);
        let mid = FrameIndex(from.0 + (to.0 - from.0) / 2);
        let Some(clip) = self.open.get_mut(&cue.visual) else {
            return Err(not_open(&cue.visual));
        };
        clip.scale.push(from, 1.0, Ease::InOutQuad)?;
        clip.scale.push(mid, EMPHASIS_SCALE, Ease::InOutQuad)?;
        clip.scale.push(to, 1.0, Ease::Linear)?;
        Ok(())
    }

    fn exit(&mut self, cue: &Cue, exit: Exit) -> ReelResult<()> {
        let start = self.open_start(&cue.visual)?;
        let (from, to) = self.local_span(cue, start);
        let Some(mut clip) = self.open.remove(&cue.visual) else {
            return Err(not_open(&cue.visual));
        };
        let track = match exit {
            Exit::FadeOut => &mut clip.opacity,
            Exit::Uncreate => &mut clip.reveal,
        };
        let current = track.last_value().copied().unwrap_or(1.0);
        track.push(from, current, Ease::Smooth)?;
        track.push(to, 0.0, Ease::Linear)?;

        let end = FrameIndex(start.0 + to.0);
        self.closed.push(clip.close(cue.visual.clone(), end));
        Ok(())
    }

    fn open_start(&self, visual: &VisualId) -> ReelResult<FrameIndex> {
        self.open
            .get(visual)
            .map(|c| c.start)
            .ok_or_else(|| not_open(visual))
    }

    /// Closes clips still on screen at the end and assembles the document.
    pub fn into_reel(
        mut self,
        canvas: Canvas,
        background: Color,
        visuals: Catalog,
    ) -> ReelResult<Reel> {
        let end = self
            .end
            .ok_or_else(|| ReelError::evaluation("recorder finished without an end time"))?;
        let closed_end = self.closed.iter().map(|c| c.range.end.0).max().unwrap_or(0);
        let open_start = self.open.values().map(|c| c.start.0 + 1).max().unwrap_or(0);
        let duration = FrameIndex(
            self.fps
                .secs_to_frames_round(end)
                .max(closed_end)
                .max(open_start)
                .max(1),
        );

        for (visual, clip) in std::mem::take(&mut self.open) {
            self.closed.push(clip.close(visual, duration));
        }
        let mut clips = self.closed;
        clips.sort_by(|a, b| {
            a.range
                .start
                .cmp(&b.range.start)
                .then_with(|| a.id.cmp(&b.id))
        });

        let reel = Reel {
            fps: self.fps,
            canvas,
            background,
            duration,
            visuals,
            clips,
        };
        reel.validate()?;
        Ok(reel)
    }
}

fn not_open(visual: &VisualId) -> ReelError {
    ReelError::timeline(format!("visual '{visual}' is not on screen"))
}

impl CueSink for ReelRecorder {
    fn cue(&mut self, cue: &Cue) -> ReelResult<()> {
        match cue.action {
            CueAction::Enter(entrance) => self.enter(cue, entrance),
            CueAction::Emphasize => self.emphasize(cue),
            CueAction::Exit(exit) => self.exit(cue, exit),
        }
    }

    fn finish(&mut self, end: f64) -> ReelResult<()> {
        self.end = Some(end);
        Ok(())
    }
}

/// Runs `timeline` through a fresh session and records the result.
#[tracing::instrument(skip(timeline), fields(beats = timeline.beats().len()))]
pub fn record_reel(
    timeline: &Timeline,
    fps: Fps,
    canvas: Canvas,
    background: Color,
) -> ReelResult<Reel> {
    let mut recorder = ReelRecorder::new(fps);
    let end = timeline.play_into(&mut recorder)?;
    let reel = recorder.into_reel(canvas, background, timeline.catalog().clone())?;
    tracing::debug!(
        end_secs = end,
        frames = reel.duration.0,
        clips = reel.clips.len(),
        "reel recorded"
    );
    Ok(reel)
}

#[cfg(test)]
#[path = "../../tests/unit/reel/recorder.rs"]
mod tests;

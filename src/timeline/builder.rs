use crate::{
    foundation::error::{ReelError, ReelResult},
    scene::{
        session::{Catalog, Cue, CueSink, Session},
        visual::{Visual, VisualId},
    },
    timeline::step::{Beat, DEFAULT_RUN_TIME, Entrance, Exit, Step},
};

/// A validated, ordered presentation: the visuals it uses and its beats.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Timeline {
    catalog: Catalog,
    lead_in: f64,
    beats: Vec<Beat>,
}

impl Timeline {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn beats(&self) -> &[Beat] {
        &self.beats
    }

    /// Total running time in seconds.
    pub fn duration(&self) -> f64 {
        self.lead_in + self.beats.iter().map(Beat::duration).sum::<f64>()
    }

    /// Plays every beat in order against `session`. Stops at the first error.
    #[tracing::instrument(skip_all, fields(beats = self.beats.len()))]
    pub fn run(&self, session: &mut Session<'_>) -> ReelResult<()> {
        session.wait(self.lead_in)?;
        for (i, beat) in self.beats.iter().enumerate() {
            session.play(&beat.step).map_err(|e| match e {
                ReelError::Timeline(msg) => {
                    ReelError::timeline(format!("beat {i} ({}): {msg}", beat.step.name()))
                }
                other => other,
            })?;
            session.wait(beat.wait_after)?;
        }
        Ok(())
    }

    /// Runs the timeline into `sink` with a fresh session and returns the end
    /// time.
    pub fn play_into(&self, sink: &mut dyn CueSink) -> ReelResult<f64> {
        let mut session = Session::new(&self.catalog, sink);
        self.run(&mut session)?;
        session.finish()
    }

    /// Every cue the timeline produces, in order.
    pub fn cues(&self) -> ReelResult<Vec<Cue>> {
        let mut cues = Vec::new();
        self.play_into(&mut cues)?;
        Ok(cues)
    }
}

/// Collects visuals and steps; [`TimelineBuilder::build`] checks the whole
/// sequence against scene state before handing out a [`Timeline`].
#[derive(Default)]
pub struct TimelineBuilder {
    catalog: Catalog,
    lead_in: f64,
    beats: Vec<Beat>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a visual under `id`.
    pub fn add(&mut self, id: impl Into<String>, visual: Visual) -> ReelResult<VisualId> {
        let id = VisualId::new(id);
        if id.as_str().trim().is_empty() {
            return Err(ReelError::validation("visual id must be non-empty"));
        }
        if self.catalog.contains_key(&id) {
            return Err(ReelError::validation(format!("duplicate visual id '{id}'")));
        }
        self.catalog.insert(id.clone(), visual);
        Ok(id)
    }

    pub fn step(&mut self, step: Step) -> &mut Self {
        self.beats.push(Beat {
            step,
            wait_after: 0.0,
        });
        self
    }

    pub fn introduce(&mut self, visuals: &[VisualId], entrance: Entrance) -> &mut Self {
        self.introduce_for(visuals, entrance, DEFAULT_RUN_TIME)
    }

    pub fn introduce_for(
        &mut self,
        visuals: &[VisualId],
        entrance: Entrance,
        run_time: f64,
    ) -> &mut Self {
        self.step(Step::Introduce {
            visuals: visuals.to_vec(),
            entrance,
            run_time,
        })
    }

    pub fn emphasize(&mut self, visual: &VisualId, duration: f64) -> &mut Self {
        self.step(Step::Emphasize {
            visual: visual.clone(),
            duration,
        })
    }

    pub fn retire(&mut self, visuals: &[VisualId], exit: Exit) -> &mut Self {
        self.step(Step::Retire {
            visuals: visuals.to_vec(),
            exit,
            run_time: DEFAULT_RUN_TIME,
        })
    }

    pub fn swap(
        &mut self,
        retire: &[VisualId],
        exit: Exit,
        introduce: &[VisualId],
        entrance: Entrance,
    ) -> &mut Self {
        self.step(Step::Swap {
            retire: retire.to_vec(),
            exit,
            introduce: introduce.to_vec(),
            entrance,
            run_time: DEFAULT_RUN_TIME,
        })
    }

    /// Extends the pause after the most recent step (or before the first).
    pub fn wait(&mut self, secs: f64) -> &mut Self {
        match self.beats.last_mut() {
            Some(beat) => beat.wait_after += secs,
            None => self.lead_in += secs,
        }
        self
    }

    pub fn build(self) -> ReelResult<Timeline> {
        let timeline = Timeline {
            catalog: self.catalog,
            lead_in: self.lead_in,
            beats: self.beats,
        };
        let mut dry_run = DiscardCues;
        let end = timeline.play_into(&mut dry_run)?;
        tracing::debug!(
            beats = timeline.beats.len(),
            visuals = timeline.catalog.len(),
            end,
            "timeline built"
        );
        Ok(timeline)
    }
}

struct DiscardCues;

impl CueSink for DiscardCues {
    fn cue(&mut self, _cue: &Cue) -> ReelResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/builder.rs"]
mod tests;

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    foundation::error::{ReelError, ReelResult},
    scene::visual::{Visual, VisualId},
    timeline::step::{Entrance, Exit, Step},
};

/// Every visual a timeline may put on screen, by id.
pub type Catalog = BTreeMap<VisualId, Visual>;

/// One visual's resolved action at a point on the clock.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Cue {
    pub at: f64,
    pub run_time: f64,
    pub visual: VisualId,
    pub action: CueAction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CueAction {
    Enter(Entrance),
    Emphasize,
    Exit(Exit),
}

/// Receives cues as a session plays steps.
pub trait CueSink {
    fn cue(&mut self, cue: &Cue) -> ReelResult<()>;

    /// Called once with the final clock when the session is released.
    fn finish(&mut self, _end: f64) -> ReelResult<()> {
        Ok(())
    }
}

impl CueSink for Vec<Cue> {
    fn cue(&mut self, cue: &Cue) -> ReelResult<()> {
        self.push(cue.clone());
        Ok(())
    }
}

/// The scene state for one run: which visuals are on screen and the clock.
///
/// Steps are applied one at a time through [`Session::play`] and
/// [`Session::wait`]; each call completes before it returns. A step that fails
/// its scene checks leaves the session unchanged; callers treat any error as
/// fatal.
pub struct Session<'a> {
    catalog: &'a Catalog,
    on_screen: BTreeSet<VisualId>,
    clock: f64,
    sink: &'a mut dyn CueSink,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog, sink: &'a mut dyn CueSink) -> Self {
        Self {
            catalog,
            on_screen: BTreeSet::new(),
            clock: 0.0,
            sink,
        }
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn is_on_screen(&self, id: &VisualId) -> bool {
        self.on_screen.contains(id)
    }

    pub fn on_screen(&self) -> impl Iterator<Item = &VisualId> {
        self.on_screen.iter()
    }

    #[tracing::instrument(level = "debug", skip(self), fields(at = self.clock))]
    pub fn play(&mut self, step: &Step) -> ReelResult<()> {
        step.validate()?;
        let run_time = step.run_time();

        match step {
            Step::Introduce {
                visuals, entrance, ..
            } => {
                self.check_off_screen(visuals)?;
                self.emit(visuals, run_time, CueAction::Enter(*entrance))?;
                self.on_screen.extend(visuals.iter().cloned());
            }
            Step::Emphasize { visual, .. } => {
                let one = std::slice::from_ref(visual);
                self.check_on_screen(one)?;
                self.emit(one, run_time, CueAction::Emphasize)?;
            }
            Step::Retire { visuals, exit, .. } => {
                self.check_on_screen(visuals)?;
                self.emit(visuals, run_time, CueAction::Exit(*exit))?;
                for id in visuals {
                    self.on_screen.remove(id);
                }
            }
            Step::Swap {
                retire,
                exit,
                introduce,
                entrance,
                ..
            } => {
                self.check_on_screen(retire)?;
                self.check_off_screen(introduce)?;
                self.emit(retire, run_time, CueAction::Exit(*exit))?;
                self.emit(introduce, run_time, CueAction::Enter(*entrance))?;
                for id in retire {
                    self.on_screen.remove(id);
                }
                self.on_screen.extend(introduce.iter().cloned());
            }
        }

        self.clock += run_time;
        Ok(())
    }

    pub fn wait(&mut self, secs: f64) -> ReelResult<()> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(ReelError::timeline(format!(
                "wait must be finite and >= 0 (got {secs})"
            )));
        }
        self.clock += secs;
        Ok(())
    }

    /// Releases the scene and returns the final clock.
    pub fn finish(self) -> ReelResult<f64> {
        tracing::debug!(
            end = self.clock,
            still_on_screen = self.on_screen.len(),
            "session finished"
        );
        self.sink.finish(self.clock)?;
        Ok(self.clock)
    }

    fn lookup(&self, id: &VisualId) -> ReelResult<&'a Visual> {
        self.catalog
            .get(id)
            .ok_or_else(|| ReelError::timeline(format!("unknown visual '{id}'")))
    }

    fn check_off_screen(&self, ids: &[VisualId]) -> ReelResult<()> {
        for id in ids {
            self.lookup(id)?;
            if self.on_screen.contains(id) {
                return Err(ReelError::timeline(format!(
                    "visual '{id}' is already on screen"
                )));
            }
        }
        Ok(())
    }

    fn check_on_screen(&self, ids: &[VisualId]) -> ReelResult<()> {
        for id in ids {
            self.lookup(id)?;
            if !self.on_screen.contains(id) {
                return Err(ReelError::timeline(format!(
                    "visual '{id}' is not on screen"
                )));
            }
        }
        Ok(())
    }

    fn emit(&mut self, ids: &[VisualId], run_time: f64, action: CueAction) -> ReelResult<()> {
        for id in ids {
            let visual = self.lookup(id)?;
            tracing::debug!(visual = %id, what = %visual.describe(), ?action, "cue");
            self.sink.cue(&Cue {
                at: self.clock,
                run_time,
                visual: id.clone(),
                action,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/session.rs"]
mod tests;

use crate::{
    foundation::error::{ReelError, ReelResult},
    scene::visual::VisualId,
};

/// Run time used when a step does not name one, in seconds.
pub const DEFAULT_RUN_TIME: f64 = 1.0;

/// How visuals come on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entrance {
    /// Progressive reveal of text glyph strokes.
    Write,
    /// Progressive reveal of a shape's outline.
    Create,
    FadeIn,
}

/// How visuals leave the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exit {
    FadeOut,
    /// Reverse of [`Entrance::Create`].
    Uncreate,
}

/// One presentation step. Every step completes before the next begins.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Introduce {
        visuals: Vec<VisualId>,
        entrance: Entrance,
        run_time: f64,
    },
    /// Briefly scale up an on-screen visual and settle back.
    Emphasize { visual: VisualId, duration: f64 },
    Retire {
        visuals: Vec<VisualId>,
        exit: Exit,
        run_time: f64,
    },
    /// Retire one set while introducing another over the same run time.
    Swap {
        retire: Vec<VisualId>,
        exit: Exit,
        introduce: Vec<VisualId>,
        entrance: Entrance,
        run_time: f64,
    },
}

impl Step {
    pub fn run_time(&self) -> f64 {
        match self {
            Self::Introduce { run_time, .. }
            | Self::Retire { run_time, .. }
            | Self::Swap { run_time, .. } => *run_time,
            Self::Emphasize { duration, .. } => *duration,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Introduce { .. } => "introduce",
            Self::Emphasize { .. } => "emphasize",
            Self::Retire { .. } => "retire",
            Self::Swap { .. } => "swap",
        }
    }

    /// Shape checks that do not depend on scene state.
    pub fn validate(&self) -> ReelResult<()> {
        let rt = self.run_time();
        if !rt.is_finite() || rt <= 0.0 {
            return Err(ReelError::timeline(format!(
                "{} run time must be finite and > 0 (got {rt})",
                self.name()
            )));
        }
        match self {
            Self::Introduce { visuals, .. } | Self::Retire { visuals, .. } => {
                non_empty(self.name(), visuals)
            }
            Self::Swap {
                retire, introduce, ..
            } => {
                non_empty("swap retire", retire)?;
                non_empty("swap introduce", introduce)?;
                if let Some(id) = retire.iter().find(|id| introduce.contains(*id)) {
                    return Err(ReelError::timeline(format!(
                        "swap retires and introduces '{id}' at once"
                    )));
                }
                Ok(())
            }
            Self::Emphasize { .. } => Ok(()),
        }
    }
}

fn non_empty(what: &str, visuals: &[VisualId]) -> ReelResult<()> {
    if visuals.is_empty() {
        return Err(ReelError::timeline(format!("{what} needs at least one visual")));
    }
    for (i, id) in visuals.iter().enumerate() {
        if visuals[..i].contains(id) {
            return Err(ReelError::timeline(format!("{what} lists '{id}' twice")));
        }
    }
    Ok(())
}

/// A step plus the pause that follows it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Beat {
    pub step: Step,
    pub wait_after: f64,
}

impl Beat {
    pub fn duration(&self) -> f64 {
        self.step.run_time() + self.wait_after
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/step.rs"]
mod tests;

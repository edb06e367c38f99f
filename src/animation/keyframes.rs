use crate::{
    animation::ease::Ease,
    foundation::core::FrameIndex,
    foundation::error::{ReelError, ReelResult},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// A clip property sampled in clip-local frames.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    pub keys: Vec<Keyframe<T>>, // sorted by frame
    pub mode: InterpMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<T>, // value when no keys exist
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    pub frame: FrameIndex,
    pub value: T,
    pub ease: Ease, // ease applied toward next key
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterpMode {
    Hold,
    Linear,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    pub fn constant(value: T) -> Self {
        Self {
            keys: vec![Keyframe {
                frame: FrameIndex(0),
                value,
                ease: Ease::Linear,
            }],
            mode: InterpMode::Hold,
            default: None,
        }
    }

    pub fn linear(keys: Vec<Keyframe<T>>) -> Self {
        Self {
            keys,
            mode: InterpMode::Linear,
            default: None,
        }
    }

    /// Append a key; keys must arrive in non-decreasing frame order.
    pub fn push(&mut self, frame: FrameIndex, value: T, ease: Ease) -> ReelResult<()> {
        if let Some(last) = self.keys.last()
            && last.frame.0 > frame.0
        {
            return Err(ReelError::animation(format!(
                "keyframe at {} precedes last key at {}",
                frame.0, last.frame.0
            )));
        }
        self.keys.push(Keyframe { frame, value, ease });
        Ok(())
    }

    pub fn last_value(&self) -> Option<&T> {
        self.keys.last().map(|k| &k.value).or(self.default.as_ref())
    }

    pub fn validate(&self) -> ReelResult<()> {
        if self.keys.is_empty() && self.default.is_none() {
            return Err(ReelError::animation(
                "Keyframes must have at least one key or a default value",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].frame.0 <= w[1].frame.0) {
            return Err(ReelError::animation(
                "Keyframes keys must be sorted by frame",
            ));
        }
        Ok(())
    }

    pub fn sample(&self, clip_local: FrameIndex) -> ReelResult<T> {
        if self.keys.is_empty() {
            return self
                .default
                .clone()
                .ok_or_else(|| ReelError::animation("Keyframes has no keys and no default"));
        }

        let f = clip_local.0;
        let idx = self.keys.partition_point(|k| k.frame.0 <= f);

        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame.0.saturating_sub(a.frame.0);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let t = ((f - a.frame.0) as f64) / (denom as f64);
        let te = a.ease.apply(t);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, te)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;

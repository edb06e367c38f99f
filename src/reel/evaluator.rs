use kurbo::Affine;

use crate::{
    foundation::core::FrameIndex,
    foundation::error::{ReelError, ReelResult},
    reel::model::{Clip, Reel},
    scene::visual::VisualId,
};

/// What a renderer draws for one frame, back to front.
#[derive(Clone, Debug, serde::Serialize)]
pub struct EvaluatedFrame {
    pub frame: FrameIndex,
    pub nodes: Vec<EvaluatedNode>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct EvaluatedNode {
    pub clip_id: String,
    pub visual: VisualId,
    pub z: i32,
    pub opacity: f64,
    pub reveal: f64,
    pub scale: f64,
    /// Scene units to output pixels, including emphasis scale.
    pub transform: Affine,
}

pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(reel))]
    pub fn eval_frame(reel: &Reel, frame: FrameIndex) -> ReelResult<EvaluatedFrame> {
        if frame.0 >= reel.duration.0 {
            return Err(ReelError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0, reel.duration.0
            )));
        }

        let mut nodes_with_key: Vec<((i32, u64, String), EvaluatedNode)> = Vec::new();
        for clip in &reel.clips {
            if !clip.range.contains(frame) {
                continue;
            }
            let node = eval_clip(reel, clip, frame)?;
            let sort_key = (node.z, clip.range.start.0, node.clip_id.clone());
            nodes_with_key.push((sort_key, node));
        }

        nodes_with_key.sort_by(|a, b| a.0.cmp(&b.0));
        let nodes = nodes_with_key.into_iter().map(|(_, n)| n).collect();
        Ok(EvaluatedFrame { frame, nodes })
    }
}

fn eval_clip(reel: &Reel, clip: &Clip, frame: FrameIndex) -> ReelResult<EvaluatedNode> {
    let visual = reel.visuals.get(&clip.visual).ok_or_else(|| {
        ReelError::evaluation(format!(
            "clip '{}' references missing visual '{}'",
            clip.id, clip.visual
        ))
    })?;
    let local = FrameIndex(frame.0 - clip.range.start.0);

    let opacity = clip.opacity.sample(local)?.clamp(0.0, 1.0);
    let reveal = clip.reveal.sample(local)?.clamp(0.0, 1.0);
    let scale = clip.scale.sample(local)?.max(0.0);

    let pivot = visual.bounds.center().to_vec2();
    let emphasis = Affine::translate(pivot) * Affine::scale(scale) * Affine::translate(-pivot);

    Ok(EvaluatedNode {
        clip_id: clip.id.clone(),
        visual: clip.visual.clone(),
        z: visual.z,
        opacity,
        reveal,
        scale,
        transform: reel.canvas.scene_to_pixels() * emphasis,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/reel/evaluator.rs"]
mod tests;

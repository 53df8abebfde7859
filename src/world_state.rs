//! Per-query snapshot of obstacle geometries and ad-hoc frames (§3, §4.E).
//!
//! A `WorldState` never mutates the `FrameSystem` it is paired with at
//! collision-check time: its `transforms` are grafted onto a throwaway clone
//! for the duration of a single call and discarded afterward.

use crate::error::FrameError;
use crate::frame::{Frame, FrameSystemInputs};
use crate::frame_system::FrameSystem;
use crate::geometry::{collides, Geometry, GeometriesInFrame};
use crate::partial::Partial;

#[derive(Clone, Debug)]
pub struct WorldState {
    obstacles: Vec<GeometriesInFrame>,
    transforms: Vec<(Frame, String)>,
}

impl WorldState {
    pub fn new(obstacles: Vec<GeometriesInFrame>, transforms: Vec<(Frame, String)>) -> Self {
        Self { obstacles, transforms }
    }

    pub fn obstacles(&self) -> &[GeometriesInFrame] {
        &self.obstacles
    }

    fn augmented(&self, base: &FrameSystem) -> Result<FrameSystem, FrameError> {
        let mut augmented = base.clone();
        for (frame, parent) in &self.transforms {
            augmented.add_frame(frame.clone(), parent)?;
        }
        Ok(augmented)
    }

    /// Resolve every obstacle into `target`'s coordinates and test each one
    /// against `subject` (already expressed in `target`'s coordinates).
    /// True as soon as any pair collides.
    pub fn collides_with(
        &self,
        base: &FrameSystem,
        inputs: &FrameSystemInputs,
        target: &str,
        subject: &[Geometry],
    ) -> Result<Partial<bool>, FrameError> {
        let system = self.augmented(base)?;
        let mut oob = Vec::new();
        let mut hit = false;

        for group in &self.obstacles {
            let pose = system.transform(inputs, group.frame(), target)?;
            oob.extend(pose.oob_errors.clone());
            for obstacle in group.geometries() {
                let placed = obstacle.transform(pose.value);
                for candidate in subject {
                    if collides(&placed, candidate)? {
                        hit = true;
                    }
                }
            }
        }

        Ok(Partial::with_errors(hit, oob))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{Orientation, Pose, Vector};
    use crate::frame::StaticFrame;
    use crate::frame_system::WORLD;

    #[test]
    fn obstacle_in_its_own_frame_is_resolved_before_testing() {
        let mut base = FrameSystem::new("test");
        base.add_frame(
            Frame::Static(StaticFrame::new("obstacle_frame", Pose::new(Vector::new(5.0, 0.0, 0.0), Orientation::identity()), None)),
            WORLD,
        )
        .unwrap();

        let far_box = Geometry::new_box("far", Pose::identity(), Vector::new(0.5, 0.5, 0.5));
        let world_state = WorldState::new(vec![GeometriesInFrame::new("obstacle_frame", vec![far_box])], Vec::new());

        let subject_at_origin = Geometry::new_box("subject", Pose::identity(), Vector::new(0.5, 0.5, 0.5));
        let result = world_state
            .collides_with(&base, &FrameSystemInputs::new(), WORLD, &[subject_at_origin])
            .unwrap();
        assert!(!result.value);
    }

    #[test]
    fn ad_hoc_transform_does_not_mutate_base_system() {
        let base = FrameSystem::new("test");
        let extra = Frame::Static(StaticFrame::new("scratch", Pose::identity(), None));
        let world_state = WorldState::new(Vec::new(), vec![(extra, WORLD.to_string())]);

        world_state.collides_with(&base, &FrameSystemInputs::new(), WORLD, &[]).unwrap();
        assert!(!base.contains("scratch"));
    }
}

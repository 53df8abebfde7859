//! The named frame tree (§3, §4.D): `world`-rooted, single-parent, queried
//! by composing transforms along arbitrary source→target paths.

use crate::algebra::Pose;
use crate::error::{FrameError, OobError};
use crate::frame::{Frame, FrameSystemInputs, Limit, StaticFrame};
use crate::geometry::Geometry;
use crate::partial::Partial;
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// The name of the single distinguished root frame every [`FrameSystem`]
/// is built around (§3).
pub const WORLD: &str = "world";

#[derive(Clone, Debug)]
pub struct FrameSystem {
    name: String,
    frames: HashMap<String, Frame>,
    parents: HashMap<String, String>,
    children: HashMap<String, Vec<String>>,
}

impl FrameSystem {
    pub fn new(name: impl Into<String>) -> Self {
        let mut frames = HashMap::new();
        frames.insert(WORLD.to_string(), Frame::Static(StaticFrame::new(WORLD, Pose::identity(), None)));
        Self {
            name: name.into(),
            frames,
            parents: HashMap::new(),
            children: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// O(1). Fails on a name collision, an unknown parent, or an attempt to
    /// reuse the reserved name `world` (§4.D).
    pub fn add_frame(&mut self, frame: Frame, parent: &str) -> Result<(), FrameError> {
        let name = frame.name().to_string();
        if name == WORLD {
            return Err(FrameError::DuplicateFrame(WORLD.to_string()));
        }
        if !self.frames.contains_key(parent) {
            return Err(FrameError::UnknownFrame(parent.to_string()));
        }

        // Walk from `parent` up to the root: if `name` already appears as
        // one of its own ancestors, inserting it here would close a cycle.
        let mut cursor = Some(parent.to_string());
        while let Some(current) = cursor {
            if current == name {
                warn!(frame = %name, parent, "rejected add_frame: would create a cycle");
                return Err(FrameError::CycleDetected(name, parent.to_string()));
            }
            cursor = self.parents.get(&current).cloned();
        }

        if self.frames.contains_key(&name) {
            return Err(FrameError::DuplicateFrame(name));
        }

        debug!(frame = %name, parent, "add_frame");
        self.frames.insert(name.clone(), frame);
        self.parents.insert(name.clone(), parent.to_string());
        self.children.entry(parent.to_string()).or_default().push(name);
        Ok(())
    }

    pub fn frame(&self, name: &str) -> Result<&Frame, FrameError> {
        self.frames.get(name).ok_or_else(|| FrameError::UnknownFrame(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.frames.contains_key(name)
    }

    pub fn frame_names(&self) -> Vec<&str> {
        self.frames.keys().map(String::as_str).collect()
    }

    /// `None` for `world`, which has no parent.
    pub fn parent(&self, name: &str) -> Option<&str> {
        self.parents.get(name).map(String::as_str)
    }

    pub fn children(&self, name: &str) -> Vec<&str> {
        self.children.get(name).map(|c| c.iter().map(String::as_str).collect()).unwrap_or_default()
    }

    /// Path from `name` up to `world`, ordered child-to-root, `name`
    /// included as the first element and `world` as the last (§4.D).
    pub fn traceback_frame(&self, name: &str) -> Result<Vec<String>, FrameError> {
        if !self.frames.contains_key(name) {
            return Err(FrameError::UnknownFrame(name.to_string()));
        }
        let mut path = vec![name.to_string()];
        let mut cursor = name.to_string();
        while let Some(parent) = self.parents.get(&cursor) {
            path.push(parent.clone());
            cursor = parent.clone();
        }
        Ok(path)
    }

    fn inputs_for(&self, inputs: &FrameSystemInputs, frame: &Frame) -> Result<Vec<f64>, FrameError> {
        match inputs.get(frame.name()) {
            Some(values) => Ok(values.clone()),
            None if frame.dof() == 0 => Ok(Vec::new()),
            None => Err(FrameError::MissingIntrinsics(
                frame.name().to_string(),
                "no inputs supplied for a non-zero-DoF frame".to_string(),
            )),
        }
    }

    /// Compose the pose of every hop from `leaf` up to (but not including)
    /// `ancestor`, nearest-to-`ancestor` first, matching the order
    /// `combine` expects for correct left-to-right group composition.
    fn compose_up_to(&self, inputs: &FrameSystemInputs, leaf: &str, ancestor: &str) -> Result<Partial<Pose>, FrameError> {
        let path = self.traceback_frame(leaf)?;
        let hops: Vec<&String> = path.iter().take_while(|n| n.as_str() != ancestor).collect();
        let mut pose = Pose::identity();
        let mut oob = Vec::new();
        for name in hops.into_iter().rev() {
            let frame = self.frame(name)?;
            let frame_inputs = self.inputs_for(inputs, frame)?;
            let hop = frame.transform(&frame_inputs)?;
            oob.extend(hop.oob_errors);
            pose = pose.combine(hop.value);
        }
        Ok(Partial::with_errors(pose, oob))
    }

    fn lowest_common_ancestor(&self, a: &str, b: &str) -> Result<String, FrameError> {
        let path_a = self.traceback_frame(a)?;
        let ancestors_b: std::collections::HashSet<&str> = self.traceback_frame(b)?.iter().map(String::as_str).collect();
        path_a
            .iter()
            .find(|n| ancestors_b.contains(n.as_str()))
            .cloned()
            .ok_or_else(|| FrameError::UnknownFrame(format!("no common ancestor of `{a}` and `{b}`")))
    }

    /// The pose of `source` expressed in `target`'s coordinates (§4.D).
    /// `transform(_, x, x)` returns the identity pose. If any intermediate
    /// frame reports an out-of-bounds input, the composed pose is still
    /// returned; the OOB errors are the union of every hop's (§4.D
    /// "Tie-breaks and edge cases").
    pub fn transform(&self, inputs: &FrameSystemInputs, source: &str, target: &str) -> Result<Partial<Pose>, FrameError> {
        trace!(source, target, "transform");
        if source == target {
            if !self.frames.contains_key(source) {
                return Err(FrameError::UnknownFrame(source.to_string()));
            }
            return Ok(Partial::ok(Pose::identity()));
        }
        let lca = self.lowest_common_ancestor(source, target)?;
        let source_in_lca = self.compose_up_to(inputs, source, &lca)?;
        let target_in_lca = self.compose_up_to(inputs, target, &lca)?;
        let mut oob = source_in_lca.oob_errors;
        oob.extend(target_in_lca.oob_errors);
        let pose = target_in_lca.value.inverse().combine(source_in_lca.value);
        Ok(Partial::with_errors(pose, oob))
    }

    /// Every geometry on the path from `frame` to `world`, each
    /// pre-transformed into `frame`'s coordinates (§4.D).
    pub fn geometries(&self, inputs: &FrameSystemInputs, frame: &str) -> Result<Partial<Vec<Geometry>>, FrameError> {
        let path = self.traceback_frame(frame)?;
        let mut collected = Vec::new();
        let mut oob: Vec<OobError> = Vec::new();

        for ancestor in &path {
            let ancestor_frame = self.frame(ancestor)?;
            let ancestor_inputs = self.inputs_for(inputs, ancestor_frame)?;
            let local = ancestor_frame.geometries(&ancestor_inputs)?;
            oob.extend(local.oob_errors);

            if ancestor == frame {
                collected.extend(local.value.into_geometries());
                continue;
            }
            let pose_in_frame = self.transform(inputs, ancestor, frame)?;
            oob.extend(pose_in_frame.oob_errors);
            collected.extend(local.value.geometries().iter().map(|g| g.transform(pose_in_frame.value)));
        }

        Ok(Partial::with_errors(collected, oob))
    }

    /// Graft `other`'s tree under `attach_to`. `other`'s own `world` is
    /// discarded; frames that were direct children of `other`'s `world`
    /// become children of `attach_to` instead. Fails on any name collision
    /// (§4.D).
    pub fn merge_frame_systems(&mut self, other: FrameSystem, attach_to: &str) -> Result<(), FrameError> {
        if !self.frames.contains_key(attach_to) {
            return Err(FrameError::UnknownFrame(attach_to.to_string()));
        }
        for name in other.frames.keys() {
            if name != WORLD && self.frames.contains_key(name) {
                return Err(FrameError::DuplicateFrame(name.clone()));
            }
        }
        debug!(attach_to, frames = other.frames.len(), "merge_frame_systems");
        for (name, frame) in other.frames {
            if name == WORLD {
                continue;
            }
            let parent = match other.parents.get(&name) {
                Some(p) if p == WORLD => attach_to.to_string(),
                Some(p) => p.clone(),
                None => attach_to.to_string(),
            };
            self.frames.insert(name.clone(), frame);
            self.parents.insert(name.clone(), parent.clone());
            self.children.entry(parent).or_default().push(name);
        }
        Ok(())
    }

    /// Returns the subtree rooted at `root` as a new, independent
    /// [`FrameSystem`], removing those frames from `self` (§4.D).
    pub fn divide_frame_system(&mut self, root: &str) -> Result<FrameSystem, FrameError> {
        if !self.frames.contains_key(root) {
            return Err(FrameError::UnknownFrame(root.to_string()));
        }
        if root == WORLD {
            return Err(FrameError::DuplicateFrame(WORLD.to_string()));
        }

        let mut subtree = vec![root.to_string()];
        let mut frontier = vec![root.to_string()];
        while let Some(name) = frontier.pop() {
            for child in self.children.get(&name).cloned().unwrap_or_default() {
                subtree.push(child.clone());
                frontier.push(child);
            }
        }

        debug!(root, count = subtree.len(), "divide_frame_system");

        let mut divided = FrameSystem::new(format!("{root}-subsystem"));
        let former_parent = self.parents.remove(root);
        if let Some(parent) = &former_parent {
            if let Some(siblings) = self.children.get_mut(parent) {
                siblings.retain(|n| n != root);
            }
        }

        for name in &subtree {
            let frame = self.frames.remove(name).expect("subtree name collected from live map");
            let parent = self.parents.remove(name);
            let children = self.children.remove(name).unwrap_or_default();
            let new_parent = if name == root { WORLD.to_string() } else { parent.expect("non-root subtree member has a parent") };
            divided.frames.insert(name.clone(), frame);
            divided.parents.insert(name.clone(), new_parent.clone());
            divided.children.entry(new_parent).or_default().push(name.clone());
        }

        Ok(divided)
    }

    /// Zero-valued input map covering every non-zero-DoF frame (§4.E).
    pub fn start_positions(&self) -> FrameSystemInputs {
        self.frames
            .values()
            .filter(|f| f.dof() > 0)
            .map(|f| (f.name().to_string(), vec![0.0; f.dof()]))
            .collect()
    }

    /// Component-wise linear blend between two input maps; angles are not
    /// wrap-corrected (§4.E).
    pub fn interpolate_inputs(a: &FrameSystemInputs, b: &FrameSystemInputs, t: f64) -> FrameSystemInputs {
        a.iter()
            .map(|(name, values)| {
                let other = b.get(name);
                let blended = values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| {
                        let o = other.and_then(|o| o.get(i)).copied().unwrap_or(*v);
                        v + (o - v) * t
                    })
                    .collect();
                (name.clone(), blended)
            })
            .collect()
    }

    /// Uniformly random input map across every frame's declared limits,
    /// substituting [`crate::frame::INFINITE_LIMIT_SAMPLE_BOUND`] for
    /// infinite bounds (§4.E, §9).
    pub fn random_inputs(&self, rng: &mut impl rand::Rng) -> FrameSystemInputs {
        self.frames
            .values()
            .filter(|f| f.dof() > 0)
            .map(|f| {
                let limits: Vec<Limit> = f.limits();
                (f.name().to_string(), limits.iter().map(|l| l.sample(rng)).collect())
            })
            .collect()
    }

    /// Every non-zero-DoF frame name and hop on the path `move_frame` →
    /// `goal_frame`, in path order — the union of DoF a planner must supply
    /// to drive that path (§4.D).
    pub fn new_solver_frame(
        &self,
        move_frame: &str,
        goal_frame: &str,
        start_configuration: &FrameSystemInputs,
    ) -> Result<SolverFrame, FrameError> {
        let lca = self.lowest_common_ancestor(move_frame, goal_frame)?;
        let mut hops: Vec<String> = self
            .traceback_frame(move_frame)?
            .into_iter()
            .take_while(|n| n != &lca)
            .collect();
        hops.extend(self.traceback_frame(goal_frame)?.into_iter().take_while(|n| n != &lca));

        let mut dof_frames = Vec::new();
        let mut limits = Vec::new();
        let mut start = Vec::new();
        for name in hops {
            let frame = self.frame(&name)?;
            if frame.dof() == 0 {
                continue;
            }
            limits.extend(frame.limits());
            let seed = start_configuration.get(&name).cloned().unwrap_or_else(|| vec![0.0; frame.dof()]);
            start.extend(seed);
            dof_frames.push((name, frame.dof()));
        }

        Ok(SolverFrame {
            move_frame: move_frame.to_string(),
            goal_frame: goal_frame.to_string(),
            dof_frames,
            limits,
            start,
        })
    }
}

/// A virtual frame whose DoF is the union of every DoF on a chosen
/// `move_frame` → `goal_frame` path (§4.D, glossary "Solver frame"). Not a
/// [`Frame`] variant — it is never added to a tree, only handed to a
/// planner alongside the [`FrameSystem`] it was derived from.
#[derive(Clone, Debug)]
pub struct SolverFrame {
    move_frame: String,
    goal_frame: String,
    dof_frames: Vec<(String, usize)>,
    limits: Vec<Limit>,
    start: Vec<f64>,
}

impl SolverFrame {
    pub fn move_frame(&self) -> &str {
        &self.move_frame
    }

    pub fn goal_frame(&self) -> &str {
        &self.goal_frame
    }

    pub fn dof(&self) -> usize {
        self.limits.len()
    }

    pub fn limits(&self) -> &[Limit] {
        &self.limits
    }

    pub fn start_configuration(&self) -> &[f64] {
        &self.start
    }

    /// Expand a flat input vector (ordered the same as [`Self::limits`])
    /// back into the per-frame [`FrameSystemInputs`] a [`FrameSystem`]
    /// query expects.
    pub fn expand_inputs(&self, combined: &[f64]) -> Result<FrameSystemInputs, FrameError> {
        if combined.len() != self.dof() {
            return Err(FrameError::InputLengthMismatch {
                frame: format!("solver({}->{})", self.move_frame, self.goal_frame),
                expected: self.dof(),
                actual: combined.len(),
            });
        }
        let mut inputs = FrameSystemInputs::new();
        let mut offset = 0;
        for (name, dof) in &self.dof_frames {
            inputs.insert(name.clone(), combined[offset..offset + dof].to_vec());
            offset += dof;
        }
        Ok(inputs)
    }
}

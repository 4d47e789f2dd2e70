//! Module containing the **Bounding Volume Hierarchy** (BVH) structure
//!
//! This is used to accelerate ray-surface intersection tests by narrowing the
//! search space, skipping surfaces that obviously can't be intersected.

use crate::core::types::Number;
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::surface::{Surface, SurfaceInstance};
use getset::CopyGetters;
use indextree::{Arena, NodeId};
use rand::Rng;
use rand_core::RngCore;
use crate::shared::ray::Ray;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while building a [BvhSurface].
///
/// Construction is the only fallible part of the tree; traversal is total.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum BvhBuildError {
    #[error("cannot build a bvh over an empty set of surfaces")]
    EmptyRange,
    #[error("surfaces {start}..{end} contain a member with no bounding box over times {time0}..{time1}")]
    UnboundedSurface {
        start: usize,
        end: usize,
        time0: Number,
        time1: Number,
    },
}

/// The type for each node in the BVH tree
///
/// Nodes are either a branch point [BvhNode::Branch] (whose two children the
/// arena tracks for us), or a leaf [BvhNode::Leaf] holding a surface. Every
/// node carries the box enclosing everything beneath it, precomputed over the
/// tree's fixed time window.
#[derive(Clone, Debug)]
enum BvhNode {
    Branch(Aabb),
    Leaf(Arc<SurfaceInstance>, Aabb),
}

impl BvhNode {
    fn aabb(&self) -> Aabb {
        match self {
            Self::Branch(aabb) | Self::Leaf(_, aabb) => *aabb,
        }
    }
}

/// A binary BVH over a set of shared surfaces, valid for one time window.
///
/// Built with the classic randomised median split: each level picks a uniform
/// random axis, sorts the surfaces by their boxes' minimum along it, and
/// recurses on the two halves. Spans of three or fewer surfaces are resolved
/// directly instead of sorting.
#[derive(Clone, Debug, CopyGetters)]
pub struct BvhSurface {
    arena: Arena<BvhNode>,
    root_id: NodeId,
    #[getset(get_copy = "pub")]
    aabb: Aabb,
}

// region Constructors

impl BvhSurface {
    /// Builds the tree over the given surfaces for the time window `[time0, time1]`.
    ///
    /// # Errors
    /// Fails if `surfaces` is empty, or if any surface cannot produce a
    /// bounding box over the window (the error names the offending range of
    /// input indices). An unbounded surface belongs in a plain
    /// [crate::surface::list::SurfaceList], not a BVH.
    pub fn new(
        surfaces: impl IntoIterator<Item = Arc<SurfaceInstance>>,
        time0: Number,
        time1: Number,
        rng: &mut dyn RngCore,
    ) -> Result<Self, BvhBuildError> {
        let mut entries = surfaces
            .into_iter()
            .map(|s| {
                let aabb = s.bounding_box(time0, time1);
                (s, aabb)
            })
            .collect::<Vec<_>>();
        if entries.is_empty() {
            return Err(BvhBuildError::EmptyRange);
        }

        debug!(target: "bvh", surfaces = entries.len(), "building bvh");

        // Leaves plus internal nodes of a binary tree
        let mut arena = Arena::with_capacity(2 * entries.len());
        let root_id = Self::build_range(&mut entries, 0, time0, time1, &mut arena, rng)?;
        let aabb = arena[root_id].get().aabb();

        Ok(Self { arena, root_id, aabb })
    }

    /// Recursively builds the subtree for `entries`, a sub-range of the input
    /// starting at index `offset` (tracked only so errors can name the range)
    fn build_range(
        entries: &mut [(Arc<SurfaceInstance>, Option<Aabb>)],
        offset: usize,
        time0: Number,
        time1: Number,
        arena: &mut Arena<BvhNode>,
        rng: &mut dyn RngCore,
    ) -> Result<NodeId, BvhBuildError> {
        let span = entries.len();
        let unbounded_err = || BvhBuildError::UnboundedSurface {
            start: offset,
            end: offset + span,
            time0,
            time1,
        };
        let leaf = |arena: &mut Arena<BvhNode>, (surface, aabb): &(Arc<SurfaceInstance>, Option<Aabb>)| {
            let aabb = aabb.ok_or_else(unbounded_err)?;
            Ok(arena.new_node(BvhNode::Leaf(surface.clone(), aabb)))
        };

        let axis = rng.gen_range(0..3_usize);

        let (left, right) = match span {
            0 => return Err(BvhBuildError::EmptyRange),
            // A lone surface becomes both children, so every branch stays binary
            1 => (leaf(arena, &entries[0])?, leaf(arena, &entries[0])?),
            // Order doesn't matter here; both children always get probed
            2 => (leaf(arena, &entries[0])?, leaf(arena, &entries[1])?),
            // Peel one off and recurse on the remaining pair
            3 => {
                let head = leaf(arena, &entries[0])?;
                let tail = Self::build_range(&mut entries[1..], offset + 1, time0, time1, arena, rng)?;
                (head, tail)
            }
            _ => {
                // Sorting needs every key up front, so surface the error before comparing
                if entries.iter().any(|(_, aabb)| aabb.is_none()) {
                    return Err(unbounded_err());
                }
                entries.sort_unstable_by(|(_, a), (_, b)| {
                    let key = |aabb: &Option<Aabb>| aabb.as_ref().map(|aabb| aabb.min()[axis]);
                    PartialOrd::partial_cmp(&key(a), &key(b))
                        .expect("should be able to cmp AABB bounds: should not be nan")
                });

                let mid = span / 2;
                let (head, tail) = entries.split_at_mut(mid);
                (
                    Self::build_range(head, offset, time0, time1, arena, rng)?,
                    Self::build_range(tail, offset + mid, time0, time1, arena, rng)?,
                )
            }
        };

        let aabb = Aabb::surrounding(arena[left].get().aabb(), arena[right].get().aabb());
        let node = arena.new_node(BvhNode::Branch(aabb));
        node.append(left, arena);
        node.append(right, arena);
        Ok(node)
    }
}

// endregion Constructors

// region Surface Impl

impl BvhSurface {
    /// Given a [NodeId] on the [Arena] tree, calculates the nearest
    /// intersection for the given `ray` and `interval`
    ///
    /// If the node is a [BvhNode::Leaf], it passes on the check to the surface.
    /// Otherwise, for a [BvhNode::Branch], it:
    ///     - Tries to bail early if the node's [Aabb] is missed
    ///     - Probes the left child
    ///     - Probes the right child, with the interval's far end shrunk to the
    ///       left child's hit (so the right probe can only return something closer)
    fn bvh_node_intersect(
        arena: &Arena<BvhNode>,
        node: NodeId,
        ray: &Ray,
        interval: &Interval<Number>,
        rng: &mut dyn RngCore,
    ) -> Option<Intersection> {
        match arena.get(node).expect("node should exist in arena").get() {
            BvhNode::Leaf(surface, aabb) => {
                if !aabb.hit(ray, interval) {
                    return None;
                }
                surface.intersect(ray, interval, rng)
            }
            BvhNode::Branch(aabb) => {
                if !aabb.hit(ray, interval) {
                    return None;
                }

                let mut children = node.children(arena);
                let (left, right) = (
                    children.next().expect("branch nodes always have two children"),
                    children.next().expect("branch nodes always have two children"),
                );

                let hit_left = Self::bvh_node_intersect(arena, left, ray, interval, rng);
                let shrunk = match &hit_left {
                    Some(hit) => interval.with_some_end(hit.dist),
                    None => *interval,
                };
                let hit_right = Self::bvh_node_intersect(arena, right, ray, &shrunk, rng);

                hit_right.or(hit_left)
            }
        }
    }
}

impl Surface for BvhSurface {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>, rng: &mut dyn RngCore) -> Option<Intersection> {
        Self::bvh_node_intersect(&self.arena, self.root_id, ray, interval, rng)
    }

    /// The box was computed over the tree's construction window; the time
    /// arguments can't tighten it further
    fn bounding_box(&self, _time0: Number, _time1: Number) -> Option<Aabb> { Some(self.aabb) }
}

// endregion Surface Impl

use crate::core::types::{Number, Point2, Point3, Vector3};
use crate::material::MaterialInstance;
use crate::shared::ray::Ray;
use std::cmp::Ordering;
use std::sync::Arc;

/// A struct representing a ray-surface intersection
#[derive(Clone, Debug)]
pub struct Intersection {
    /// The position in world coordinates of the intersection
    pub pos_w: Point3,
    /// Surface normal at the intersection.
    /// This points in the *outwards* direction, irrespective of the incident ray
    pub normal: Vector3,
    /// Surface normal at the intersection.
    /// This points in the *opposite* direction to the incident ray
    pub ray_normal: Vector3,
    /// Whether the incident ray hit the outside of the surface
    /// (`true` iff `normal == ray_normal`)
    pub front_face: bool,
    /// Distance along the ray that the intersection occurred, in multiples of
    /// the ray's direction vector
    pub dist: Number,
    /// The UV coordinates for the point on the surface, used for texture mapping
    pub uv: Point2,
    /// The material at the intersected surface, shared with the surface itself
    pub material: Arc<MaterialInstance>,
}

/// Given the geometric (outward) normal, returns `(ray_normal, front_face)`
/// for the incident ray
pub fn orient_normal(ray: &Ray, outward_normal: Vector3) -> (Vector3, bool) {
    let front_face = Vector3::dot(ray.dir(), outward_normal) < 0.;
    let ray_normal = if front_face { outward_normal } else { -outward_normal };
    (ray_normal, front_face)
}

// Material is deliberately ignored for comparisons: intersections are ordered
// and compared geometrically
impl PartialEq for Intersection {
    fn eq(&self, other: &Self) -> bool {
        self.pos_w == other.pos_w
            && self.normal == other.normal
            && self.ray_normal == other.ray_normal
            && self.front_face == other.front_face
            && self.dist == other.dist
            && self.uv == other.uv
    }
}

impl Eq for Intersection {}

impl PartialOrd for Intersection {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Intersection {
    fn cmp(&self, other: &Self) -> Ordering {
        Number::partial_cmp(&self.dist, &other.dist)
            .expect("couldn't compare intersection distances: invariant `.dist != NaN` failed")
    }
}

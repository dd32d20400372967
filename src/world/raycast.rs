//! Ray casting against world geometry.
//!
//! The coverage evaluator needs two kinds of ray queries:
//! - a vertical ray per cell at grid build time (is this cell under an obstacle?)
//! - a line-of-sight check from an agent to a cell during evaluation
//!
//! Both go through the [`Raycaster`] trait so the host world (an engine, a
//! height map, a test fixture) decides what geometry exists. [`BoxWorld`] is a
//! self-contained implementation with axis-aligned box obstacles and an
//! optional ground plane.

use crate::core::{Bounds3, Point3};

/// Bit set of collision layers a ray may hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches nothing
    pub const NONE: LayerMask = LayerMask(0);
    /// Static obstacles (buildings, trees, canopies)
    pub const OBSTACLE: LayerMask = LayerMask(1 << 0);
    /// Ground / terrain surface
    pub const GROUND: LayerMask = LayerMask(1 << 1);
    /// Matches everything
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Does this mask share any bit with `other`?
    #[inline]
    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }

    /// Union of two masks
    #[inline]
    pub fn union(self, other: LayerMask) -> LayerMask {
        LayerMask(self.0 | other.0)
    }
}

/// Result of a ray hitting a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastHit {
    /// Distance from ray origin to the hit point.
    pub distance: f32,
    /// The hit point in world coordinates.
    pub point: Point3,
    /// Layer of the surface that was hit.
    pub layer: LayerMask,
}

/// Obstacle / ground ray query collaborator.
pub trait Raycaster {
    /// Cast a ray and return the closest hit on any layer in `layers`.
    ///
    /// `direction` need not be normalized. Hits further than `max_distance`
    /// are ignored.
    fn raycast(
        &self,
        origin: Point3,
        direction: Point3,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<RaycastHit>;
}

/// A world with nothing in it. Every ray misses.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOcclusion;

impl Raycaster for NoOcclusion {
    fn raycast(&self, _: Point3, _: Point3, _: f32, _: LayerMask) -> Option<RaycastHit> {
        None
    }
}

/// One axis-aligned obstacle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxObstacle {
    /// Extent of the obstacle
    pub bounds: Bounds3,
    /// Collision layer
    pub layer: LayerMask,
}

/// Axis-aligned box obstacles over an optional horizontal ground plane.
#[derive(Clone, Debug, Default)]
pub struct BoxWorld {
    obstacles: Vec<BoxObstacle>,
    ground_level: Option<f32>,
}

impl BoxWorld {
    /// Create an empty world without a ground plane.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ground plane at the given altitude (GROUND layer).
    pub fn with_ground(mut self, ground_level: f32) -> Self {
        self.ground_level = Some(ground_level);
        self
    }

    /// Add an obstacle on the OBSTACLE layer.
    pub fn add_obstacle(&mut self, bounds: Bounds3) {
        self.obstacles.push(BoxObstacle {
            bounds,
            layer: LayerMask::OBSTACLE,
        });
    }

    /// Builder form of [`BoxWorld::add_obstacle`].
    pub fn with_obstacle(mut self, bounds: Bounds3) -> Self {
        self.add_obstacle(bounds);
        self
    }

    /// Registered obstacles.
    pub fn obstacles(&self) -> &[BoxObstacle] {
        &self.obstacles
    }

    /// Ground plane altitude, if any.
    pub fn ground_level(&self) -> Option<f32> {
        self.ground_level
    }
}

impl Raycaster for BoxWorld {
    fn raycast(
        &self,
        origin: Point3,
        direction: Point3,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<RaycastHit> {
        let dir = direction.normalize();
        if dir == Point3::ZERO || !(max_distance > 0.0) {
            return None;
        }

        let mut closest: Option<(f32, LayerMask)> = None;

        for obstacle in &self.obstacles {
            if !obstacle.layer.intersects(layers) {
                continue;
            }
            if let Some(t) = ray_box_entry(origin, dir, &obstacle.bounds) {
                if t <= max_distance && closest.is_none_or(|(best, _)| t < best) {
                    closest = Some((t, obstacle.layer));
                }
            }
        }

        if let Some(ground) = self.ground_level {
            if layers.intersects(LayerMask::GROUND) && dir.y < 0.0 && origin.y >= ground {
                let t = (ground - origin.y) / dir.y;
                if t <= max_distance && closest.is_none_or(|(best, _)| t < best) {
                    closest = Some((t, LayerMask::GROUND));
                }
            }
        }

        closest.map(|(distance, layer)| RaycastHit {
            distance,
            point: origin + dir * distance,
            layer,
        })
    }
}

/// Slab test: distance along a unit ray to where it enters the box.
///
/// Returns 0 when the origin is already inside.
fn ray_box_entry(origin: Point3, dir: Point3, bounds: &Bounds3) -> Option<f32> {
    let mut t_min = 0.0_f32;
    let mut t_max = f32::INFINITY;

    let axes = [
        (origin.x, dir.x, bounds.min.x, bounds.max.x),
        (origin.y, dir.y, bounds.min.y, bounds.max.y),
        (origin.z, dir.z, bounds.min.z, bounds.max.z),
    ];

    for (o, d, lo, hi) in axes {
        if d.abs() < 1e-9 {
            // Parallel to this slab: must already be inside it
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (lo - o) * inv;
        let mut t1 = (hi - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }

    Some(t_min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tower() -> Bounds3 {
        Bounds3::new(Point3::new(-1.0, 0.0, -1.0), Point3::new(1.0, 10.0, 1.0))
    }

    #[test]
    fn test_no_occlusion_misses() {
        let world = NoOcclusion;
        assert!(
            world
                .raycast(Point3::ZERO, Point3::DOWN, 100.0, LayerMask::ALL)
                .is_none()
        );
    }

    #[test]
    fn test_vertical_hit_on_box_top() {
        let world = BoxWorld::new().with_obstacle(tower());
        let hit = world
            .raycast(
                Point3::new(0.0, 30.0, 0.0),
                Point3::DOWN,
                30.0,
                LayerMask::OBSTACLE,
            )
            .unwrap();
        assert_relative_eq!(hit.distance, 20.0, epsilon = 1e-4);
        assert_relative_eq!(hit.point.y, 10.0, epsilon = 1e-4);
        assert_eq!(hit.layer, LayerMask::OBSTACLE);
    }

    #[test]
    fn test_miss_beside_box() {
        let world = BoxWorld::new().with_obstacle(tower());
        let hit = world.raycast(
            Point3::new(5.0, 30.0, 0.0),
            Point3::DOWN,
            30.0,
            LayerMask::OBSTACLE,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_layer_filtering() {
        let world = BoxWorld::new().with_obstacle(tower()).with_ground(0.0);
        let origin = Point3::new(5.0, 30.0, 0.0);

        assert!(
            world
                .raycast(origin, Point3::DOWN, 100.0, LayerMask::OBSTACLE)
                .is_none()
        );
        let ground = world
            .raycast(origin, Point3::DOWN, 100.0, LayerMask::GROUND)
            .unwrap();
        assert_eq!(ground.layer, LayerMask::GROUND);
        assert_relative_eq!(ground.distance, 30.0, epsilon = 1e-4);
    }

    #[test]
    fn test_max_distance_respected() {
        let world = BoxWorld::new().with_obstacle(tower());
        let hit = world.raycast(
            Point3::new(0.0, 30.0, 0.0),
            Point3::DOWN,
            15.0,
            LayerMask::OBSTACLE,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_origin_inside_box() {
        let world = BoxWorld::new().with_obstacle(tower());
        let hit = world
            .raycast(
                Point3::new(0.0, 5.0, 0.0),
                Point3::DOWN,
                10.0,
                LayerMask::OBSTACLE,
            )
            .unwrap();
        assert_eq!(hit.distance, 0.0);
    }

    #[test]
    fn test_oblique_ray_blocked() {
        let world = BoxWorld::new().with_obstacle(tower());
        // From above one side to the ground on the other side, through the tower
        let origin = Point3::new(-10.0, 5.0, 0.0);
        let target = Point3::new(10.0, 5.0, 0.0);
        let dir = target - origin;
        let hit = world
            .raycast(origin, dir, dir.length(), LayerMask::OBSTACLE)
            .unwrap();
        assert_relative_eq!(hit.distance, 9.0, epsilon = 1e-4);
    }

    #[test]
    fn test_zero_direction() {
        let world = BoxWorld::new().with_obstacle(tower());
        assert!(
            world
                .raycast(Point3::ZERO, Point3::ZERO, 10.0, LayerMask::ALL)
                .is_none()
        );
    }
}

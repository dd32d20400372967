//! Ground height collaborator.

/// Ground height lookup used when waypoints follow the terrain contour.
pub trait TerrainHeight {
    /// Ground altitude at world position (x, z).
    fn height_at(&self, x: f32, z: f32) -> f32;
}

/// Flat ground at altitude 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlatTerrain;

impl TerrainHeight for FlatTerrain {
    #[inline]
    fn height_at(&self, _x: f32, _z: f32) -> f32 {
        0.0
    }
}

/// Any `Fn(x, z) -> height` closure is a terrain.
impl<F> TerrainHeight for F
where
    F: Fn(f32, f32) -> f32,
{
    #[inline]
    fn height_at(&self, x: f32, z: f32) -> f32 {
        self(x, z)
    }
}

//! World collaborators: ray queries and ground height.
//!
//! The planning and coverage code never owns scene geometry. It asks these
//! traits, and the host supplies an implementation (or the bundled
//! [`BoxWorld`] / [`FlatTerrain`] defaults).

mod raycast;
mod terrain;

pub use raycast::{BoxObstacle, BoxWorld, LayerMask, NoOcclusion, RaycastHit, Raycaster};
pub use terrain::{FlatTerrain, TerrainHeight};

//! Simplex geometry and composition sampling for ternary/quaternary diagrams.
//!
//! An n-component composition (non-negative parts summing to 1) is a point on
//! the standard (n−1)-simplex. This crate embeds that simplex as a regular
//! shape in Cartesian space (unit triangle for n=3, unit tetrahedron for n=4),
//! projects compositions onto it barycentrically, and assembles render-ready
//! scenes (points, color weights, outline edges, vertex labels) for a plotting
//! front end.

pub mod api;
pub mod compose;
pub mod geom;
pub mod scene;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports; the rendering layer speaks nalgebra vectors.
pub use geom::{Embedding, SimplexError, Tet, Tri};
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::compose::rand::{
        sample_batch, CompositionSample, CompositionSampler, DirichletParams, DirichletSampler,
        RatioParams, ReplayToken, SampleError, UniformRatioSampler,
    };
    pub use crate::compose::{ComposeError, Composition};
    pub use crate::geom::{
        complete_edges, project, Embedding, ProjectedPoint, SimplexEmbedding, SimplexError, Tet,
        Tri,
    };
    pub use crate::scene::{Scene, SceneError, TetScene, TriScene};
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}

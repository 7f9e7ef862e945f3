//! Curated API surface for callers (diagram front ends, experiments).
//!
//! Prefer these re-exports for clarity and consistency across binaries; the
//! module tree stays free to reorganize underneath.

// Simplex geometry
pub use crate::geom::{
    complete_edges, project, Embedding, ProjectedPoint, SimplexEmbedding, SimplexError, Tet, Tri,
};
// Compositions and samplers
pub use crate::compose::rand::{
    sample_batch, CompositionSample, CompositionSampler, DirichletParams, DirichletSampler,
    RatioParams, ReplayToken, SampleError, UniformRatioSampler,
};
pub use crate::compose::{ComposeError, Composition};
// Diagram scenes
pub use crate::scene::{Scene, SceneError, TetScene, TriScene};

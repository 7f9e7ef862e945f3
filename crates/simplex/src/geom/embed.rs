//! Vertex tables for regular simplex embeddings and the outline edge table.
//!
//! The embedding fixes one reference vertex per component so that pure
//! compositions land on the vertices and mixtures land inside the hull. All
//! pairwise vertex distances are 1; any congruent embedding would do, these
//! coordinates keep the triangle on the x-axis and the tetrahedron above it.

use std::fmt;

use nalgebra::{Const, DimMin, SMatrix, SVector, Vector2, Vector3};

use super::cfg::{DEGEN_EPS, MEMBER_EPS};

/// Errors surfaced by embedding construction and projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimplexError {
    /// Component count outside the supported set {3, 4}.
    InvalidDimension { components: usize },
    /// Composition length does not match the vertex count.
    DimensionMismatch { composition: usize, vertices: usize },
}

impl fmt::Display for SimplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimplexError::InvalidDimension { components } => {
                write!(f, "unsupported component count {components} (need 3 or 4)")
            }
            SimplexError::DimensionMismatch {
                composition,
                vertices,
            } => write!(
                f,
                "composition has {composition} parts but the vertex table has {vertices}"
            ),
        }
    }
}

impl std::error::Error for SimplexError {}

/// Regular (N−1)-simplex embedded in R^D, one vertex per component.
///
/// Invariants:
/// - `D == N − 1`; the vertex table is never mutated after construction.
/// - Constructors produce unit edge length (all pairwise distances 1).
#[derive(Clone, Debug, PartialEq)]
pub struct Embedding<const N: usize, const D: usize> {
    verts: [SVector<f64, D>; N],
}

/// Unit triangle for 3-component systems.
pub type Tri = Embedding<3, 2>;
/// Unit tetrahedron for 4-component systems.
pub type Tet = Embedding<4, 3>;

impl Tri {
    /// Equilateral triangle with side 1 sitting on the x-axis.
    pub fn regular() -> Self {
        let h = 3f64.sqrt() / 2.0;
        Self {
            verts: [
                Vector2::new(0.0, 0.0),
                Vector2::new(1.0, 0.0),
                Vector2::new(0.5, h),
            ],
        }
    }
}

impl Tet {
    /// Regular tetrahedron with edge 1; base is the `Tri::regular` triangle.
    pub fn regular() -> Self {
        Self {
            verts: [
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.5, 3f64.sqrt() / 2.0, 0.0),
                Vector3::new(0.5, 3f64.sqrt() / 6.0, 6f64.sqrt() / 3.0),
            ],
        }
    }
}

impl<const N: usize, const D: usize> Embedding<N, D> {
    #[inline]
    pub fn vertices(&self) -> &[SVector<f64, D>; N] {
        &self.verts
    }

    #[inline]
    pub fn vertex(&self, index: usize) -> SVector<f64, D> {
        self.verts[index]
    }

    /// Outline segments: every unordered vertex pair.
    #[inline]
    pub fn edges(&self) -> Vec<(usize, usize)> {
        complete_edges(N)
    }
}

// The inverse map needs a square LU solve; the `DimMin` bound lets nalgebra
// type-check it for a generic ambient dimension.
impl<const N: usize, const D: usize> Embedding<N, D>
where
    Const<D>: DimMin<Const<D>, Output = Const<D>>,
{
    /// Recover barycentric weights of a Cartesian point.
    ///
    /// The affine system is square (`N == D + 1`), so the weights are unique.
    /// `None` if the vertex table is degenerate.
    pub fn barycentric(&self, point: SVector<f64, D>) -> Option<SVector<f64, N>> {
        debug_assert_eq!(N, D + 1);
        let cols: Vec<SVector<f64, D>> =
            (1..N).map(|i| self.verts[i] - self.verts[0]).collect();
        let m = SMatrix::<f64, D, D>::from_columns(&cols);
        if m.determinant().abs() < DEGEN_EPS {
            return None;
        }
        let rest = m.lu().solve(&(point - self.verts[0]))?;
        let mut weights = SVector::<f64, N>::zeros();
        let mut tail = 0.0;
        for i in 1..N {
            weights[i] = rest[i - 1];
            tail += rest[i - 1];
        }
        weights[0] = 1.0 - tail;
        Some(weights)
    }

    /// Hull membership within `eps` slack on the recovered weights.
    pub fn contains_eps(&self, point: SVector<f64, D>, eps: f64) -> bool {
        match self.barycentric(point) {
            Some(w) => w.iter().all(|&wi| wi >= -eps),
            None => false,
        }
    }

    /// Hull membership with the default slack.
    #[inline]
    pub fn contains(&self, point: SVector<f64, D>) -> bool {
        self.contains_eps(point, MEMBER_EPS)
    }
}

/// Every unordered pair `{i, j}` with `i < j`: the complete graph on `n`
/// vertices, `n·(n−1)/2` entries in lexicographic order.
pub fn complete_edges(n: usize) -> Vec<(usize, usize)> {
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push((i, j));
        }
    }
    edges
}

/// Cartesian point of a dimension-erased projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProjectedPoint {
    Planar(Vector2<f64>),
    Spatial(Vector3<f64>),
}

impl ProjectedPoint {
    /// Coordinates as a slice (length 2 or 3).
    pub fn coords(&self) -> &[f64] {
        match self {
            ProjectedPoint::Planar(p) => p.as_slice(),
            ProjectedPoint::Spatial(p) => p.as_slice(),
        }
    }
}

/// Embedding selected from a runtime component count.
///
/// This is the dimension-erased surface for callers that read `n` from
/// configuration; statically typed code should use `Tri`/`Tet` directly.
#[derive(Clone, Debug, PartialEq)]
pub enum SimplexEmbedding {
    Ternary(Tri),
    Quaternary(Tet),
}

impl SimplexEmbedding {
    /// Build the vertex table for an `n`-component system.
    pub fn for_components(n: usize) -> Result<Self, SimplexError> {
        match n {
            3 => Ok(SimplexEmbedding::Ternary(Tri::regular())),
            4 => Ok(SimplexEmbedding::Quaternary(Tet::regular())),
            _ => Err(SimplexError::InvalidDimension { components: n }),
        }
    }

    #[inline]
    pub fn components(&self) -> usize {
        match self {
            SimplexEmbedding::Ternary(_) => 3,
            SimplexEmbedding::Quaternary(_) => 4,
        }
    }

    #[inline]
    pub fn ambient_dim(&self) -> usize {
        self.components() - 1
    }

    pub fn edges(&self) -> Vec<(usize, usize)> {
        complete_edges(self.components())
    }

    pub fn vertex_points(&self) -> Vec<ProjectedPoint> {
        match self {
            SimplexEmbedding::Ternary(e) => e
                .vertices()
                .iter()
                .map(|v| ProjectedPoint::Planar(*v))
                .collect(),
            SimplexEmbedding::Quaternary(e) => e
                .vertices()
                .iter()
                .map(|v| ProjectedPoint::Spatial(*v))
                .collect(),
        }
    }

    /// Project a raw composition slice; length must match the vertex count.
    pub fn project(&self, composition: &[f64]) -> Result<ProjectedPoint, SimplexError> {
        match self {
            SimplexEmbedding::Ternary(e) => {
                super::project(composition, e.vertices()).map(ProjectedPoint::Planar)
            }
            SimplexEmbedding::Quaternary(e) => {
                super::project(composition, e.vertices()).map(ProjectedPoint::Spatial)
            }
        }
    }
}

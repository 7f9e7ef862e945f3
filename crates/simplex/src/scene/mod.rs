//! Render-ready scenes: projected points, color weights, outline, labels.
//!
//! A scene is exactly what a plotting front end needs to draw a composition
//! diagram: the projected point cloud, one color scalar per point (a chosen
//! component's weight), the simplex outline as straight segments, and one
//! label per vertex. It holds no styling and performs no I/O.

use std::fmt;

use nalgebra::SVector;

use crate::compose::Composition;
use crate::geom::Embedding;

/// Errors from scene assembly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneError {
    /// Color component index outside the component range.
    ColorComponentOutOfRange { index: usize, components: usize },
    /// Label count does not match the component count.
    LabelCountMismatch { labels: usize, components: usize },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::ColorComponentOutOfRange { index, components } => write!(
                f,
                "color component {index} out of range for {components} components"
            ),
            SceneError::LabelCountMismatch { labels, components } => {
                write!(f, "{labels} labels given for {components} components")
            }
        }
    }
}

impl std::error::Error for SceneError {}

/// Projected diagram contents for an N-component system in R^D.
#[derive(Clone, Debug)]
pub struct Scene<const N: usize, const D: usize> {
    embedding: Embedding<N, D>,
    points: Vec<SVector<f64, D>>,
    weights: Vec<f64>,
    labels: Vec<String>,
}

/// Ternary diagram scene.
pub type TriScene = Scene<3, 2>;
/// Quaternary diagram scene.
pub type TetScene = Scene<4, 3>;

impl<const N: usize, const D: usize> Scene<N, D> {
    /// Project a batch and keep `color_component`'s weight per point for the
    /// color scale. Labels default to A, B, C, …
    pub fn from_compositions(
        embedding: Embedding<N, D>,
        compositions: &[Composition<N>],
        color_component: usize,
    ) -> Result<Self, SceneError> {
        if color_component >= N {
            return Err(SceneError::ColorComponentOutOfRange {
                index: color_component,
                components: N,
            });
        }
        let points = embedding.project_batch(compositions);
        let weights = compositions
            .iter()
            .map(|c| c.part(color_component))
            .collect();
        let labels = (0..N)
            .map(|i| char::from(b'A' + i as u8).to_string())
            .collect();
        Ok(Self {
            embedding,
            points,
            weights,
            labels,
        })
    }

    /// Replace the vertex labels (one per component).
    pub fn with_labels(mut self, labels: Vec<String>) -> Result<Self, SceneError> {
        if labels.len() != N {
            return Err(SceneError::LabelCountMismatch {
                labels: labels.len(),
                components: N,
            });
        }
        self.labels = labels;
        Ok(self)
    }

    #[inline]
    pub fn embedding(&self) -> &Embedding<N, D> {
        &self.embedding
    }

    #[inline]
    pub fn points(&self) -> &[SVector<f64, D>] {
        &self.points
    }

    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    #[inline]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Min/max of the color weights; (0, 1) for an empty scene.
    pub fn weight_range(&self) -> (f64, f64) {
        if self.weights.is_empty() {
            return (0.0, 1.0);
        }
        let lo = self.weights.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = self
            .weights
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        (lo, hi)
    }

    /// Outline of the simplex: one straight segment per vertex pair.
    pub fn edge_segments(&self) -> Vec<(SVector<f64, D>, SVector<f64, D>)> {
        self.embedding
            .edges()
            .into_iter()
            .map(|(i, j)| (self.embedding.vertex(i), self.embedding.vertex(j)))
            .collect()
    }

    /// Componentwise bounding box over vertices and points, padded by
    /// `margin` on every side. Suits axis ranges directly.
    pub fn bounds(&self, margin: f64) -> (SVector<f64, D>, SVector<f64, D>) {
        let mut lo = SVector::<f64, D>::repeat(f64::INFINITY);
        let mut hi = SVector::<f64, D>::repeat(f64::NEG_INFINITY);
        for p in self.embedding.vertices().iter().chain(self.points.iter()) {
            for d in 0..D {
                lo[d] = lo[d].min(p[d]);
                hi[d] = hi[d].max(p[d]);
            }
        }
        (lo.add_scalar(-margin), hi.add_scalar(margin))
    }
}

//! Barycentric projection: compositions as weights over a vertex table.

use nalgebra::SVector;

use super::embed::{Embedding, SimplexError};
use crate::compose::Composition;

/// Weighted sum `Σ composition[i] · vertices[i]`.
///
/// The composition is treated as barycentric weights. No renormalization
/// happens here: weights that do not sum to 1 (or go negative) produce a
/// point outside the simplex hull. Callers that want the fail-fast contract
/// go through [`Composition`] instead of raw slices.
pub fn project<const D: usize>(
    composition: &[f64],
    vertices: &[SVector<f64, D>],
) -> Result<SVector<f64, D>, SimplexError> {
    if composition.len() != vertices.len() {
        return Err(SimplexError::DimensionMismatch {
            composition: composition.len(),
            vertices: vertices.len(),
        });
    }
    let mut point = SVector::<f64, D>::zeros();
    for (w, v) in composition.iter().zip(vertices) {
        point += v * *w;
    }
    Ok(point)
}

impl<const N: usize, const D: usize> Embedding<N, D> {
    /// Typed projection; lengths agree by construction, so this cannot fail.
    #[inline]
    pub fn project(&self, composition: &Composition<N>) -> SVector<f64, D> {
        let mut point = SVector::<f64, D>::zeros();
        for (i, v) in self.vertices().iter().enumerate() {
            point += v * composition.part(i);
        }
        point
    }

    /// Projection mapped over a batch, order-preserving.
    pub fn project_batch(&self, compositions: &[Composition<N>]) -> Vec<SVector<f64, D>> {
        compositions.iter().map(|c| self.project(c)).collect()
    }
}

use super::*;
use crate::compose::Composition;
use nalgebra::{SVector, Vector2, Vector3};
use proptest::prelude::*;

fn pairwise_distances<const N: usize, const D: usize>(e: &Embedding<N, D>) -> Vec<f64> {
    let mut out = Vec::new();
    let verts = e.vertices();
    for i in 0..N {
        for j in (i + 1)..N {
            out.push((verts[i] - verts[j]).norm());
        }
    }
    out
}

#[test]
fn regular_embeddings_have_unit_edges() {
    for d in pairwise_distances(&Tri::regular()) {
        assert!((d - 1.0).abs() < 1e-12);
    }
    let tet_dists = pairwise_distances(&Tet::regular());
    assert_eq!(tet_dists.len(), 6);
    for d in tet_dists {
        assert!((d - 1.0).abs() < 1e-12);
    }
}

#[test]
fn complete_edges_cover_all_pairs() {
    assert_eq!(complete_edges(3), vec![(0, 1), (0, 2), (1, 2)]);
    let e4 = complete_edges(4);
    assert_eq!(e4.len(), 6);
    for n in [3usize, 4, 5] {
        let edges = complete_edges(n);
        assert_eq!(edges.len(), n * (n - 1) / 2);
        // Unique, ordered pairs; every index appears.
        let mut seen = std::collections::HashSet::new();
        let mut touched = vec![false; n];
        for (i, j) in edges {
            assert!(i < j && j < n);
            assert!(seen.insert((i, j)));
            touched[i] = true;
            touched[j] = true;
        }
        assert!(touched.iter().all(|&t| t));
    }
}

#[test]
fn pure_components_project_onto_vertices() {
    let tri = Tri::regular();
    for i in 0..3 {
        assert_eq!(tri.project(&Composition::pure(i)), tri.vertex(i));
    }
    let tet = Tet::regular();
    for i in 0..4 {
        assert_eq!(tet.project(&Composition::pure(i)), tet.vertex(i));
    }
}

#[test]
fn concrete_triangle_cases() {
    // The reference vertex table from the ternary diagram.
    let verts = [
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(0.5, 0.866),
    ];
    let a = project(&[1.0, 0.0, 0.0], &verts).unwrap();
    assert_eq!(a, Vector2::new(0.0, 0.0));
    let c = project(&[0.0, 0.0, 1.0], &verts).unwrap();
    assert_eq!(c, Vector2::new(0.5, 0.866));
    let centroid = project(&[1.0 / 3.0; 3], &verts).unwrap();
    assert!((centroid - Vector2::new(0.5, 0.2887)).norm() < 1e-4);
}

#[test]
fn centroid_of_regular_tetrahedron() {
    let tet = Tet::regular();
    let centroid = tet.project(&Composition::uniform());
    let mean = (tet.vertex(0) + tet.vertex(1) + tet.vertex(2) + tet.vertex(3)) / 4.0;
    assert!((centroid - mean).norm() < 1e-12);
}

#[test]
fn length_mismatch_is_rejected() {
    let tet = Tet::regular();
    let err = project(&[0.5, 0.5, 0.0], tet.vertices()).unwrap_err();
    assert_eq!(
        err,
        SimplexError::DimensionMismatch {
            composition: 3,
            vertices: 4,
        }
    );
}

#[test]
fn runtime_selection_by_component_count() {
    let tri = SimplexEmbedding::for_components(3).unwrap();
    assert_eq!(tri.components(), 3);
    assert_eq!(tri.ambient_dim(), 2);
    assert_eq!(tri.edges().len(), 3);

    let tet = SimplexEmbedding::for_components(4).unwrap();
    assert_eq!(tet.components(), 4);
    assert_eq!(tet.edges().len(), 6);
    assert_eq!(tet.vertex_points().len(), 4);

    for n in [0usize, 1, 2, 5, 9] {
        assert_eq!(
            SimplexEmbedding::for_components(n),
            Err(SimplexError::InvalidDimension { components: n })
        );
    }
}

#[test]
fn runtime_projection_is_dimension_checked() {
    let tet = SimplexEmbedding::for_components(4).unwrap();
    match tet.project(&[0.25, 0.25, 0.25, 0.25]).unwrap() {
        ProjectedPoint::Spatial(p) => assert_eq!(p.as_slice().len(), 3),
        ProjectedPoint::Planar(_) => panic!("expected a spatial point"),
    }
    assert!(matches!(
        tet.project(&[0.5, 0.5, 0.0]),
        Err(SimplexError::DimensionMismatch {
            composition: 3,
            vertices: 4,
        })
    ));
    let tri = SimplexEmbedding::for_components(3).unwrap();
    let p = tri.project(&[0.0, 1.0, 0.0]).unwrap();
    assert_eq!(p.coords(), &[1.0, 0.0]);
}

#[test]
fn barycentric_inverts_projection() {
    let tri = Tri::regular();
    let c = Composition::new([0.2, 0.3, 0.5]).unwrap();
    let w = tri.barycentric(tri.project(&c)).unwrap();
    for i in 0..3 {
        assert!((w[i] - c.part(i)).abs() < 1e-12);
    }

    let tet = Tet::regular();
    let c = Composition::new([0.1, 0.2, 0.3, 0.4]).unwrap();
    let w = tet.barycentric(tet.project(&c)).unwrap();
    for i in 0..4 {
        assert!((w[i] - c.part(i)).abs() < 1e-12);
    }
}

#[test]
fn hull_membership() {
    let tri = Tri::regular();
    assert!(tri.contains(tri.project(&Composition::uniform())));
    assert!(tri.contains(tri.vertex(0)));
    assert!(!tri.contains(Vector2::new(-0.5, -0.5)));
    assert!(!tri.contains(Vector2::new(0.5, 1.5)));

    let tet = Tet::regular();
    assert!(tet.contains(tet.project(&Composition::uniform())));
    assert!(!tet.contains(Vector3::new(0.5, 0.3, -0.2)));
}

#[test]
fn batch_projection_preserves_order() {
    let tri = Tri::regular();
    let comps = vec![
        Composition::pure(2),
        Composition::uniform(),
        Composition::new([0.7, 0.2, 0.1]).unwrap(),
    ];
    let batch = tri.project_batch(&comps);
    assert_eq!(batch.len(), comps.len());
    for (point, comp) in batch.iter().zip(&comps) {
        assert_eq!(*point, tri.project(comp));
    }
}

fn blend<const N: usize>(a: f64, c1: &Composition<N>, c2: &Composition<N>) -> [f64; N] {
    std::array::from_fn(|i| a * c1.part(i) + (1.0 - a) * c2.part(i))
}

proptest! {
    #[test]
    fn ternary_projections_stay_in_hull(raw in prop::array::uniform3(0.0f64..1.0)) {
        prop_assume!(raw.iter().sum::<f64>() > 1e-6);
        let tri = Tri::regular();
        let c = Composition::normalized(raw).unwrap();
        prop_assert!(tri.contains(tri.project(&c)));
    }

    #[test]
    fn quaternary_projections_stay_in_hull(raw in prop::array::uniform4(0.0f64..1.0)) {
        prop_assume!(raw.iter().sum::<f64>() > 1e-6);
        let tet = Tet::regular();
        let c = Composition::normalized(raw).unwrap();
        prop_assert!(tet.contains(tet.project(&c)));
    }

    #[test]
    fn projection_is_linear_in_the_composition(
        raw1 in prop::array::uniform3(0.0f64..1.0),
        raw2 in prop::array::uniform3(0.0f64..1.0),
        a in 0.0f64..=1.0,
    ) {
        prop_assume!(raw1.iter().sum::<f64>() > 1e-6);
        prop_assume!(raw2.iter().sum::<f64>() > 1e-6);
        let tri = Tri::regular();
        let c1 = Composition::normalized(raw1).unwrap();
        let c2 = Composition::normalized(raw2).unwrap();
        let blended = Composition::new(blend(a, &c1, &c2)).unwrap();
        let lhs = tri.project(&blended);
        let rhs = tri.project(&c1) * a + tri.project(&c2) * (1.0 - a);
        prop_assert!((lhs - rhs).norm() < 1e-9);
    }

    #[test]
    fn raw_and_typed_projection_agree(raw in prop::array::uniform4(0.0f64..1.0)) {
        prop_assume!(raw.iter().sum::<f64>() > 1e-6);
        let tet = Tet::regular();
        let c = Composition::normalized(raw).unwrap();
        let typed = tet.project(&c);
        let sliced: SVector<f64, 3> = project(c.parts(), tet.vertices()).unwrap();
        prop_assert!((typed - sliced).norm() == 0.0);
    }
}

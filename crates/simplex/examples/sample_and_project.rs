//! Sample a few compositions and print their projected coordinates.
//!
//! Usage:
//!   cargo run -p simplex --example sample_and_project -- ternary
//!   cargo run -p simplex --example sample_and_project -- quaternary

use simplex::prelude::*;

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ternary".to_string());
    match mode.as_str() {
        "ternary" => show_ternary(),
        "quaternary" => show_quaternary(),
        _ => {
            eprintln!("usage: sample_and_project [ternary|quaternary]");
        }
    }
}

fn show_ternary() {
    let tri = Tri::regular();
    let mut gen = UniformRatioSampler::<3>::new(RatioParams::default(), 2025).unwrap();
    for i in 0..5 {
        let s = gen.sample_next().unwrap();
        let p = tri.project(&s.composition);
        println!(
            "ternary sample {i}: parts={:.3?} -> ({:.4}, {:.4})",
            s.composition.parts(),
            p.x,
            p.y
        );
    }
    let centroid = tri.project(&Composition::uniform());
    println!("centroid: ({:.4}, {:.4})", centroid.x, centroid.y);
}

fn show_quaternary() {
    let tet = Tet::regular();
    let mut gen = DirichletSampler::<4>::new(DirichletParams::default(), 2025).unwrap();
    for i in 0..5 {
        let s = gen.sample_next().unwrap();
        let p = tet.project(&s.composition);
        println!(
            "quaternary sample {i}: parts={:.3?} -> ({:.4}, {:.4}, {:.4})",
            s.composition.parts(),
            p.x,
            p.y,
            p.z
        );
    }
}

//! Static diagram rendering: scatter, simplex outline, vertex labels.
//!
//! The scene decides geometry and color weights; this module only maps them
//! onto plotters primitives. Marker color follows the Viridis scale over the
//! scene's weight range, the outline is drawn as black width-2 segments, and
//! vertex labels sit at the vertex positions. Axes and grids stay hidden;
//! the simplex outline is the frame.

use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};

use simplex::scene::{TetScene, TriScene};

const CANVAS_2D: (u32, u32) = (900, 900);
const CANVAS_3D: (u32, u32) = (1000, 900);
const MARKER_SIZE: i32 = 4;
const EDGE_WIDTH: u32 = 2;

enum ImageFormat {
    Png,
    Svg,
}

fn image_format(out: &Path) -> Result<ImageFormat, Box<dyn Error>> {
    match out.extension().and_then(|ext| ext.to_str()) {
        Some("png") => Ok(ImageFormat::Png),
        Some("svg") => Ok(ImageFormat::Svg),
        other => Err(format!("unsupported image format {other:?} (use .png or .svg)").into()),
    }
}

/// Render a ternary scene to `out` (.png or .svg).
pub fn ternary(scene: &TriScene, out: &Path, title: &str) -> Result<(), Box<dyn Error>> {
    match image_format(out)? {
        ImageFormat::Png => {
            draw_ternary(BitMapBackend::new(out, CANVAS_2D).into_drawing_area(), scene, title)
        }
        ImageFormat::Svg => {
            draw_ternary(SVGBackend::new(out, CANVAS_2D).into_drawing_area(), scene, title)
        }
    }
}

/// Render a quaternary scene to `out` (.png or .svg).
pub fn quaternary(scene: &TetScene, out: &Path, title: &str) -> Result<(), Box<dyn Error>> {
    match image_format(out)? {
        ImageFormat::Png => {
            draw_quaternary(BitMapBackend::new(out, CANVAS_3D).into_drawing_area(), scene, title)
        }
        ImageFormat::Svg => {
            draw_quaternary(SVGBackend::new(out, CANVAS_3D).into_drawing_area(), scene, title)
        }
    }
}

fn marker_color(weight: f64, lo: f64, hi: f64) -> RGBColor {
    // Degenerate range (single point or constant weight) maps to the low end.
    let span = (hi - lo).max(1e-12);
    ViridisRGB.get_color_normalized(weight as f32, lo as f32, (lo + span) as f32)
}

fn draw_ternary<DB>(
    root: DrawingArea<DB, Shift>,
    scene: &TriScene,
    title: &str,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    // Equal spans on a square canvas keep the triangle equilateral.
    let (lo, hi) = scene.bounds(0.1);
    let span = (hi[0] - lo[0]).max(hi[1] - lo[1]);
    let cx = (lo[0] + hi[0]) / 2.0;
    let cy = (lo[1] + hi[1]) / 2.0;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .build_cartesian_2d(
            cx - span / 2.0..cx + span / 2.0,
            cy - span / 2.0..cy + span / 2.0,
        )?;

    let (wlo, whi) = scene.weight_range();
    chart.draw_series(
        scene
            .points()
            .iter()
            .zip(scene.weights())
            .map(|(p, &w)| Circle::new((p.x, p.y), MARKER_SIZE, marker_color(w, wlo, whi).filled())),
    )?;

    for (a, b) in scene.edge_segments() {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(a.x, a.y), (b.x, b.y)],
            BLACK.stroke_width(EDGE_WIDTH),
        )))?;
    }

    for (v, label) in scene.embedding().vertices().iter().zip(scene.labels()) {
        chart.draw_series(std::iter::once(Text::new(
            label.clone(),
            (v.x, v.y),
            ("sans-serif", 22).into_font().color(&BLACK),
        )))?;
    }

    root.present()?;
    Ok(())
}

fn draw_quaternary<DB>(
    root: DrawingArea<DB, Shift>,
    scene: &TetScene,
    title: &str,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let (lo, hi) = scene.bounds(0.15);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .build_cartesian_3d(lo[0]..hi[0], lo[1]..hi[1], lo[2]..hi[2])?;
    chart.with_projection(|mut pb| {
        pb.pitch = 0.3;
        pb.yaw = 0.7;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    let (wlo, whi) = scene.weight_range();
    chart.draw_series(
        scene
            .points()
            .iter()
            .zip(scene.weights())
            .map(|(p, &w)| {
                Circle::new((p.x, p.y, p.z), MARKER_SIZE, marker_color(w, wlo, whi).filled())
            }),
    )?;

    for (a, b) in scene.edge_segments() {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(a.x, a.y, a.z), (b.x, b.y, b.z)],
            BLACK.stroke_width(EDGE_WIDTH),
        )))?;
    }

    for (v, label) in scene.embedding().vertices().iter().zip(scene.labels()) {
        chart.draw_series(std::iter::once(Text::new(
            label.clone(),
            (v.x, v.y, v.z),
            ("sans-serif", 22).into_font().color(&BLACK),
        )))?;
    }

    root.present()?;
    Ok(())
}

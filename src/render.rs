//! SVG rendering of a [`Quiver`] with `plotters`.
//!
//! Plotters' 3-D charts are y-up, Matplotlib's are z-up, so data `(x, y, z)`
//! is handed to the chart as `(x, z, y)`: data z becomes the vertical axis.

use crate::{Error, OrbitCamera, Quiver, QuiverConfig, Result, Vec3};
use plotters::prelude::*;
use tracing::info;

/// Fraction of the drawing area the projected cube occupies at `scale() == 1`.
const BASE_SCALE: f64 = 0.8;
const CAPTION_SIZE: u32 = 28;
const LABEL_SIZE: u32 = 20;
/// Axes narrower than this are widened so the chart has a usable range.
const MIN_SPAN: f64 = 1e-9;

fn render_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

/// Data space to chart space.
#[inline]
fn to_chart(p: Vec3) -> (f64, f64, f64) {
    (p.x, p.z, p.y)
}

/// Chart extent in data space: the arrow bounds, or the grid range when empty.
fn data_extent(quiver: &Quiver, config: &QuiverConfig) -> (Vec3, Vec3) {
    let (lo, hi) = quiver.bounds().unwrap_or_else(|| {
        let (a, b) = (config.axis_min, config.axis_max);
        (Vec3::new(a, a, a), Vec3::new(b, b, b))
    });
    let widen = |lo: f64, hi: f64| {
        if hi - lo < MIN_SPAN {
            (lo - 0.5, hi + 0.5)
        } else {
            (lo, hi)
        }
    };
    let (x0, x1) = widen(lo.x, hi.x);
    let (y0, y1) = widen(lo.y, hi.y);
    let (z0, z1) = widen(lo.z, hi.z);
    (Vec3::new(x0, y0, z0), Vec3::new(x1, y1, z1))
}

/// Draw the quiver as seen from `camera` and return the SVG document.
pub fn render_svg(quiver: &Quiver, config: &QuiverConfig, camera: &OrbitCamera) -> Result<String> {
    config.validate()?;
    let color = config.rgb()?;
    let (lo, hi) = data_extent(quiver, config);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, config.figure_size).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, ("sans-serif", CAPTION_SIZE))
            .margin(20)
            .build_cartesian_3d(lo.x..hi.x, lo.z..hi.z, lo.y..hi.y)
            .map_err(render_err)?;

        chart.with_projection(|mut pb| {
            pb.yaw = camera.yaw();
            pb.pitch = camera.pitch();
            pb.scale = BASE_SCALE * camera.scale();
            pb.into_matrix()
        });

        chart
            .configure_axes()
            .light_grid_style(BLACK.mix(0.1))
            .max_light_lines(4)
            .draw()
            .map_err(render_err)?;

        chart
            .draw_series(quiver.arrows().iter().flat_map(|a| a.strokes()).map(|[from, to]| {
                PathElement::new(vec![to_chart(from), to_chart(to)], color.stroke_width(1))
            }))
            .map_err(render_err)?;

        let font = ("sans-serif", LABEL_SIZE).into_font().color(&BLACK);
        let [xl, yl, zl] = &config.axis_labels;
        chart
            .draw_series([
                Text::new(xl.clone(), to_chart(Vec3::new(hi.x, lo.y, lo.z)), font.clone()),
                Text::new(yl.clone(), to_chart(Vec3::new(lo.x, hi.y, lo.z)), font.clone()),
                Text::new(zl.clone(), to_chart(Vec3::new(lo.x, lo.y, hi.z)), font),
            ])
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
    }

    info!(
        arrows = quiver.arrows().len(),
        yaw = camera.yaw(),
        pitch = camera.pitch(),
        bytes = svg.len(),
        "quiver rendered"
    );
    Ok(svg)
}

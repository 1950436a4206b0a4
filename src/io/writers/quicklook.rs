use ndarray::Array2;
use num_complex::Complex;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::f64::consts::PI;
use std::path::Path;

use crate::core::params::QuicklookParams;
use crate::types::{ColorbarOrientation, Interpolation};

const PANEL_WIDTH: u32 = 900;
const COLORBAR_THICKNESS: u32 = 90;
// Cap the painted cell grid; finer input is block-sampled
const RENDER_RESOLUTION: usize = 600;

enum PanelKind {
    Amplitude { lo: f64, hi: f64 },
    Phase,
}

/// Render the two-panel quicklook (amplitude left, phase right) over the
/// geographic extent `(xmin, xmax, ymin, ymax)`. Cells whose value is NaN are
/// left unpainted.
pub fn render_quicklook_png(
    output: &Path,
    data: &Array2<Complex<f32>>,
    extent: (f64, f64, f64, f64),
    params: &QuicklookParams,
) -> Result<(), Box<dyn std::error::Error>> {
    let (rows, cols) = data.dim();
    if rows == 0 || cols == 0 {
        return Err("cannot render an empty raster".into());
    }

    let (amp_lo, amp_hi) = amplitude_range(data, params);

    let width = PANEL_WIDTH * 2;
    let height = panel_height(params.aspect);
    let root = BitMapBackend::new(output, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;
    let (left, right) = root.split_horizontally(PANEL_WIDTH);

    draw_panel(
        &left,
        data,
        extent,
        params,
        &format!("{} (amplitude)", params.title),
        PanelKind::Amplitude {
            lo: amp_lo,
            hi: amp_hi,
        },
    )?;
    draw_panel(
        &right,
        data,
        extent,
        params,
        &format!("{} (phase [rad])", params.title),
        PanelKind::Phase,
    )?;

    root.present()?;
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    data: &Array2<Complex<f32>>,
    extent: (f64, f64, f64, f64),
    params: &QuicklookParams,
    title: &str,
    kind: PanelKind,
) -> Result<(), Box<dyn std::error::Error>> {
    let (panel_w, panel_h) = area.dim_in_pixel();
    let (chart_area, colorbar_area) = if params.draw_colorbar {
        match params.colorbar_orientation {
            ColorbarOrientation::Horizontal => {
                let (chart, bar) = area.split_vertically(panel_h - COLORBAR_THICKNESS);
                (chart, Some(bar))
            }
            ColorbarOrientation::Vertical => {
                let (chart, bar) = area.split_horizontally(panel_w - COLORBAR_THICKNESS);
                (chart, Some(bar))
            }
        }
    } else {
        (area.clone(), None)
    };

    let (xmin, xmax, ymin, ymax) = extent;
    let mut chart = ChartBuilder::on(&chart_area)
        .margin(15)
        .caption(title, ("sans-serif", 28))
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(xmin..xmax, ymin..ymax)?;
    chart
        .configure_mesh()
        .x_labels(6)
        .y_labels(6)
        .x_max_light_lines(0)
        .y_max_light_lines(0)
        .label_style(("sans-serif", 14))
        .draw()?;

    let (rows, cols) = data.dim();
    let step_r = rows.div_ceil(RENDER_RESOLUTION).max(1);
    let step_c = cols.div_ceil(RENDER_RESOLUTION).max(1);
    let x_scale = (xmax - xmin) / cols as f64;
    let y_scale = (ymax - ymin) / rows as f64;

    // Row 0 is the top of the raster
    for r in (0..rows).step_by(step_r) {
        let r_end = (r + step_r).min(rows);
        let y_top = ymax - r as f64 * y_scale;
        let y_bottom = ymax - r_end as f64 * y_scale;
        for c in (0..cols).step_by(step_c) {
            let c_end = (c + step_c).min(cols);
            let value = match params.interpolation {
                Interpolation::Nearest => data[[r, c]],
                Interpolation::Bilinear => bilinear_sample(data, r, r_end, c, c_end),
            };
            let Some(color) = cell_color(&kind, value) else {
                continue;
            };
            let x0 = xmin + c as f64 * x_scale;
            let x1 = xmin + c_end as f64 * x_scale;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x0, y_bottom), (x1, y_top)],
                color.filled(),
            )))?;
        }
    }

    if let Some(bar_area) = colorbar_area {
        draw_colorbar(&bar_area, &kind, params.colorbar_orientation)?;
    }

    Ok(())
}

/// Bilinear sample of the complex plane at the center of a cell block;
/// amplitude and phase are derived after interpolation.
fn bilinear_sample(
    data: &Array2<Complex<f32>>,
    r0: usize,
    r1: usize,
    c0: usize,
    c1: usize,
) -> Complex<f32> {
    let (rows, cols) = data.dim();
    let rc = (r0 + r1) as f32 / 2.0 - 0.5;
    let cc = (c0 + c1) as f32 / 2.0 - 0.5;
    let rf = rc.floor().clamp(0.0, (rows - 1) as f32) as usize;
    let cf = cc.floor().clamp(0.0, (cols - 1) as f32) as usize;
    let rn = (rf + 1).min(rows - 1);
    let cn = (cf + 1).min(cols - 1);
    let tr = (rc - rf as f32).clamp(0.0, 1.0);
    let tc = (cc - cf as f32).clamp(0.0, 1.0);
    let top = data[[rf, cf]] * (1.0 - tc) + data[[rf, cn]] * tc;
    let bottom = data[[rn, cf]] * (1.0 - tc) + data[[rn, cn]] * tc;
    top * (1.0 - tr) + bottom * tr
}

fn cell_color(kind: &PanelKind, value: Complex<f32>) -> Option<RGBAColor> {
    match kind {
        PanelKind::Amplitude { lo, hi } => {
            let a = f64::from(value.norm());
            if a.is_nan() {
                return None;
            }
            let t = ((a - lo) / (hi - lo)).clamp(0.0, 1.0);
            Some(ramp_color(kind, t))
        }
        PanelKind::Phase => {
            let p = f64::from(value.arg());
            if p.is_nan() {
                return None;
            }
            let t = ((p + PI) / (2.0 * PI)).clamp(0.0, 1.0);
            Some(ramp_color(kind, t))
        }
    }
}

fn ramp_color(kind: &PanelKind, t: f64) -> RGBAColor {
    match kind {
        PanelKind::Amplitude { .. } => {
            let g = (t * 255.0).round().clamp(0.0, 255.0) as u8;
            RGBColor(g, g, g).to_rgba()
        }
        PanelKind::Phase => HSLColor((1.0 - t) * 0.7, 1.0, 0.5).to_rgba(),
    }
}

fn draw_colorbar(
    area: &DrawingArea<BitMapBackend, Shift>,
    kind: &PanelKind,
    orientation: ColorbarOrientation,
) -> Result<(), Box<dyn std::error::Error>> {
    let (lo, hi) = match kind {
        PanelKind::Amplitude { lo, hi } => (*lo, *hi),
        PanelKind::Phase => (-PI, PI),
    };
    let steps = 100;
    match orientation {
        ColorbarOrientation::Horizontal => {
            let mut bar = ChartBuilder::on(area)
                .margin_left(50)
                .margin_right(50)
                .margin_top(8)
                .x_label_area_size(24)
                .build_cartesian_2d(lo..hi, 0.0..1.0)?;
            bar.configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .disable_y_axis()
                .x_labels(5)
                .label_style(("sans-serif", 12))
                .draw()?;
            for i in 0..steps {
                let t = i as f64 / (steps - 1) as f64;
                let v0 = lo + t * (hi - lo);
                let v1 = (lo + (t + 1.0 / steps as f64) * (hi - lo)).min(hi);
                bar.draw_series(std::iter::once(Rectangle::new(
                    [(v0, 0.0), (v1, 1.0)],
                    ramp_color(kind, t).filled(),
                )))?;
            }
        }
        ColorbarOrientation::Vertical => {
            let mut bar = ChartBuilder::on(area)
                .margin_top(40)
                .margin_bottom(40)
                .set_label_area_size(LabelAreaPosition::Right, 50)
                .build_cartesian_2d(0.0..1.0, lo..hi)?;
            bar.configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .disable_x_axis()
                .y_labels(6)
                .label_style(("sans-serif", 12))
                .draw()?;
            for i in 0..steps {
                let t = i as f64 / (steps - 1) as f64;
                let v0 = lo + t * (hi - lo);
                let v1 = (lo + (t + 1.0 / steps as f64) * (hi - lo)).min(hi);
                bar.draw_series(std::iter::once(Rectangle::new(
                    [(0.0, v0), (1.0, v1)],
                    ramp_color(kind, t).filled(),
                )))?;
            }
        }
    }
    Ok(())
}

fn amplitude_range(data: &Array2<Complex<f32>>, params: &QuicklookParams) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in data.iter() {
        let a = f64::from(v.norm());
        if a.is_finite() {
            lo = lo.min(a);
            hi = hi.max(a);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        lo = 0.0;
        hi = 1.0;
    }
    let lo = params.datamin.unwrap_or(lo);
    let hi = params.datamax.unwrap_or(hi);
    if hi > lo { (lo, hi) } else { (lo, lo + 1.0) }
}

fn panel_height(aspect: f64) -> u32 {
    let aspect = if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    };
    ((800.0 * aspect).round() as u32).clamp(300, 1600) + 100
}

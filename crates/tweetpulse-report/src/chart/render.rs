//! Rasterises a [`PieChart`] to PNG.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use super::font::{glyph, text_width, GLYPH_HEIGHT, GLYPH_WIDTH, ADVANCE};
use super::PieChart;
use crate::error::ReportError;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;

const CENTER_X: f64 = 400.0;
const CENTER_Y: f64 = 330.0;
const RADIUS: f64 = 190.0;
const SHADOW_OFFSET: f64 = 8.0;

const BACKGROUND: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
const SHADOW: Rgb<u8> = Rgb([0xb0, 0xb0, 0xb0]);
const INK: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);

const TITLE_SCALE: u32 = 3;
const TITLE_Y: i64 = 30;
const LABEL_SCALE: u32 = 2;
/// Percentages sit inside the slice, names just outside the rim.
const PERCENT_DISTANCE: f64 = 0.6;
const LABEL_DISTANCE: f64 = 1.1;

/// Draw the chart: drop shadow, slices, title, slice names and percentages.
#[must_use]
pub fn render_pie_chart(chart: &PieChart) -> RgbImage {
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);
    let r2 = RADIUS * RADIUS;

    for (x, y, px) in img.enumerate_pixels_mut() {
        let dx = f64::from(x) + 0.5 - CENTER_X;
        let dy = f64::from(y) + 0.5 - CENTER_Y;

        if dx * dx + dy * dy <= r2 {
            // Image y grows downwards; flip it so angles run counter-clockwise.
            let angle = (-dy).atan2(dx).to_degrees();
            if let Some(slice) = chart.slice_at(angle) {
                *px = Rgb(slice.color);
            }
        } else {
            let sx = dx - SHADOW_OFFSET;
            let sy = dy - SHADOW_OFFSET;
            if sx * sx + sy * sy <= r2 {
                *px = SHADOW;
            }
        }
    }

    let title_x = centered_x(CENTER_X, &chart.title, TITLE_SCALE);
    draw_text(&mut img, &chart.title, title_x, TITLE_Y, TITLE_SCALE, INK);

    let label_height = f64::from(GLYPH_HEIGHT * LABEL_SCALE);
    for slice in &chart.slices {
        let (sin, cos) = slice.mid_angle_deg().to_radians().sin_cos();

        let percent = slice.percent_label();
        let px = CENTER_X + RADIUS * PERCENT_DISTANCE * cos;
        let py = CENTER_Y - RADIUS * PERCENT_DISTANCE * sin - label_height / 2.0;
        draw_text(
            &mut img,
            &percent,
            centered_x(px, &percent, LABEL_SCALE),
            to_pixel(py),
            LABEL_SCALE,
            INK,
        );

        let name = slice.label.as_str();
        let lx = CENTER_X + RADIUS * LABEL_DISTANCE * cos;
        let ly = CENTER_Y - RADIUS * LABEL_DISTANCE * sin - label_height / 2.0;
        let lx = if cos >= 0.0 {
            to_pixel(lx)
        } else {
            to_pixel(lx) - i64::from(text_width(name, LABEL_SCALE))
        };
        draw_text(&mut img, name, lx, to_pixel(ly), LABEL_SCALE, INK);
    }

    img
}

/// Render and write the chart as PNG, whatever the extension of `path`.
///
/// # Errors
///
/// Returns [`ReportError::Image`] if the file cannot be encoded or written.
pub fn save_pie_chart(chart: &PieChart, path: &Path) -> Result<(), ReportError> {
    render_pie_chart(chart).save_with_format(path, ImageFormat::Png)?;
    tracing::info!(path = %path.display(), slices = chart.slices.len(), "wrote pie chart");
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn to_pixel(v: f64) -> i64 {
    v.round() as i64
}

fn centered_x(center: f64, text: &str, scale: u32) -> i64 {
    to_pixel(center - f64::from(text_width(text, scale)) / 2.0)
}

/// Draw `text` with its top-left corner at `(x, y)`, clipping at the edges.
fn draw_text(img: &mut RgbImage, text: &str, x: i64, y: i64, scale: u32, color: Rgb<u8>) {
    let (w, h) = (i64::from(img.width()), i64::from(img.height()));
    let scale_i = i64::from(scale);

    for (i, c) in (0_i64..).zip(text.chars()) {
        let origin_x = x + i * i64::from(ADVANCE) * scale_i;
        for (row, bits) in (0_i64..).zip(glyph(c)) {
            for col in 0..i64::from(GLYPH_WIDTH) {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                for sy in 0..scale_i {
                    for sx in 0..scale_i {
                        let px = origin_x + col * scale_i + sx;
                        let py = y + row * scale_i + sy;
                        if (0..w).contains(&px) && (0..h).contains(&py) {
                            if let (Ok(px), Ok(py)) = (u32::try_from(px), u32::try_from(py)) {
                                img.put_pixel(px, py, color);
                            }
                        }
                    }
                }
            }
        }
    }
}

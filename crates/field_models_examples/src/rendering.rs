//! PNG rendering of line profiles and logging setup shared by the example binaries.
use std::path::Path;

use anyhow::{ensure, Context};
use field_models::prelude::LineProfile;
use image::{Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber, honoring `RUST_LOG` and defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Stroke style for one profile.
#[derive(Clone, Copy, Debug)]
pub struct ProfileStyle {
    pub color: [u8; 3],
    /// Half-thickness of the stroke in pixels.
    pub radius: u32,
}

impl Default for ProfileStyle {
    fn default() -> Self {
        Self {
            color: [40, 120, 240],
            radius: 1,
        }
    }
}

/// Image size, value range and colors used when plotting profiles.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    /// Value mapped to the bottom edge.
    pub value_min: f64,
    /// Value mapped to the top edge.
    pub value_max: f64,
    pub background: [u8; 3],
    pub axis_color: [u8; 3],
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), value_min: f64, value_max: f64) -> Self {
        Self {
            image_size,
            value_min,
            value_max,
            background: [245, 245, 248],
            axis_color: [190, 190, 200],
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    fn value_to_y(&self, value: f64) -> f64 {
        let h = (self.image_size.1 - 1) as f64;
        let t = (value - self.value_min) / (self.value_max - self.value_min);
        h - t * h
    }
}

/// Plots each profile as a polyline over its parameter range and writes a PNG.
///
/// The horizontal axis spans the union of all profile parameters. A horizontal line marks
/// value zero when it is inside the configured range.
pub fn render_profiles_to_png(
    profiles: &[(&LineProfile, ProfileStyle)],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    ensure!(w > 1 && h > 1, "image size must be at least 2x2");
    ensure!(
        config.value_max > config.value_min,
        "value_max must be greater than value_min"
    );

    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    if (config.value_min..=config.value_max).contains(&0.0) {
        let y0 = config.value_to_y(0.0).round() as u32;
        for x in 0..w {
            img.put_pixel(x, y0.min(h - 1), Rgb(config.axis_color));
        }
    }

    let (p_min, p_max) = profiles
        .iter()
        .flat_map(|(profile, _)| profile.params.iter().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p), hi.max(p))
        });
    let p_span = if p_max > p_min { p_max - p_min } else { 1.0 };
    let p_to_x = |p: f64| (p - p_min) / p_span * (w - 1) as f64;

    for (profile, style) in profiles {
        let points: Vec<(f64, f64)> = profile
            .iter()
            .map(|(p, v)| (p_to_x(p), config.value_to_y(v)))
            .collect();

        for seg in points.windows(2) {
            draw_segment(&mut img, seg[0], seg[1], style);
        }
        if let [single] = points.as_slice() {
            draw_segment(&mut img, *single, *single, style);
        }
    }

    img.save(path.as_ref())
        .with_context(|| format!("failed to write {}", path.as_ref().display()))?;
    info!("Wrote {}", path.as_ref().display());
    Ok(())
}

fn draw_segment(img: &mut RgbImage, a: (f64, f64), b: (f64, f64), style: &ProfileStyle) {
    let steps = ((b.0 - a.0).abs().max((b.1 - a.1).abs()).ceil() as usize).max(1);
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = a.0 + (b.0 - a.0) * t;
        let y = a.1 + (b.1 - a.1) * t;
        stamp(img, x.round() as i64, y.round() as i64, style);
    }
}

fn stamp(img: &mut RgbImage, cx: i64, cy: i64, style: &ProfileStyle) {
    let r = style.radius as i64;
    let (w, h) = (img.width() as i64, img.height() as i64);
    for dy in -r..=r {
        for dx in -r..=r {
            let (x, y) = (cx + dx, cy + dy);
            if x >= 0 && y >= 0 && x < w && y < h {
                img.put_pixel(x as u32, y as u32, Rgb(style.color));
            }
        }
    }
}

use field_models::prelude::*;
use field_models_examples::{init_tracing, render_profiles_to_png, ProfileStyle, RenderConfig};
use glam::DVec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let ridge = FnField::new(|p: DVec3| 1.0 - (p.x * 0.2).sin().abs() * 2.0).into_shared();
    let cap = Constant::new(0.6).into_shared();
    let field = Combine::min(ridge, cap).into_shared();

    let model = LineModel::with_field(field).with_segment([-20.0, 0.0, 0.0], [20.0, 0.0, 0.0]);

    let mut rng = StdRng::seed_from_u64(42);
    let scattered = LineProfile::sample_random(&model, 48, &mut rng)?;
    let reference = LineProfile::sample_uniform(&model, 800)?;

    for (p, v) in scattered.iter().take(8) {
        info!("p = {p:.4} -> {v:.4}");
    }

    let rc = RenderConfig::new((1000, 400), -1.2, 1.0);
    render_profiles_to_png(
        &[
            (
                &reference,
                ProfileStyle {
                    color: [200, 200, 210],
                    radius: 0,
                },
            ),
            (
                &scattered,
                ProfileStyle {
                    color: [40, 120, 240],
                    radius: 2,
                },
            ),
        ],
        &rc,
        "line-random-samples.png",
    )?;

    Ok(())
}

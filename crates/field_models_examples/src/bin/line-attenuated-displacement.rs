use field_models::prelude::*;
use field_models_examples::{init_tracing, render_profiles_to_png, ProfileStyle, RenderConfig};
use glam::DVec3;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A river bank: two layered waves, offset so the pattern does not start at the origin.
    let coarse = FnField::new(|p: DVec3| (p.x * 0.11).sin() + (p.z * 0.07).cos() * 0.5).into_shared();
    let fine = FnField::new(|p: DVec3| (p.x * 0.9 + p.y * 0.4).sin()).into_shared();
    let detail = ScaleBias::new(fine, 0.25, 0.0).into_shared();
    let field = Translate::new(Combine::add(coarse, detail).into_shared(), [17.0, 0.0, -4.0])
        .into_shared();

    let settings = LineSettings::new([0.0, 0.0, 0.0], [120.0, 5.0, 40.0]);
    let mut model = LineModel::try_from_settings(&settings, field)?;

    let attenuated = LineProfile::sample_uniform(&model, 512)?;
    model.set_attenuate(false);
    let raw = LineProfile::sample_uniform(&model, 512)?;

    info!(
        "raw range [{:.3}, {:.3}], attenuated range [{:.3}, {:.3}]",
        raw.min().unwrap_or_default(),
        raw.max().unwrap_or_default(),
        attenuated.min().unwrap_or_default(),
        attenuated.max().unwrap_or_default(),
    );

    let rc = RenderConfig::new((1000, 400), -1.6, 1.6);
    render_profiles_to_png(
        &[
            (
                &raw,
                ProfileStyle {
                    color: [200, 200, 210],
                    radius: 1,
                },
            ),
            (&attenuated, ProfileStyle::default()),
        ],
        &rc,
        "line-attenuated-displacement.png",
    )?;

    Ok(())
}

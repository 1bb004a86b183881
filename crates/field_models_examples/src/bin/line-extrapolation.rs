use field_models::prelude::*;
use field_models_examples::{init_tracing, render_profiles_to_png, ProfileStyle, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Constant field: any shape in the plot comes from the attenuation factor alone.
    let field = Constant::new(1.0).into_shared();
    let mut model = LineModel::with_field(field).with_segment([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]);

    // Sample past both ends of the segment.
    let params: Vec<f64> = (0..=400).map(|i| -0.5 + i as f64 / 200.0).collect();

    let attenuated = LineProfile::from_params(&model, params.clone())?;
    model.set_attenuate(false);
    let raw = LineProfile::from_params(&model, params)?;

    for p in [-0.5, 0.0, 0.5, 1.0, 1.5] {
        model.set_attenuate(true);
        let a = model.evaluate(p)?;
        model.set_attenuate(false);
        let r = model.evaluate(p)?;
        info!("p = {p:>5.2}: position {:?}, raw {r:.3}, attenuated {a:.3}", model.position_at(p));
    }

    let rc = RenderConfig::new((1000, 400), -3.5, 1.5);
    render_profiles_to_png(
        &[
            (
                &raw,
                ProfileStyle {
                    color: [120, 180, 90],
                    radius: 1,
                },
            ),
            (
                &attenuated,
                ProfileStyle {
                    color: [220, 80, 60],
                    radius: 1,
                },
            ),
        ],
        &rc,
        "line-extrapolation.png",
    )?;

    Ok(())
}

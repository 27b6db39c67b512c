use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use tracing::info;

/// 将每个 episode 的总奖励画成折线图 (SVG)
pub fn plot_episode_returns(returns: &[f64], path: impl AsRef<Path>, title: &str) -> Result<()> {
    let path = path.as_ref();
    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    // 避免空图或全为 0
    let max_return = returns.iter().cloned().fold(f64::MIN, f64::max).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 32))
        .margin(30)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0..returns.len().max(1), 0f64..max_return)?;

    chart
        .configure_mesh()
        .x_desc("Episode")
        .y_desc("Total Reward")
        .axis_desc_style(("sans-serif", 22))
        .label_style(("sans-serif", 18))
        .light_line_style(&WHITE.mix(0.3))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            returns.iter().enumerate().map(|(i, r)| (i, *r)),
            &BLUE,
        ))?
        .label("Reward")
        .legend(|(x, y)| PathElement::new([(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 18))
        .draw()?;

    root.present()?;
    info!("Saved episode plot to {}", path.display());
    Ok(())
}

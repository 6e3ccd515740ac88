use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use runplot_core::{series_bounds, AcceptanceSeries, EnergyLog, GroupedSeries};

/// Display colors, in drawing order.
pub const PALETTE: [RGBColor; 13] = [
    RGBColor(0, 0, 255),     // blue
    RGBColor(47, 79, 79),    // dark slate grey
    RGBColor(160, 82, 45),   // sienna
    RGBColor(255, 140, 0),   // dark orange
    RGBColor(218, 165, 32),  // goldenrod
    RGBColor(107, 142, 35),  // olive drab
    RGBColor(0, 128, 0),     // green
    RGBColor(0, 191, 191),   // cyan
    RGBColor(95, 158, 160),  // cadet blue
    RGBColor(0, 0, 128),     // navy
    RGBColor(199, 21, 133),  // medium violet red
    RGBColor(220, 20, 60),   // crimson
    RGBColor(255, 192, 203), // pink
];

fn series_color(palette: &[RGBColor], index: usize) -> RGBColor {
    palette[index % palette.len()]
}

/// Pad a value range so points never sit on the frame.
fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let pad = ((hi - lo) * 0.05).max(0.01);
    (lo - pad, hi + pad)
}

/// Line chart of acceptance ratio against structure index, with a translucent
/// horizontal line at the average.
pub fn acceptance_chart(
    series: &AcceptanceSeries,
    average: f64,
    palette: &[RGBColor],
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let count = series.samples.len().max(1) as f64;
    let (lo, hi) = series_bounds(&series.samples);
    let (y_lo, y_hi) = padded(lo.min(average), hi.max(average));
    let mut chart = ChartBuilder::on(&root)
        .caption("Run Log", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..count, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("# Structure")
        .y_desc("Acceptance Ratio")
        .draw()?;

    let color = series_color(palette, 2);
    chart
        .draw_series(LineSeries::new(
            series
                .samples
                .iter()
                .enumerate()
                .map(|(index, sample)| (index as f64, *sample)),
            &color,
        ))?
        .label("Acceptance Ratio")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

    chart
        .draw_series(LineSeries::new(
            [(0.0, average), (count, average)],
            BLACK.mix(0.3),
        ))?
        .label(format!("Average: {average:.6}"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.mix(0.3)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    root.present()?;
    Ok(())
}

/// One stacked sub-chart per term: scatter plus a thin connecting line, and a
/// thick translucent line at the term's target.
pub fn all_terms_chart(
    log: &EnergyLog,
    palette: &[RGBColor],
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let count = log.terms.len();
    let height = (count * 240).clamp(400, 2400) as u32;
    let root = SVGBackend::new(path, (1200, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let areas = root.split_evenly((count.max(1), 1));
    for (index, term) in log.terms.iter().enumerate() {
        let color = series_color(palette, index + 1);
        let values = &log.series[term.as_str()];
        let target = log.target(term);
        draw_term_chart(&areas[index], term, values, Some(target), color)?;
    }

    root.present()?;
    Ok(())
}

/// Two stacked sub-charts with the grouped contributions.
pub fn grouped_chart(
    grouped: &GroupedSeries,
    palette: &[RGBColor],
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let areas = root.split_evenly((2, 1));
    let groups = [("Amber", &grouped.amber), ("coarseGrain", &grouped.coarse_grain)];
    for (index, (name, values)) in groups.iter().enumerate() {
        let color = series_color(palette, index + 1);
        draw_term_chart(&areas[index], name, values, None, color)?;
    }

    root.present()?;
    Ok(())
}

fn draw_term_chart(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    label: &str,
    values: &[f64],
    target: Option<f64>,
    color: RGBColor,
) -> Result<(), Box<dyn Error>> {
    let count = values.len().max(1) as f64;
    let (lo, hi) = series_bounds(values);
    let (lo, hi) = match target {
        Some(target) => (lo.min(target), hi.max(target)),
        None => (lo, hi),
    };
    let (y_lo, y_hi) = padded(lo, hi);
    let mut chart = ChartBuilder::on(area)
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..count, y_lo..y_hi)?;

    chart.configure_mesh().draw()?;

    if let Some(target) = target {
        chart.draw_series(LineSeries::new(
            [(0.0, target), (count, target)],
            color.mix(0.4).stroke_width(5),
        ))?;
    }

    chart
        .draw_series(
            values
                .iter()
                .enumerate()
                .map(|(index, value)| Circle::new((index as f64, *value), 3, color.filled())),
        )?
        .label(label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

    chart.draw_series(LineSeries::new(
        values
            .iter()
            .enumerate()
            .map(|(index, value)| (index as f64, *value)),
        color.mix(0.5),
    ))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    Ok(())
}

//! Equirectangular world map with signal paths and night shading

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisType, Color, ItemStyle, LineStyle, SplitLine, Symbol, TextStyle},
    renderer::ImageFormat,
    series::{Line, Scatter},
};

use super::colors::{
    COLOR_BACKGROUND, COLOR_GRID, COLOR_NIGHT, COLOR_RECEIVER, COLOR_TEXT, css_rgba,
};
use super::{CHART_HEIGHT, CHART_WIDTH, MapChartData, PlotStyle};

/// Plot area as a fraction of the chart (matches the grid margins below)
const PLOT_WIDTH_FRACTION: f64 = 0.94;
const PLOT_HEIGHT_FRACTION: f64 = 0.76;

/// Pixel size of a night cell, rounded up so neighbours overlap
fn night_symbol_size(step_deg: f64) -> f64 {
    let px_per_lon = CHART_WIDTH as f64 * PLOT_WIDTH_FRACTION / 360.0;
    let px_per_lat = CHART_HEIGHT as f64 * PLOT_HEIGHT_FRACTION / 180.0;
    (px_per_lon.max(px_per_lat) * step_deg).ceil() + 2.0
}

fn to_data(points: &[[f64; 2]]) -> Vec<Vec<f64>> {
    points.iter().map(|p| vec![p[0], p[1]]).collect()
}

/// Render a map to a PNG file
pub fn render_map_chart(
    data: &MapChartData,
    style: &PlotStyle,
    output_path: &str,
) -> Result<(), String> {
    let chart = build_map_chart(data, style);

    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}

fn build_map_chart(data: &MapChartData, style: &PlotStyle) -> Chart {
    let legend: Vec<&str> = data.legend.iter().map(|entry| entry.label).collect();
    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text(&data.title)
                .subtext(&data.subtitle)
                .left("center")
                .top("2%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .title(
            Title::new()
                .text("Data: pskreporter.info")
                .right("3%")
                .bottom("2%")
                .text_style(TextStyle::new().color(COLOR_GRID).font_size(18)),
        )
        .legend(
            Legend::new()
                .data(legend)
                .bottom("3%")
                .item_gap(32)
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(22)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("3%")
                .bottom("12%")
                .top("12%"),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Value)
                .min(-180)
                .max(180)
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(18))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .min(-90)
                .max(90)
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(18))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        );

    // Night cells first (background layer)
    if !data.night.is_empty() {
        chart = chart.series(
            Scatter::new()
                .name("night")
                .symbol(Symbol::Rect)
                .symbol_size(night_symbol_size(style.night_step_deg))
                .item_style(ItemStyle::new().color(COLOR_NIGHT))
                .data(to_data(&data.night)),
        );
    }

    // The legend takes its swatch from the first series of each name, so an
    // empty opaque series per band goes ahead of the faded paths
    for entry in &data.legend {
        chart = chart.series(
            Line::new()
                .name(entry.label)
                .symbol(Symbol::None)
                .line_style(LineStyle::new().width(style.line_width).color(entry.color))
                .item_style(ItemStyle::new().color(entry.color))
                .data(Vec::<Vec<f64>>::new()),
        );
    }

    for path in &data.paths {
        let color = css_rgba(&path.color).unwrap_or_else(|| path.color.clone());
        chart = chart.series(
            Line::new()
                .name(path.band)
                .data(to_data(&path.points))
                .symbol(Symbol::None)
                .line_style(LineStyle::new().width(style.line_width).color(color.as_str()))
                .item_style(ItemStyle::new().color(color.as_str())),
        );
    }

    for sender in &data.senders {
        chart = chart.series(
            Scatter::new()
                .symbol(Symbol::Circle)
                .symbol_size(style.sender_size)
                .item_style(ItemStyle::new().color(sender.color))
                .data(vec![vec![sender.lon, sender.lat]]),
        );
    }

    if !data.receivers.is_empty() {
        chart = chart.series(
            Scatter::new()
                .name("receivers")
                .symbol(Symbol::Triangle)
                .symbol_size(style.receiver_size)
                .item_style(ItemStyle::new().color(COLOR_RECEIVER))
                .data(to_data(&data.receivers)),
        );
    }

    if let Some(home) = data.home {
        chart = chart.series(
            Scatter::new()
                .name("home")
                .symbol(Symbol::Diamond)
                .symbol_size(style.receiver_size * 1.5)
                .item_style(ItemStyle::new().color(COLOR_TEXT))
                .data(vec![vec![home[0], home[1]]]),
        );
    }

    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{LegendEntry, SignalPath};

    #[test]
    fn test_night_symbol_covers_cell() {
        let size = night_symbol_size(2.0);
        let px_per_lon = CHART_WIDTH as f64 * PLOT_WIDTH_FRACTION / 360.0;
        assert!(size > px_per_lon * 2.0);
    }

    #[test]
    fn test_legend_swatch_is_opaque_band_color() {
        let data = MapChartData {
            title: "t".to_string(),
            subtitle: "s".to_string(),
            paths: vec![SignalPath {
                band: "20m",
                color: "#f2c40c00".to_string(),
                points: vec![[0.0, 0.0], [10.0, 10.0]],
            }],
            senders: Vec::new(),
            receivers: Vec::new(),
            home: None,
            night: Vec::new(),
            legend: vec![LegendEntry {
                label: "20m",
                color: "#f2c40c",
            }],
        };
        let json = build_map_chart(&data, &PlotStyle::SINGLE).to_string();

        let series = &json[json.find("\"series\"").unwrap()..];
        let first_20m = &series[series.find("\"name\": \"20m\"").unwrap()..];
        let color_at = first_20m.find("\"color\"").unwrap();
        assert!(first_20m[color_at..].starts_with("\"color\": \"#f2c40c\""));
        assert!(json.contains("rgba(242,196,12,0.000)"));
    }

    #[test]
    fn test_to_data() {
        assert_eq!(
            to_data(&[[1.0, 2.0], [3.0, 4.0]]),
            vec![vec![1.0, 2.0], vec![3.0, 4.0]]
        );
    }
}

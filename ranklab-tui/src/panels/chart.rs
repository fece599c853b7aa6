//! Chart panel — ROI lines for whichever view mode is active.
//!
//! Series arrive pre-styled: hex color, weight tier, label. The panel only
//! translates them into ratatui datasets and draws axes. The x axis is
//! epoch milliseconds; labels are formatted back into calendar dates.

use chrono::DateTime;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

use ranklab_core::domain::{LineWeight, PlotSeries};

use crate::theme::{color_from_hex, Theme};

pub struct ChartPanel<'a> {
    series: &'a [&'a PlotSeries],
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> ChartPanel<'a> {
    pub fn new(series: &'a [&'a PlotSeries], title: &'a str, theme: &'a Theme) -> Self {
        Self {
            series,
            title,
            theme,
        }
    }

    fn marker_for(weight: LineWeight) -> symbols::Marker {
        match weight {
            LineWeight::Heavy | LineWeight::Medium => symbols::Marker::Braille,
            LineWeight::Light => symbols::Marker::Dot,
        }
    }
}

fn date_label(epoch_ms: i64) -> String {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|dt| dt.format("%m-%d").to_string())
        .unwrap_or_default()
}

impl<'a> Widget for ChartPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let data: Vec<Vec<(f64, f64)>> = self
            .series
            .iter()
            .map(|s| s.points.iter().map(|p| (p.x as f64, p.y)).collect())
            .collect();

        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for points in &data {
            for &(x, y) in points {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() {
            // Nothing to plot; draw an empty frame.
            x_min = 0.0;
            x_max = 1.0;
            y_min = 0.0;
            y_max = 1.0;
        }

        let y_range = y_max - y_min;
        let y_pad = if y_range > 0.0 { y_range * 0.05 } else { 1.0 };
        let y_lower = y_min - y_pad;
        let y_upper = y_max + y_pad;

        let datasets: Vec<Dataset> = self
            .series
            .iter()
            .zip(&data)
            .map(|(series, points)| {
                Dataset::default()
                    .name(series.label.as_str())
                    .marker(Self::marker_for(series.weight))
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(color_from_hex(&series.color)))
                    .data(points)
            })
            .collect();

        let x_mid = (x_min + x_max) / 2.0;
        let x_labels = vec![
            Span::raw(date_label(x_min as i64)),
            Span::raw(date_label(x_mid as i64)),
            Span::raw(date_label(x_max as i64)),
        ];
        let y_labels = vec![
            Span::raw(format!("{y_lower:.1}%")),
            Span::raw(format!("{:.1}%", (y_lower + y_upper) / 2.0)),
            Span::raw(format!("{y_upper:.1}%")),
        ];

        Chart::new(datasets)
            .block(
                Block::default()
                    .title(format!(" {} ", self.title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent))
                    .style(Style::default().bg(self.theme.background)),
            )
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(self.theme.muted))
                    .bounds([x_min, x_max.max(x_min + 1.0)])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled(
                        "ROI",
                        Style::default().fg(self.theme.text_secondary),
                    ))
                    .style(Style::default().fg(self.theme.muted))
                    .bounds([y_lower, y_upper])
                    .labels(y_labels),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ranklab_core::domain::PlotPoint;

    fn series(label: &str, color: &str, ys: &[f64]) -> PlotSeries {
        let start = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        PlotSeries {
            agent_id: Some(label.to_string()),
            label: label.to_string(),
            color: color.to_string(),
            weight: LineWeight::Medium,
            position: Some(1),
            state: None,
            points: ys
                .iter()
                .enumerate()
                .map(|(i, &y)| PlotPoint::at(start + chrono::Duration::days(i as i64), y))
                .collect(),
        }
    }

    #[test]
    fn renders_without_panic() {
        let theme = Theme::default();
        let a = series("a", "#FF6384", &[1.0, 2.0, -0.5]);
        let b = series("b", "#36A2EB", &[0.0, -1.0, 3.0]);
        let refs: Vec<&PlotSeries> = vec![&a, &b];

        let panel = ChartPanel::new(&refs, "by-period", &theme);
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
    }

    #[test]
    fn empty_series_list_renders_an_empty_frame() {
        let theme = Theme::default();
        let refs: Vec<&PlotSeries> = vec![];
        let panel = ChartPanel::new(&refs, "daily", &theme);

        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
    }

    #[test]
    fn axis_labels_come_back_as_dates() {
        let a = series("a", "#FF6384", &[1.0]);
        let ms = a.points[0].x;
        assert_eq!(date_label(ms), "05-01");
    }
}

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

use crate::presentation::formatters::{format_number, format_timestamp};
use atomscope_engine::ChartSeries;

/// Line chart of one series over time
pub struct HistoryChartView<'a> {
    pub title: String,
    pub points: &'a [(f64, f64)],
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub color: Color,
}

impl<'a> HistoryChartView<'a> {
    pub fn signal(series: &'a ChartSeries, title: String) -> Self {
        Self {
            title,
            points: &series.signal,
            x_bounds: series.x_bounds,
            y_bounds: series.signal_bounds,
            color: Color::Cyan,
        }
    }

    pub fn share_price(series: &'a ChartSeries, title: String) -> Self {
        Self {
            title,
            points: &series.share_price,
            x_bounds: series.x_bounds,
            y_bounds: series.price_bounds,
            color: Color::Magenta,
        }
    }
}

impl<'a> Widget for HistoryChartView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(self.color))
            .data(self.points);

        let [x_min, x_max] = self.x_bounds;
        let [y_min, y_max] = self.y_bounds;

        Chart::new(vec![dataset])
            .block(Block::default().title(self.title).borders(Borders::ALL))
            .x_axis(
                Axis::default()
                    .bounds(self.x_bounds)
                    .labels([
                        Span::raw(format_timestamp(x_min)),
                        Span::raw(format_timestamp(x_max)),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .bounds(self.y_bounds)
                    .labels([
                        Span::raw(format_number(y_min)),
                        Span::raw(format_number(y_max)),
                    ]),
            )
            .render(area, buf);
    }
}

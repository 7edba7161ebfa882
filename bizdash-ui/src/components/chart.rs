//! Chart Component
//!
//! Bar and pie charts drawn on an HTML5 Canvas from a [`ChartData`].

use std::f64::consts::PI;

use bizdash::format::thousands;
use bizdash::{ChartData, Theme};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::GlobalState;

/// Horizontal grid lines on the value axis
const GRID_LINES: usize = 5;

/// Fraction of a label group left empty between groups
const GROUP_PADDING: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
}

/// Canvas chart component
#[component]
pub fn Chart(
    #[prop(into)]
    data: Signal<ChartData>,
    kind: ChartKind,
    /// Accessible description of the chart
    label: &'static str,
    #[prop(default = 260)]
    height: u32,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the series or the theme changes
    create_effect(move |_| {
        let theme = state.theme();
        data.with(|data| {
            if let Some(canvas) = canvas_ref.get() {
                match kind {
                    ChartKind::Bar => draw_bar_chart(&canvas, data, theme),
                    ChartKind::Pie => draw_pie_chart(&canvas, data),
                }
            }
        });
    });

    view! {
        <div class="chart-wrapper">
            <canvas
                node_ref=canvas_ref
                width="800"
                height=height.to_string()
                class="chart-canvas"
                role="img"
                aria-label=label
            />
            <ChartLegend data=data kind=kind />
        </div>
    }
}

/// Legend: one entry per series for bars, one per category for pies
#[component]
fn ChartLegend(data: Signal<ChartData>, kind: ChartKind) -> impl IntoView {
    view! {
        <div class="chart-legend">
            {move || {
                data.with(|data| legend_entries(data, kind))
                    .into_iter()
                    .map(|(label, color)| {
                        view! {
                            <div class="legend-item">
                                <span class="legend-swatch" style=format!("background-color: {}", color) />
                                <span class="legend-label">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn legend_entries(data: &ChartData, kind: ChartKind) -> Vec<(String, String)> {
    match kind {
        ChartKind::Bar => data
            .datasets
            .iter()
            .map(|s| (s.label.clone(), s.background_color.at(0).to_string()))
            .collect(),
        ChartKind::Pie => match data.datasets.first() {
            Some(series) => data
                .labels
                .iter()
                .enumerate()
                .map(|(i, label)| (label.clone(), series.background_color.at(i).to_string()))
                .collect(),
            None => Vec::new(),
        },
    }
}

/// Round `max` up to 1, 2 or 5 times a power of ten
fn nice_ceiling(max: f64) -> f64 {
    if !(max > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .find(|step| step * magnitude >= max)
        .unwrap_or(10.0);
    step * magnitude
}

/// X offset and width of bar `series` in group `group`
fn bar_slot(
    chart_width: f64,
    groups: usize,
    series_count: usize,
    group: usize,
    series: usize,
) -> (f64, f64) {
    if groups == 0 || series_count == 0 {
        return (0.0, 0.0);
    }
    let group_width = chart_width / groups as f64;
    let inner = group_width * (1.0 - GROUP_PADDING);
    let bar_width = inner / series_count as f64;
    let x = group as f64 * group_width + group_width * GROUP_PADDING / 2.0 + series as f64 * bar_width;
    (x, bar_width)
}

/// Start and end angles of each slice, clockwise from twelve o'clock
fn pie_slices(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let mut start = -PI / 2.0;

    values
        .iter()
        .map(|value| {
            let sweep = if total > 0.0 && *value > 0.0 {
                value / total * 2.0 * PI
            } else {
                0.0
            };
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn axis_colors(theme: Theme) -> (&'static str, &'static str) {
    match theme {
        Theme::Light => ("#e2e8f0", "#64748b"),
        Theme::Dark => ("#334155", "#94a3b8"),
    }
}

fn rounded_top_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, radius: f64) {
    let r = radius.min(w / 2.0).min(h).max(0.0);
    ctx.begin_path();
    ctx.move_to(x, y + h);
    ctx.line_to(x, y + r);
    let _ = ctx.arc_to(x, y, x + r, y, r);
    ctx.line_to(x + w - r, y);
    let _ = ctx.arc_to(x + w, y, x + w, y + r, r);
    ctx.line_to(x + w, y + h);
    ctx.close_path();
}

fn draw_bar_chart(canvas: &HtmlCanvasElement, data: &ChartData, theme: Theme) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.clear_rect(0.0, 0.0, width, height);

    let (grid, text) = axis_colors(theme);

    if data.labels.is_empty() {
        ctx.set_fill_style(&text.into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 28.0, height / 2.0);
        return;
    }

    let axis_max = nice_ceiling(data.max_value());

    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=GRID_LINES {
        let y = margin_top + (i as f64 / GRID_LINES as f64) * chart_height;
        ctx.set_stroke_style(&grid.into());
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = axis_max * (1.0 - i as f64 / GRID_LINES as f64);
        ctx.set_fill_style(&text.into());
        let _ = ctx.fill_text(&thousands(value), 5.0, y + 4.0);
    }

    let groups = data.labels.len();
    for (s, series) in data.datasets.iter().enumerate() {
        let radius = series.border_radius.unwrap_or(0.0);
        for (i, value) in series.data.iter().enumerate().take(groups) {
            let (x, bar_width) = bar_slot(chart_width, groups, data.datasets.len(), i, s);
            let bar_height = (value.max(0.0) / axis_max) * chart_height;
            let y = margin_top + chart_height - bar_height;

            ctx.set_fill_style(&series.background_color.at(i).into());
            rounded_top_rect(&ctx, margin_left + x, y, bar_width, bar_height, radius);
            ctx.fill();

            if let (Some(border), Some(line)) = (&series.border_color, series.border_width) {
                ctx.set_stroke_style(&border.at(i).into());
                ctx.set_line_width(line);
                ctx.stroke();
            }
        }
    }

    ctx.set_fill_style(&text.into());
    ctx.set_font("12px sans-serif");
    let group_width = chart_width / groups as f64;
    for (i, label) in data.labels.iter().enumerate() {
        let x = margin_left + i as f64 * group_width + group_width / 2.0;
        let _ = ctx.fill_text(label, x - 10.0, height - 15.0);
    }
}

fn draw_pie_chart(canvas: &HtmlCanvasElement, data: &ChartData) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    let Some(series) = data.datasets.first() else {
        return;
    };

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0 - 10.0).max(0.0);

    for (i, (start, end)) in pie_slices(&series.data).into_iter().enumerate() {
        if end <= start {
            continue;
        }
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, end);
        ctx.close_path();

        ctx.set_fill_style(&series.background_color.at(i).into());
        ctx.fill();

        if let Some(border) = &series.border_color {
            ctx.set_stroke_style(&border.at(i).into());
            ctx.set_line_width(series.border_width.unwrap_or(1.0));
            ctx.stroke();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizdash::view::{bar_chart, pie_chart};
    use bizdash::Dataset;

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(270.0), 500.0);
        assert_eq!(nice_ceiling(180.0), 200.0);
        assert_eq!(nice_ceiling(1000.0), 1000.0);
        assert_eq!(nice_ceiling(f64::NAN), 1.0);
    }

    #[test]
    fn test_bar_slots_fill_group() {
        let (first, w) = bar_slot(600.0, 6, 2, 0, 0);
        let (second, _) = bar_slot(600.0, 6, 2, 0, 1);
        assert_eq!(first, 10.0);
        assert_eq!(w, 40.0);
        assert_eq!(second, 50.0);

        let (last, _) = bar_slot(600.0, 6, 2, 5, 1);
        assert_eq!(last + w, 590.0);
        assert_eq!(bar_slot(600.0, 0, 2, 0, 0), (0.0, 0.0));
    }

    #[test]
    fn test_pie_slices_cover_circle() {
        let slices = pie_slices(&[1.0, 1.0, 2.0]);
        assert_eq!(slices[0].0, -PI / 2.0);
        assert!((slices[2].1 - (3.0 * PI / 2.0)).abs() < 1e-9);
        assert!((slices[2].1 - slices[2].0 - PI).abs() < 1e-9);

        let empty = pie_slices(&[0.0, -3.0]);
        assert!(empty.iter().all(|(s, e)| s == e));
    }

    #[test]
    fn test_legend_entries() {
        let dataset = Dataset::seed();

        let bars = legend_entries(&bar_chart(&dataset), ChartKind::Bar);
        let labels: Vec<_> = bars.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["Sales", "Expenses"]);

        let pie = legend_entries(&pie_chart(&dataset), ChartKind::Pie);
        assert_eq!(pie.len(), 3);
        assert_eq!(pie[0].0, "Subscriptions");
        assert_ne!(pie[0].1, pie[1].1);
    }
}

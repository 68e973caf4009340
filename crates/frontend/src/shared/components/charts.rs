//! Inline SVG charts: line, bar, pie and the KPI sparkline.
//!
//! Geometry is computed by plain functions over `f64` slices so it can be
//! tested without a browser; the components only turn it into SVG nodes.
//! Every chart uses a fixed `viewBox` and scales to its container width.

use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};
use std::f64::consts::PI;

pub const CHART_COLORS: [&str; 5] = ["#3b82f6", "#60a5fa", "#93c5fd", "#1e40af", "#0f172a"];

const VIEW_W: f64 = 600.0;
const VIEW_H: f64 = 280.0;
const PAD: f64 = 32.0;

/// A labelled value, the input of every chart
#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    pub label: String,
    pub value: f64,
}

impl Datum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub start: f64,
    pub end: f64,
    pub fraction: f64,
}

/// Upper bound of the value axis; never zero so scaling stays finite
pub fn axis_max(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

/// Points of a line chart inside a `width` x `height` box with `pad` margin.
/// A single value is drawn in the horizontal middle.
pub fn line_points(values: &[f64], width: f64, height: f64, pad: f64) -> Vec<(f64, f64)> {
    let max = axis_max(values);
    let inner_w = width - 2.0 * pad;
    let inner_h = height - 2.0 * pad;
    let step = if values.len() > 1 {
        inner_w / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = if values.len() == 1 {
                pad + inner_w / 2.0
            } else {
                pad + step * i as f64
            };
            let y = height - pad - (v.max(0.0) / max) * inner_h;
            (x, y)
        })
        .collect()
}

/// `points` attribute of an SVG polyline
pub fn polyline_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Evenly spaced bars; `gap` is the fraction of each slot left empty
pub fn bar_layout(values: &[f64], width: f64, height: f64, pad: f64, gap: f64, max: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = if max > 0.0 { max } else { 1.0 };
    let inner_h = height - 2.0 * pad;
    let slot = (width - 2.0 * pad) / values.len() as f64;
    let bar_w = slot * (1.0 - gap.clamp(0.0, 0.9));
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let h = (v.max(0.0) / max).min(1.0) * inner_h;
            BarRect {
                x: pad + slot * i as f64 + (slot - bar_w) / 2.0,
                y: height - pad - h,
                width: bar_w,
                height: h,
            }
        })
        .collect()
}

/// Angles (radians, clockwise from 12 o'clock) of each slice.
/// Negative values count as zero; an all-zero input yields no slices.
pub fn pie_slices(values: &[f64]) -> Vec<PieSlice> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    values
        .iter()
        .map(|v| {
            let fraction = v.max(0.0) / total;
            let end = start + fraction * 2.0 * PI;
            let slice = PieSlice {
                start,
                end,
                fraction,
            };
            start = end;
            slice
        })
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// SVG path of a pie wedge
pub fn arc_path(cx: f64, cy: f64, r: f64, slice: &PieSlice) -> String {
    let (x1, y1) = polar(cx, cy, r, slice.start);
    let (x2, y2) = polar(cx, cy, r, slice.end);
    let large_arc = if slice.end - slice.start > PI { 1 } else { 0 };
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z",
        cx, cy, x1, y1, r, r, large_arc, x2, y2
    )
}

/// Stroke path of a semicircle gauge filled to `fraction` (clamped to 0..=1),
/// starting at 9 o'clock and sweeping clockwise over the top
pub fn gauge_arc(cx: f64, cy: f64, r: f64, fraction: f64) -> String {
    let start = -PI / 2.0;
    let end = start + fraction.clamp(0.0, 1.0) * PI;
    let (x1, y1) = polar(cx, cy, r, start);
    let (x2, y2) = polar(cx, cy, r, end);
    format!(
        "M {:.2} {:.2} A {:.2} {:.2} 0 0 1 {:.2} {:.2}",
        x1, y1, r, r, x2, y2
    )
}

/// Shorten axis labels: anything longer than `max_chars` keeps
/// `max_chars - 1` characters and gets an ellipsis
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let kept: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

pub fn color_at(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Titled frame around a chart with its own loading spinner
#[component]
pub fn ChartPanel(
    title: &'static str,
    #[prop(into, optional)] loading: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="chart-panel">
            <header class="chart-panel__header">
                <h3 class="chart-panel__title">{title}</h3>
                <Show when=move || loading.get()>
                    <Spinner size=SpinnerSize::Tiny />
                </Show>
            </header>
            <div class="chart-panel__body">{children()}</div>
        </section>
    }
}

#[component]
fn ChartEmpty() -> impl IntoView {
    view! { <div class="chart chart--empty">"No data"</div> }
}

#[component]
pub fn LineChart(
    #[prop(into)] data: Signal<Vec<Datum>>,
    /// Formats values for the tooltip
    #[prop(optional)]
    format_value: Option<fn(f64) -> String>,
) -> impl IntoView {
    let fmt = format_value.unwrap_or(|v| format!("{:.0}", v));

    move || {
        let data = data.get();
        if data.is_empty() {
            return view! { <ChartEmpty /> }.into_any();
        }
        let values: Vec<f64> = data.iter().map(|d| d.value).collect();
        let points = line_points(&values, VIEW_W, VIEW_H, PAD);
        let polyline = polyline_attr(&points);
        let max_label = fmt(axis_max(&values));
        let first_label = data.first().map(|d| d.label.clone()).unwrap_or_default();
        let last_label = data.last().map(|d| d.label.clone()).unwrap_or_default();

        let markers = points
            .iter()
            .zip(data.iter())
            .map(|((x, y), d)| {
                let tip = format!("{}: {}", d.label, fmt(d.value));
                view! {
                    <circle cx={*x} cy={*y} r="3" fill={CHART_COLORS[0]}>
                        <title>{tip}</title>
                    </circle>
                }
            })
            .collect_view();

        view! {
            <svg class="chart chart--line" viewBox={format!("0 0 {} {}", VIEW_W, VIEW_H)} preserveAspectRatio="none">
                <line x1={PAD} y1={VIEW_H - PAD} x2={VIEW_W - PAD} y2={VIEW_H - PAD} class="chart__axis"/>
                <text x={PAD - 4.0} y={PAD} text-anchor="end" class="chart__tick">{max_label}</text>
                <polyline points=polyline fill="none" stroke={CHART_COLORS[0]} stroke-width="2"/>
                {markers}
                <text x={PAD} y={VIEW_H - 8.0} class="chart__tick">{first_label}</text>
                <text x={VIEW_W - PAD} y={VIEW_H - 8.0} text-anchor="end" class="chart__tick">{last_label}</text>
            </svg>
        }
        .into_any()
    }
}

#[component]
pub fn BarChart(
    #[prop(into)] data: Signal<Vec<Datum>>,
    /// Fixed top of the value axis, e.g. 5 for ratings
    #[prop(optional)]
    value_max: Option<f64>,
    /// Cycle through the palette instead of a single colour
    #[prop(optional)]
    multicolor: bool,
    /// Single bar colour, the first palette entry by default
    #[prop(optional)]
    color: Option<&'static str>,
    #[prop(default = 16)] label_max_chars: usize,
    #[prop(optional)] format_value: Option<fn(f64) -> String>,
) -> impl IntoView {
    let fmt = format_value.unwrap_or(|v| format!("{:.0}", v));

    move || {
        let data = data.get();
        if data.is_empty() {
            return view! { <ChartEmpty /> }.into_any();
        }
        let values: Vec<f64> = data.iter().map(|d| d.value).collect();
        let max = value_max.unwrap_or_else(|| axis_max(&values));
        let bars = bar_layout(&values, VIEW_W, VIEW_H, PAD, 0.25, max);
        let max_label = fmt(max);

        let rects = bars
            .into_iter()
            .zip(data.into_iter())
            .enumerate()
            .map(|(i, (bar, d))| {
                let fill = if multicolor { color_at(i) } else { color.unwrap_or(CHART_COLORS[0]) };
                let tip = format!("{}: {}", d.label, fmt(d.value));
                let label = truncate_label(&d.label, label_max_chars);
                let label_x = bar.x + bar.width / 2.0;
                view! {
                    <g>
                        <rect x={bar.x} y={bar.y} width={bar.width} height={bar.height} rx="3" fill=fill>
                            <title>{tip}</title>
                        </rect>
                        <text
                            x=label_x
                            y={VIEW_H - PAD + 12.0}
                            text-anchor="end"
                            transform={format!("rotate(-25 {:.1} {:.1})", label_x, VIEW_H - PAD + 12.0)}
                            class="chart__tick"
                        >
                            {label}
                        </text>
                    </g>
                }
            })
            .collect_view();

        view! {
            <svg class="chart chart--bar" viewBox={format!("0 0 {} {}", VIEW_W, VIEW_H + 40.0)}>
                <line x1={PAD} y1={VIEW_H - PAD} x2={VIEW_W - PAD} y2={VIEW_H - PAD} class="chart__axis"/>
                <text x={PAD - 4.0} y={PAD} text-anchor="end" class="chart__tick">{max_label}</text>
                {rects}
            </svg>
        }
        .into_any()
    }
}

#[component]
pub fn PieChart(
    #[prop(into)] data: Signal<Vec<Datum>>,
    #[prop(optional)] format_value: Option<fn(f64) -> String>,
) -> impl IntoView {
    let fmt = format_value.unwrap_or(|v| format!("{:.0}", v));
    const R: f64 = 110.0;
    const C: f64 = 120.0;

    move || {
        let data = data.get();
        let values: Vec<f64> = data.iter().map(|d| d.value).collect();
        let slices = pie_slices(&values);
        if slices.is_empty() {
            return view! { <ChartEmpty /> }.into_any();
        }

        let wedges = slices
            .iter()
            .zip(data.iter())
            .enumerate()
            .filter(|(_, (slice, _))| slice.fraction > 0.0)
            .map(|(i, (slice, d))| {
                let tip = format!("{}: {} ({:.1}%)", d.label, fmt(d.value), slice.fraction * 100.0);
                // a lone full slice has identical arc endpoints and would not render as a path
                if slice.fraction >= 1.0 {
                    view! {
                        <circle cx={C} cy={C} r={R} fill={color_at(i)}><title>{tip}</title></circle>
                    }
                    .into_any()
                } else {
                    view! {
                        <path d={arc_path(C, C, R, slice)} fill={color_at(i)}><title>{tip}</title></path>
                    }
                    .into_any()
                }
            })
            .collect_view();

        let legend = data
            .iter()
            .enumerate()
            .map(|(i, d)| {
                view! {
                    <li class="chart-legend__item">
                        <span class="chart-legend__swatch" style={format!("background:{}", color_at(i))}></span>
                        {d.label.clone()}
                    </li>
                }
            })
            .collect_view();

        view! {
            <div class="chart chart--pie">
                <svg viewBox="0 0 240 240" width="240" height="240">{wedges}</svg>
                <ul class="chart-legend">{legend}</ul>
            </div>
        }
        .into_any()
    }
}

/// Half-donut percentage gauge
#[component]
pub fn Gauge(
    /// 0..=100, out-of-range values are clamped
    #[prop(into)]
    percent: Signal<i64>,
) -> impl IntoView {
    const R: f64 = 80.0;
    const CX: f64 = 100.0;
    const CY: f64 = 100.0;
    let track = gauge_arc(CX, CY, R, 1.0);
    view! {
        <svg class="gauge" viewBox="0 0 200 110" width="200" height="110">
            <path d={track} class="gauge__track" fill="none" stroke-width="18"/>
            {move || {
                let fraction = percent.get().clamp(0, 100) as f64 / 100.0;
                (fraction > 0.0).then(|| view! {
                    <path
                        d={gauge_arc(CX, CY, R, fraction)}
                        fill="none"
                        stroke={CHART_COLORS[0]}
                        stroke-width="18"
                    />
                })
            }}
        </svg>
    }
}

/// Tiny trend line for KPI cards
#[component]
pub fn Sparkline(#[prop(into)] values: Signal<Vec<f64>>) -> impl IntoView {
    const W: f64 = 120.0;
    const H: f64 = 32.0;
    move || {
        let points = line_points(&values.get(), W, H, 2.0);
        view! {
            <svg class="sparkline" viewBox={format!("0 0 {} {}", W, H)} width={W} height={H}>
                <polyline points={polyline_attr(&points)} fill="none" stroke="currentColor" stroke-width="1.5"/>
            </svg>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_axis_max_never_zero() {
        assert_eq!(axis_max(&[]), 1.0);
        assert_eq!(axis_max(&[0.0, 0.0]), 1.0);
        assert_eq!(axis_max(&[3.0, 9.0, 4.0]), 9.0);
    }

    #[test]
    fn test_line_points_span_inner_box() {
        let points = line_points(&[0.0, 50.0, 100.0], 220.0, 120.0, 10.0);
        assert_eq!(points.len(), 3);
        assert!(approx(points[0].0, 10.0) && approx(points[0].1, 110.0));
        assert!(approx(points[1].0, 110.0) && approx(points[1].1, 60.0));
        assert!(approx(points[2].0, 210.0) && approx(points[2].1, 10.0));
    }

    #[test]
    fn test_single_point_is_centered() {
        let points = line_points(&[5.0], 100.0, 50.0, 0.0);
        assert_eq!(points, vec![(50.0, 0.0)]);
    }

    #[test]
    fn test_polyline_attr() {
        assert_eq!(polyline_attr(&[(1.0, 2.3), (3.0, 4.0)]), "1.0,2.3 3.0,4.0");
        assert_eq!(polyline_attr(&[]), "");
    }

    #[test]
    fn test_bar_layout() {
        let bars = bar_layout(&[10.0, 5.0], 120.0, 110.0, 10.0, 0.0, 10.0);
        assert_eq!(bars.len(), 2);
        assert!(approx(bars[0].width, 50.0));
        assert!(approx(bars[0].height, 90.0));
        assert!(approx(bars[1].x, 60.0));
        assert!(approx(bars[1].height, 45.0));
        assert!(approx(bars[1].y, 55.0));
    }

    #[test]
    fn test_bar_layout_caps_at_max() {
        let bars = bar_layout(&[7.0], 100.0, 100.0, 0.0, 0.0, 5.0);
        assert!(approx(bars[0].height, 100.0));
        assert!(bar_layout(&[], 100.0, 100.0, 0.0, 0.0, 5.0).is_empty());
    }

    #[test]
    fn test_pie_slices_cover_circle() {
        let slices = pie_slices(&[1.0, 1.0, 2.0]);
        assert!(approx(slices[0].fraction, 0.25));
        assert!(approx(slices[2].fraction, 0.5));
        assert!(approx(slices[0].start, 0.0));
        assert!(approx(slices[2].end, 2.0 * PI));
        assert!(approx(slices[1].start, slices[0].end));
    }

    #[test]
    fn test_pie_without_positive_total() {
        assert!(pie_slices(&[]).is_empty());
        assert!(pie_slices(&[0.0, -3.0]).is_empty());
    }

    #[test]
    fn test_arc_path_quarter() {
        let slice = PieSlice {
            start: 0.0,
            end: PI / 2.0,
            fraction: 0.25,
        };
        assert_eq!(
            arc_path(10.0, 10.0, 10.0, &slice),
            "M 10.00 10.00 L 10.00 0.00 A 10.00 10.00 0 0 1 20.00 10.00 Z"
        );
    }

    #[test]
    fn test_arc_path_large_arc_flag() {
        let slice = PieSlice {
            start: 0.0,
            end: 1.5 * PI,
            fraction: 0.75,
        };
        assert!(arc_path(0.0, 0.0, 1.0, &slice).contains(" 0 1 1 "));
    }

    #[test]
    fn test_gauge_arc_sweeps_over_the_top() {
        assert_eq!(
            gauge_arc(100.0, 100.0, 80.0, 1.0),
            "M 20.00 100.00 A 80.00 80.00 0 0 1 180.00 100.00"
        );
        assert!(gauge_arc(100.0, 100.0, 80.0, 0.5).ends_with(" 100.00 20.00"));
    }

    #[test]
    fn test_gauge_arc_clamps_fraction() {
        assert_eq!(gauge_arc(100.0, 100.0, 80.0, 2.0), gauge_arc(100.0, 100.0, 80.0, 1.0));
        assert!(gauge_arc(100.0, 100.0, 80.0, -0.5).ends_with(" 20.00 100.00"));
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Cable", 25), "Cable");
        assert_eq!(truncate_label("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_label("Ёлка-игрушка", 4), "Ёлк…");
    }

    #[test]
    fn test_colors_cycle() {
        assert_eq!(color_at(0), "#3b82f6");
        assert_eq!(color_at(5), "#3b82f6");
    }
}

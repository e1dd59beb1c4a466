//! Small SVG charts for the analytics tab.
//!
//! Geometry is computed by plain functions so it can be tested without a
//! browser; the components only turn it into markup.

use std::f64::consts::{FRAC_PI_2, TAU};

use yew::prelude::*;

const LINE_WIDTH: f64 = 600.0;
const LINE_HEIGHT: f64 = 240.0;
const LINE_PADDING: f64 = 32.0;

const PIE_SIZE: f64 = 240.0;
const PIE_RADIUS: f64 = 96.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: AttrValue,
    pub value: f64,
}

/// Positions of `values` spread evenly across a `width` x `height` canvas,
/// scaled so the largest value touches the top padding. Larger values have
/// smaller `y`.
pub fn line_points(
    values: &[f64],
    width: f64,
    height: f64,
    padding: f64,
) -> Vec<(f64, f64)> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let inner_width = width - 2.0 * padding;
    let inner_height = height - 2.0 * padding;
    let step = match values.len() {
        0 | 1 => 0.0,
        n => inner_width / (n - 1) as f64,
    };

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = if values.len() == 1 {
                width / 2.0
            } else {
                padding + step * i as f64
            };
            let ratio = if max > 0.0 { value.max(0.0) / max } else { 0.0 };
            let y = height - padding - ratio * inner_height;
            (x, y)
        })
        .collect()
}

pub fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Start and end angle of one pie slice, in radians clockwise from 12
/// o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start: f64,
    pub end: f64,
}

/// One slice per value, proportional to its share of the total. All slices
/// are empty when the total is zero.
pub fn pie_slices(values: &[f64]) -> Vec<Slice> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    let mut start = 0.0;
    values
        .iter()
        .map(|value| {
            let sweep = if total > 0.0 {
                value.max(0.0) / total * TAU
            } else {
                0.0
            };
            let slice = Slice {
                start,
                end: start + sweep,
            };
            start += sweep;
            slice
        })
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    let angle = angle - FRAC_PI_2;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// SVG path for a slice. `None` for an empty slice. A slice covering the
/// whole circle is drawn as two half arcs, since a single arc whose ends
/// meet renders nothing.
pub fn slice_path(cx: f64, cy: f64, r: f64, slice: Slice) -> Option<String> {
    let sweep = slice.end - slice.start;
    if sweep <= f64::EPSILON {
        return None;
    }
    if sweep >= TAU - 1e-9 {
        return Some(format!(
            "M {:.2} {:.2} A {r} {r} 0 1 1 {:.2} {:.2} \
             A {r} {r} 0 1 1 {:.2} {:.2} Z",
            cx,
            cy - r,
            cx,
            cy + r,
            cx,
            cy - r
        ));
    }

    let (x0, y0) = polar(cx, cy, r, slice.start);
    let (x1, y1) = polar(cx, cy, r, slice.end);
    let large_arc = u8::from(sweep > std::f64::consts::PI);
    Some(format!(
        "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} \
         A {r} {r} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
    ))
}

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub points: Vec<ChartPoint>,
    /// Legend entry for the series.
    pub series: AttrValue,
    pub color: AttrValue,
    /// Formats values for the point tooltips.
    pub format_value: Callback<f64, String>,
}

#[function_component]
pub fn LineChart(props: &LineChartProps) -> Html {
    let values: Vec<f64> = props.points.iter().map(|p| p.value).collect();
    let positions =
        line_points(&values, LINE_WIDTH, LINE_HEIGHT, LINE_PADDING);
    let baseline = LINE_HEIGHT - LINE_PADDING;

    html! {
        <div class="w-full">
            <svg
                viewBox={format!("0 0 {LINE_WIDTH} {LINE_HEIGHT}")}
                class="w-full h-64"
                role="img"
            >
                {for (1..=3).map(|i| {
                    let y = LINE_PADDING
                        + (baseline - LINE_PADDING) * f64::from(i) / 4.0;
                    html! {
                        <line
                            x1={LINE_PADDING.to_string()}
                            x2={(LINE_WIDTH - LINE_PADDING).to_string()}
                            y1={y.to_string()}
                            y2={y.to_string()}
                            stroke="#e5e7eb"
                            stroke-dasharray="3 3"
                        />
                    }
                })}
                <line
                    x1={LINE_PADDING.to_string()}
                    x2={(LINE_WIDTH - LINE_PADDING).to_string()}
                    y1={baseline.to_string()}
                    y2={baseline.to_string()}
                    stroke="#9ca3af"
                />
                <polyline
                    points={polyline(&positions)}
                    fill="none"
                    stroke={props.color.clone()}
                    stroke-width="2"
                />
                {for props.points.iter().zip(&positions).map(|(point, xy)| {
                    let (x, y) = xy;
                    html! {
                        <g>
                            <circle
                                cx={x.to_string()}
                                cy={y.to_string()}
                                r="4"
                                fill="white"
                                stroke={props.color.clone()}
                                stroke-width="2"
                            >
                                <title>
                                    {format!(
                                        "{}: {}",
                                        point.label,
                                        props.format_value.emit(point.value)
                                    )}
                                </title>
                            </circle>
                            <text
                                x={x.to_string()}
                                y={(baseline + 20.0).to_string()}
                                text-anchor="middle"
                                class="fill-gray-500 text-xs"
                            >
                                {point.label.clone()}
                            </text>
                        </g>
                    }
                })}
            </svg>
            <div class="flex justify-center items-center gap-2 text-sm">
                <span
                    class="inline-block w-3 h-3 rounded-full"
                    style={format!("background-color: {}", props.color)}
                />
                <span>{props.series.clone()}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub points: Vec<ChartPoint>,
    /// One color per point, reused cyclically.
    pub colors: Vec<AttrValue>,
}

#[function_component]
pub fn PieChart(props: &PieChartProps) -> Html {
    let values: Vec<f64> = props.points.iter().map(|p| p.value).collect();
    let slices = pie_slices(&values);
    let center = PIE_SIZE / 2.0;
    let color = |i: usize| {
        props
            .colors
            .get(i % props.colors.len().max(1))
            .cloned()
            .unwrap_or_else(|| AttrValue::from("#9ca3af"))
    };

    html! {
        <div class="w-full flex flex-col items-center">
            <svg
                viewBox={format!("0 0 {PIE_SIZE} {PIE_SIZE}")}
                class="w-64 h-64"
                role="img"
            >
                {for slices.iter().enumerate().filter_map(|(i, slice)| {
                    let path = slice_path(center, center, PIE_RADIUS, *slice)?;
                    Some(html! {
                        <path d={path} fill={color(i)} stroke="white" />
                    })
                })}
            </svg>
            <ul class="flex flex-wrap justify-center gap-4 text-sm">
                {for props.points.iter().enumerate().map(|(i, point)| html! {
                    <li class="flex items-center gap-2">
                        <span
                            class="inline-block w-3 h-3 rounded-full"
                            style={format!("background-color: {}", color(i))}
                        />
                        {format!("{} ({})", point.label, point.value)}
                    </li>
                })}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_line_points_scale_to_max() {
        let points = line_points(&[0.0, 50.0, 100.0], 200.0, 100.0, 10.0);
        assert_eq!(points, vec![(10.0, 90.0), (100.0, 50.0), (190.0, 10.0)]);
    }

    #[test]
    fn test_line_points_edge_cases() {
        assert!(line_points(&[], 200.0, 100.0, 10.0).is_empty());
        assert_eq!(
            line_points(&[42.0], 200.0, 100.0, 10.0),
            vec![(100.0, 10.0)]
        );
        // all zero stays on the baseline
        assert_eq!(
            line_points(&[0.0, 0.0], 200.0, 100.0, 10.0),
            vec![(10.0, 90.0), (190.0, 90.0)]
        );
    }

    #[test]
    fn test_polyline() {
        assert_eq!(polyline(&[(1.0, 2.0), (3.75, 4.0)]), "1.0,2.0 3.8,4.0");
    }

    #[test]
    fn test_pie_slices_are_proportional() {
        let slices = pie_slices(&[3.0, 1.0, 0.0]);
        assert!(close(slices[0].start, 0.0));
        assert!(close(slices[0].end, TAU * 0.75));
        assert!(close(slices[1].end, TAU));
        assert!(close(slices[2].start, slices[2].end));
    }

    #[test]
    fn test_pie_slices_without_data() {
        let slices = pie_slices(&[0.0, 0.0]);
        assert!(slices.iter().all(|s| s.start == 0.0 && s.end == 0.0));
        assert!(slice_path(50.0, 50.0, 40.0, slices[0]).is_none());
    }

    #[test]
    fn test_slice_paths() {
        let quarter = Slice {
            start: 0.0,
            end: FRAC_PI_2,
        };
        assert_eq!(
            slice_path(50.0, 50.0, 40.0, quarter).unwrap(),
            "M 50.00 50.00 L 50.00 10.00 A 40 40 0 0 1 90.00 50.00 Z"
        );

        let full = Slice {
            start: 0.0,
            end: TAU,
        };
        let path = slice_path(50.0, 50.0, 40.0, full).unwrap();
        assert_eq!(path.matches(" A ").count(), 2);
    }
}

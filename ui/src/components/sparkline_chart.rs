//! An inline-SVG sparkline: a smoothed week-trend line over dashed horizontal
//! grid lines, with no axes and no point markers.

use dioxus::prelude::*;

use api::percent_change::Trend;
use api::sparkline::Sparkline;
use api::sparkline::SPARKLINE_LEN;

// Fixed drawing surface; CSS stretches it to the card width at fixed height.
const VIEW_W: f64 = 260.0;
const VIEW_H: f64 = 80.0;
const PAD: f64 = 4.0;

/// Y positions (as fractions of the height) of the horizontal grid lines.
const GRID_FRACTIONS: [f64; 3] = [0.25, 0.5, 0.75];

#[component]
pub fn SparklineChart(sparkline: Sparkline, trend: Trend) -> Element {
    let points = project(&sparkline);
    let path = smooth_path(&points);

    let first = sparkline.samples()[0];
    let last = sparkline.samples()[SPARKLINE_LEN - 1];
    let tooltip = format!("7-day trend: {first:.2} to {last:.2}");

    rsx! {
        svg {
            class: "sparkline",
            view_box: "0 0 {VIEW_W} {VIEW_H}",
            preserve_aspect_ratio: "none",
            role: "img",
            title { "{tooltip}" }
            for frac in GRID_FRACTIONS {
                line {
                    class: "grid-line",
                    x1: "0",
                    x2: "{VIEW_W}",
                    y1: "{VIEW_H * frac}",
                    y2: "{VIEW_H * frac}",
                    stroke_dasharray: "3 3",
                }
            }
            path {
                d: "{path}",
                fill: "none",
                stroke: "{trend.stroke()}",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}

/// Maps the week's samples onto the drawing surface. X positions spread
/// evenly across the width; Y spans the sample range, with larger values
/// sitting higher. A flat week projects onto the vertical midline.
fn project(sparkline: &Sparkline) -> Vec<(f64, f64)> {
    let samples = sparkline.samples();
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    sparkline
        .points()
        .map(|point| {
            let step = (point.position - 1) as f64 / (SPARKLINE_LEN - 1) as f64;
            let x = PAD + step * (VIEW_W - 2.0 * PAD);
            let y = if span == 0.0 {
                VIEW_H / 2.0
            } else {
                PAD + (1.0 - (point.value - min) / span) * (VIEW_H - 2.0 * PAD)
            };
            (x, y)
        })
        .collect()
}

/// Builds a smoothed SVG path through the projected points, one cubic Bézier
/// segment per point pair with Catmull-Rom control points.
fn smooth_path(points: &[(f64, f64)]) -> String {
    let Some(&(x0, y0)) = points.first() else {
        return String::new();
    };

    let mut d = format!("M{x0:.1} {y0:.1}");
    for i in 0..points.len().saturating_sub(1) {
        let p0 = if i == 0 { points[0] } else { points[i - 1] };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = if i + 2 < points.len() { points[i + 2] } else { p2 };

        let c1 = (p1.0 + (p2.0 - p0.0) / 6.0, p1.1 + (p2.1 - p0.1) / 6.0);
        let c2 = (p2.0 - (p3.0 - p1.0) / 6.0, p2.1 - (p3.1 - p1.1) / 6.0);

        d.push_str(&format!(
            " C{:.1} {:.1}, {:.1} {:.1}, {:.1} {:.1}",
            c1.0, c1.1, c2.0, c2.1, p2.0, p2.1
        ));
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_spans_the_padded_surface() {
        let sparkline = Sparkline::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let points = project(&sparkline);

        assert_eq!(points.len(), SPARKLINE_LEN);
        // first sample is the minimum: bottom of the padded area
        assert_eq!(points[0], (PAD, VIEW_H - PAD));
        // last sample is the maximum: top of the padded area
        assert_eq!(points[6], (VIEW_W - PAD, PAD));
    }

    #[test]
    fn flat_week_projects_onto_the_midline() {
        let sparkline = Sparkline::new([0.45; SPARKLINE_LEN]);
        for (_, y) in project(&sparkline) {
            assert_eq!(y, VIEW_H / 2.0);
        }
    }

    #[test]
    fn path_has_one_cubic_segment_per_point_pair() {
        let sparkline = Sparkline::new([3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0]);
        let path = smooth_path(&project(&sparkline));

        assert!(path.starts_with('M'));
        assert_eq!(path.matches('C').count(), SPARKLINE_LEN - 1);
    }

    #[test]
    fn empty_input_yields_an_empty_path() {
        assert_eq!(smooth_path(&[]), "");
    }
}

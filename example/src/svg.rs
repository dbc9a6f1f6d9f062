//! Renders a [`RingSliderView`] as standalone SVG markup.

use std::fmt;

use ring_slider::{ArcDash, RingSliderView};

const TRACK_COLOR: &str = "#E1007E";
const ACTIVE_COLOR: &str = "#F5F5F5";
const CLIP_COLOR: &str = "#FFFFFF";
const THUMB_COLOR: &str = "#000000";
const CAPTION_HEIGHT: f64 = 32.0;

fn dash_attrs(arc: &ArcDash) -> String {
    format!(
        r#"stroke-dasharray="{} {}" stroke-dashoffset="{}""#,
        arc.dash_array[0], arc.dash_array[1], arc.dash_offset
    )
}

/// SVG document of one frame, written through [`fmt::Display`].
pub struct Svg<'a>(pub &'a RingSliderView);

impl fmt::Display for Svg<'_> {
    /// Draws the ring, both thumbs, the labels and a smoothing caption.
    ///
    /// The active and clip circles are rotated a quarter turn about the
    /// center, so their dash origin sits at the bottom of the ring.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let size = view.size;
        let height = size + CAPTION_HEIGHT;
        let (cx, cy) = (view.center.x, view.center.y);
        let r = view.track_radius;
        let rotate = format!("rotate(90 {cx} {cy})");

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{height}" viewBox="0 0 {size} {height}">"#
        )?;
        writeln!(
            f,
            r#"  <circle cx="{cx}" cy="{cy}" r="{r}" fill="none" stroke="{TRACK_COLOR}" stroke-width="{}"/>"#,
            view.strokes.track
        )?;
        writeln!(
            f,
            r#"  <circle cx="{cx}" cy="{cy}" r="{r}" fill="none" stroke="{ACTIVE_COLOR}" stroke-width="{}" {} transform="{rotate}"/>"#,
            view.strokes.active,
            dash_attrs(&view.active_arc)
        )?;
        writeln!(
            f,
            r#"  <circle cx="{cx}" cy="{cy}" r="{r}" fill="none" stroke="{CLIP_COLOR}" stroke-width="{}" {} transform="{rotate}"/>"#,
            view.strokes.clip,
            dash_attrs(&view.clip_arc)
        )?;
        for (index, thumb) in view.thumbs().iter().enumerate() {
            writeln!(
                f,
                r#"  <circle class="thumb-{index}" cx="{}" cy="{}" r="{}" fill="{THUMB_COLOR}"/>"#,
                thumb.x,
                thumb.y,
                view.thumb_diameter / 2.0
            )?;
        }
        writeln!(
            f,
            r#"  <text x="{}" y="{cy}" text-anchor="middle" font-family="Arial"><tspan font-weight="bold">From</tspan><tspan x="{}" dy="1.2em">{}</tspan></text>"#,
            cx - 40.0,
            cx - 40.0,
            view.label_min
        )?;
        writeln!(
            f,
            r#"  <text x="{}" y="{cy}" text-anchor="middle" font-family="Arial"><tspan font-weight="bold">To</tspan><tspan x="{}" dy="1.2em">{}</tspan></text>"#,
            cx + 40.0,
            cx + 40.0,
            view.label_max
        )?;
        writeln!(
            f,
            r#"  <text x="8" y="{}" font-family="Arial">Smooth (disabling creates 'staggered' effect): {}</text>"#,
            size + CAPTION_HEIGHT * 0.7,
            if view.smooth { "on" } else { "off" }
        )?;
        writeln!(f, "</svg>")
    }
}

/// Renders `view` into a standalone SVG string.
pub fn render(view: &RingSliderView) -> String {
    Svg(view).to_string()
}

#[cfg(test)]
mod tests {
    use ring_slider::{RingSlider, RingSliderArgs};

    use super::*;

    fn view() -> RingSliderView {
        RingSlider::new(&RingSliderArgs::default().max_value(800.0))
            .unwrap()
            .view()
    }

    #[test]
    fn draws_three_rings_and_two_thumbs() {
        let svg = render(&view());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 5);
        assert_eq!(svg.matches("rotate(90 200 200)").count(), 2);
        assert!(svg.contains(r#"stroke-width="43""#));
        assert!(svg.contains(r#"stroke-width="60""#));
    }

    #[test]
    fn shows_labels_and_smoothing() {
        let svg = render(&view());
        assert!(svg.contains(">80</tspan>"));
        assert!(svg.contains(">640</tspan>"));
        assert!(svg.contains("effect): on"));
    }

    #[test]
    fn display_streams_into_any_writer() {
        use std::fmt::Write as _;

        let view = view();
        let mut out = String::from("<!-- frame -->\n");
        write!(out, "{}", Svg(&view)).unwrap();
        assert_eq!(out.strip_prefix("<!-- frame -->\n"), Some(render(&view).as_str()));
        assert_eq!(out.matches("</svg>").count(), 1);
    }

    #[test]
    fn emits_clip_dash_parameters() {
        let view = view();
        let svg = render(&view);
        assert!(svg.contains(&dash_attrs(&view.clip_arc)));
        assert!(svg.contains(&dash_attrs(&view.active_arc)));
    }
}

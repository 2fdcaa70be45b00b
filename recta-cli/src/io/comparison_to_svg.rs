use itertools::Itertools;
use recta_rs::geometry::primitives::Rectangle;
use recta_rs::relations::ComparisonResult;
use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::io::svg_util;
use crate::io::svg_util::SvgDrawOptions;

/// Draws both rectangles, stroked in the theme's first and second color, together with the
/// intersection points of their comparison.
pub fn comparison_to_svg(
    r1: &Rectangle,
    r2: &Rectangle,
    result: &ComparisonResult,
    options: SvgDrawOptions,
) -> Document {
    let theme = &options.theme;

    let (x_min, y_min) = (r1.x_min().min(r2.x_min()), r1.y_min().min(r2.y_min()));
    let (x_max, y_max) = (r1.x_max().max(r2.x_max()), r1.y_max().max(r2.y_max()));
    let margin = 0.1 * f64::max(x_max - x_min, y_max - y_min);
    let vbox = (
        x_min - margin,
        y_min - margin,
        x_max - x_min + 2.0 * margin,
        y_max - y_min + 2.0 * margin,
    );

    let stroke_width = f64::min(vbox.2, vbox.3) * 0.002 * theme.stroke_width_multiplier;

    let background = svg_util::aa_rect(vbox, &[("fill", &*format!("{}", theme.background_fill))]);

    let rect_group = |id: &str, rect: &Rectangle, color: String| {
        let title = Title::new(format!(
            "{id}, x: {}, y: {}, width: {}, height: {}",
            rect.x(),
            rect.y(),
            rect.width(),
            rect.height()
        ));
        Group::new()
            .set("id", id.replace(' ', "_"))
            .add(svg_util::rectangle(
                rect,
                &[
                    ("fill", "none"),
                    ("stroke", &*color),
                    ("stroke-width", &*format!("{stroke_width}")),
                ],
            ))
            .add(title)
    };

    let mut document = Document::new()
        .set(
            "viewBox",
            format!("{} {} {} {}", vbox.0, vbox.1, vbox.2, vbox.3),
        )
        .set("width", vbox.2 * options.scale)
        .set("height", vbox.3 * options.scale)
        .add(background)
        .add(rect_group("rectangle 1", r1, theme.first_stroke.to_string()))
        .add(rect_group("rectangle 2", r2, theme.second_stroke.to_string()));

    if options.intersections {
        let fill = theme.intersection_fill.to_string();
        let intersections = result.intersections.iter().fold(
            Group::new().set("id", "intersections"),
            |group, p| {
                group.add(
                    svg_util::point(*p, Some(&fill), Some(2.0 * stroke_width))
                        .add(Title::new(format!("intersection: {p}"))),
                )
            },
        );
        document = document.add(intersections);
    }

    if options.label {
        let font_size = f64::min(vbox.2, vbox.3) * 0.03;
        let intersections = match result.intersections.is_empty() {
            true => "none".to_owned(),
            false => result
                .intersections
                .iter()
                .map(|p| format!("({p})"))
                .join(" "),
        };
        let label_content = format!(
            "intersections: {} | containment: {} | adjacency: {:?}",
            intersections,
            result.containment.any(),
            result.adjacency
        );
        let label = Text::new(label_content)
            .set("x", vbox.0 + 0.5 * margin)
            .set("y", vbox.1 + 0.5 * margin)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500");
        document = document.add(label);
    }

    document
}

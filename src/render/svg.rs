use crate::models::{BitMatrix, Color, RenderOptions};

/// Render a module matrix as an SVG document
///
/// The view box is measured in modules (symbol plus quiet zone on each side);
/// `width`/`height` carry the requested pixel size when it is non-zero. Dark
/// modules are unit squares in a single path. Always uses `\n` newlines.
pub fn render_svg(matrix: &BitMatrix, options: &RenderOptions) -> String {
    let margin = options.margin as usize;
    let dimension = matrix.size() + 2 * margin;
    let size_attrs = if options.width > 0 {
        format!(" width=\"{0}\" height=\"{0}\"", options.width)
    } else {
        String::new()
    };

    let mut path = Vec::new();
    for y in 0..matrix.size() {
        for x in 0..matrix.size() {
            if matrix.get(x, y) {
                path.push(format!("M{},{}h1v1h-1z", x + margin, y + margin));
            }
        }
    }

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\"{size_attrs} \
         viewBox=\"0 0 {dimension} {dimension}\" shape-rendering=\"crispEdges\" stroke=\"none\">\n"
    ));
    svg.push_str(&format!(
        "\t<rect width=\"100%\" height=\"100%\"{}/>\n",
        fill_attrs(options.background)
    ));
    svg.push_str(&format!(
        "\t<path d=\"{}\"{}/>\n",
        path.join(" "),
        fill_attrs(options.foreground)
    ));
    svg.push_str("</svg>\n");
    svg
}

fn fill_attrs(color: Color) -> String {
    let rgb = Color { a: 255, ..color };
    if color.a == 255 {
        format!(" fill=\"{}\"", rgb.to_hex())
    } else {
        format!(
            " fill=\"{}\" fill-opacity=\"{:.3}\"",
            rgb.to_hex(),
            color.a as f64 / 255.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_header_and_viewbox() {
        let matrix = BitMatrix::from_fn(21, |x, y| x == 0 && y == 0);
        let svg = render_svg(&matrix, &RenderOptions::default());
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(svg.contains("viewBox=\"0 0 25 25\""));
        assert!(svg.contains("width=\"256\" height=\"256\""));
        assert!(svg.contains("<path d=\"M2,2h1v1h-1z\" fill=\"#000000\"/>"));
        assert!(svg.contains("<rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_translucent_colors_use_opacity() {
        let matrix = BitMatrix::new(21, 21);
        let options = RenderOptions {
            background: Color {
                a: 0,
                ..Color::WHITE
            },
            width: 0,
            ..RenderOptions::default()
        };
        let svg = render_svg(&matrix, &options);
        assert!(svg.contains("fill-opacity=\"0.000\""));
        assert!(!svg.contains("width=\"0\""));
    }

    #[test]
    fn test_path_joins_dark_modules() {
        let matrix = BitMatrix::from_fn(21, |x, y| y == 0 && x < 2);
        let options = RenderOptions {
            margin: 0,
            ..RenderOptions::default()
        };
        let svg = render_svg(&matrix, &options);
        assert!(svg.contains("<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"256\" height=\"256\" viewBox=\"0 0 21 21\""));
        assert!(svg.contains("<path d=\"M0,0h1v1h-1z M1,0h1v1h-1z\" fill=\"#000000\"/>"));
    }
}

//! Shape, eye and logo styling on real encoded symbols

use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};
use qrcraft::render::shapes::grid_for;
use qrcraft::render::{CellGrid, apply_shape_style, rasterize};
use qrcraft::{
    Color, EyeStyle, Generator, ModuleGrid, PatternOptions, QrRequest, RenderOptions, ShapeStyle,
    encode,
};

fn plain_symbol(width: u32) -> RgbaImage {
    let matrix = encode("https://example.com/shapes", Default::default()).unwrap();
    let options = RenderOptions::default().with_width(width);
    rasterize(&matrix, &options).0
}

#[test]
fn test_every_style_paints_only_two_colors() {
    let image = plain_symbol(300);
    let grid = CellGrid::approximate(image.width(), image.height()).unwrap();
    let fg = Color::rgb(0x1e, 0x3a, 0x8a);
    let bg = Color::rgb(0xfe, 0xf3, 0xc7);

    for style in ShapeStyle::ALL {
        let out = apply_shape_style(&image, fg, bg, style, &grid);
        assert_eq!(out.dimensions(), image.dimensions());
        assert!(
            out.pixels()
                .all(|p| *p == fg.to_rgba() || *p == bg.to_rgba()),
            "style {style} produced a third color"
        );
    }
}

#[test]
fn test_classic_on_all_dark_bitmap_is_identity() {
    for width in [25u32, 250, 500] {
        let dark: RgbaImage = ImageBuffer::from_pixel(width, width, Color::BLACK.to_rgba());
        let grid = CellGrid::approximate(width, width).unwrap();
        let out = apply_shape_style(&dark, Color::BLACK, Color::WHITE, ShapeStyle::Classic, &grid);
        assert_eq!(out, dark, "width {width}");
    }
}

#[test]
fn test_all_light_bitmap_becomes_background() {
    let light: RgbaImage = ImageBuffer::from_pixel(200, 200, Rgba([255, 255, 255, 255]));
    let grid = CellGrid::approximate(200, 200).unwrap();
    let bg = Color::rgb(10, 20, 30);
    for style in ShapeStyle::ALL {
        let out = apply_shape_style(&light, Color::BLACK, bg, style, &grid);
        assert!(out.pixels().all(|p| *p == bg.to_rgba()), "style {style}");
    }
}

#[test]
fn test_exact_grid_matches_symbol() {
    let matrix = encode("grid", Default::default()).unwrap();
    let (image, geometry) = rasterize(&matrix, &RenderOptions::default());
    let grid = grid_for(&image, Some(&geometry), true).unwrap();
    assert_eq!(grid.dimensions(), (matrix.size(), matrix.size()));
}

#[test]
fn test_dots_leave_cell_corners_background() {
    let image = plain_symbol(250);
    let grid = CellGrid::approximate(250, 250).unwrap();
    let out = apply_shape_style(&image, Color::BLACK, Color::WHITE, ShapeStyle::Dots, &grid);
    let dark_before = image.pixels().filter(|p| p.0[0] < 128).count();
    let dark_after = out.pixels().filter(|p| p.0[0] < 128).count();
    assert!(dark_after > 0);
    assert!(dark_after < dark_before);
}

#[test]
fn test_circle_eyes_keep_finder_centers_dark() {
    let options = RenderOptions {
        patterns: Some(PatternOptions {
            eye_style: EyeStyle::Circle,
            eye_ball_style: EyeStyle::Circle,
            grid: ModuleGrid::Exact,
            ..PatternOptions::default()
        }),
        ..RenderOptions::default()
    };
    let request = QrRequest::Text {
        content: Some("eyes".into()),
    };
    let styled = Generator::new(options).render(&request).unwrap();

    let matrix = encode("eyes", options.error_correction).unwrap();
    let (_, geometry) = rasterize(&matrix, &options);
    let center = (geometry.origin() + 3.5 * geometry.scale) as u32;
    assert_eq!(*styled.get_pixel(center, center), Color::BLACK.to_rgba());

    // Corner of the outer ring is outside the circle
    let corner = (geometry.origin() + 0.1 * geometry.scale) as u32;
    assert_eq!(*styled.get_pixel(corner, corner), Color::WHITE.to_rgba());
}

#[test]
fn test_logo_is_stamped_in_center() {
    let red = Rgba([220, 20, 60, 255]);
    let logo = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(64, 64, red));
    let image = Generator::default()
        .with_logo(logo)
        .render(&QrRequest::default())
        .unwrap();
    let (w, h) = image.dimensions();
    assert_eq!(*image.get_pixel(w / 2, h / 2), red);
    assert_eq!((w, h), (256, 256));
}

#[test]
fn test_restyle_wrapper_uses_fixed_grid() {
    let image = plain_symbol(250);
    let grid = CellGrid::approximate(250, 250).unwrap();
    let direct = apply_shape_style(&image, Color::BLACK, Color::WHITE, ShapeStyle::Diamond, &grid);
    let wrapped = qrcraft::restyle(&image, Color::BLACK, Color::WHITE, ShapeStyle::Diamond);
    assert_eq!(direct, wrapped);
}

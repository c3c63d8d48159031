use crate::error::Result;
use image::RgbaImage;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Page layout in millimetres, measured from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfLayout {
    /// Page width
    pub page_width_mm: f32,
    /// Page height
    pub page_height_mm: f32,
    /// Caption baseline position
    pub caption_at_mm: (f32, f32),
    /// Caption font size in points
    pub caption_size_pt: f32,
    /// Top-left corner of the image
    pub image_at_mm: (f32, f32),
    /// Image side
    pub image_size_mm: f32,
}

impl Default for PdfLayout {
    /// A4 portrait, caption at (20, 30), 100 mm image at (20, 50)
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            caption_at_mm: (20.0, 30.0),
            caption_size_pt: 16.0,
            image_at_mm: (20.0, 50.0),
            image_size_mm: 100.0,
        }
    }
}

/// Build a one-page PDF holding `caption` above `image`
///
/// The caption uses the built-in Helvetica font; the image is embedded as an
/// uncompressed 8-bit RGB XObject composited over white.
pub fn export_pdf(image: &RgbaImage, caption: &str, layout: &PdfLayout) -> Result<Vec<u8>> {
    let page_width = layout.page_width_mm * POINTS_PER_MM;
    let page_height = layout.page_height_mm * POINTS_PER_MM;

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width() as i64,
            "Height" => image.height() as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        flatten_rgb(image),
    ));

    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
        "XObject" => dictionary! {
            "Im1" => image_id,
        },
    });

    let caption_x = layout.caption_at_mm.0 * POINTS_PER_MM;
    let caption_y = page_height - layout.caption_at_mm.1 * POINTS_PER_MM;
    let image_side = layout.image_size_mm * POINTS_PER_MM;
    let image_x = layout.image_at_mm.0 * POINTS_PER_MM;
    let image_y = page_height - layout.image_at_mm.1 * POINTS_PER_MM - image_side;

    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), layout.caption_size_pt.into()]),
            Operation::new("Td", vec![caption_x.into(), caption_y.into()]),
            Operation::new("Tj", vec![Object::string_literal(caption)]),
            Operation::new("ET", vec![]),
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    image_side.into(),
                    0.0f32.into(),
                    0.0f32.into(),
                    image_side.into(),
                    image_x.into(),
                    image_y.into(),
                ],
            ),
            Operation::new("Do", vec!["Im1".into()]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.0f32.into(), 0.0f32.into(), page_width.into(), page_height.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;

    log::debug!(
        "assembled {} byte pdf with {}x{} image",
        bytes.len(),
        image.width(),
        image.height()
    );
    Ok(bytes)
}

/// RGBA pixels composited over white, alpha dropped
fn flatten_rgb(image: &RgbaImage) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(image.width() as usize * image.height() as usize * 3);
    for pixel in image.pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as u32;
        for channel in [r, g, b] {
            let blended = (channel as u32 * alpha + 255 * (255 - alpha) + 127) / 255;
            rgb.push(blended as u8);
        }
    }
    rgb
}

use crate::encoder::encode;
use crate::error::Result;
use crate::export::{Artifact, ExportFormat, PdfLayout, artifact_file_name, encode_png, export_pdf, timestamp_millis};
use crate::models::{ModuleGrid, QrRequest, RenderOptions, ShapeStyle};
use crate::payload::format_payload;
use crate::render::shapes::grid_for;
use crate::render::{apply_eye_styles, apply_shape_style, overlay_logo, rasterize, render_svg};
use image::{DynamicImage, RgbaImage};

/// Raster width used for the image embedded in PDF exports
pub const PDF_IMAGE_WIDTH: u32 = 400;

/// Request-to-artifact pipeline with fixed render options and optional logo
///
/// Steps: format payload, encode, rasterize, reshape modules, restyle eyes,
/// stamp logo, export.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: RenderOptions,
    logo: Option<DynamicImage>,
    pdf_layout: PdfLayout,
}

impl Generator {
    /// Create a generator for the given options
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            logo: None,
            pdf_layout: PdfLayout::default(),
        }
    }

    /// Stamp `logo` on the center of raster output
    pub fn with_logo(mut self, logo: DynamicImage) -> Self {
        self.logo = Some(logo);
        self
    }

    /// Use a custom PDF page layout
    pub fn with_pdf_layout(mut self, layout: PdfLayout) -> Self {
        self.pdf_layout = layout;
        self
    }

    /// Render options in effect
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Text that will be encoded for `request`
    pub fn payload(&self, request: &QrRequest) -> String {
        format_payload(request)
    }

    /// Fully styled raster: shapes, eyes and logo applied
    pub fn render(&self, request: &QrRequest) -> Result<RgbaImage> {
        let content = format_payload(request);
        let matrix = encode(&content, self.options.error_correction)?;
        let (mut image, geometry) = rasterize(&matrix, &self.options);

        let shape_style = self.options.shape_style();
        if let Some(patterns) = self.options.patterns {
            if shape_style != ShapeStyle::Classic {
                let exact = patterns.grid == ModuleGrid::Exact;
                if let Some(grid) = grid_for(&image, Some(&geometry), exact) {
                    image = apply_shape_style(
                        &image,
                        self.options.foreground,
                        self.options.background,
                        shape_style,
                        &grid,
                    );
                }
            }
            if patterns.styles_eyes() {
                apply_eye_styles(
                    &mut image,
                    &geometry,
                    self.options.foreground,
                    self.options.background,
                    patterns.eye_style,
                    patterns.eye_ball_style,
                );
            }
        }

        if let Some(logo) = &self.logo {
            overlay_logo(&mut image, logo);
        }

        Ok(image)
    }

    /// Plain raster of `request` at `width`, without patterns or logo
    pub fn render_plain(&self, request: &QrRequest, width: u32) -> Result<RgbaImage> {
        let options = self.options.with_width(width);
        let matrix = encode(&format_payload(request), options.error_correction)?;
        Ok(rasterize(&matrix, &options).0)
    }

    /// Vector rendering of `request`; patterns and logo are raster-only
    pub fn render_svg(&self, request: &QrRequest) -> Result<String> {
        let matrix = encode(&format_payload(request), self.options.error_correction)?;
        Ok(render_svg(&matrix, &self.options))
    }

    /// Export `request` named with the current time
    pub fn export(&self, request: &QrRequest, format: ExportFormat) -> Result<Artifact> {
        self.export_at(request, format, timestamp_millis())
    }

    /// Export `request` named with an explicit millisecond timestamp
    pub fn export_at(
        &self,
        request: &QrRequest,
        format: ExportFormat,
        timestamp_ms: u128,
    ) -> Result<Artifact> {
        log::debug!("exporting {} request as {}", request.type_name(), format);

        let bytes = match format {
            ExportFormat::Png => encode_png(&self.render(request)?)?,
            ExportFormat::Svg => self.render_svg(request)?.into_bytes(),
            ExportFormat::Pdf => {
                let image = self.render_plain(request, PDF_IMAGE_WIDTH)?;
                let caption = format!("QR Code - {}", request.type_name().to_uppercase());
                export_pdf(&image, &caption, &self.pdf_layout)?
            }
        };

        Ok(Artifact {
            file_name: artifact_file_name(request.type_name(), timestamp_ms, format),
            format,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Color, PatternOptions};

    #[test]
    fn test_render_default_size() {
        let image = Generator::default().render(&QrRequest::default()).unwrap();
        assert_eq!(image.dimensions(), (256, 256));
    }

    #[test]
    fn test_styled_render_uses_only_two_colors() {
        let options = RenderOptions {
            foreground: Color::rgb(0x3b, 0x82, 0xf6),
            background: Color::rgb(0xef, 0xf6, 0xff),
            patterns: Some(PatternOptions {
                shape_style: ShapeStyle::Leaf,
                grid: ModuleGrid::Exact,
                ..PatternOptions::default()
            }),
            ..RenderOptions::default()
        };
        let image = Generator::new(options)
            .render(&QrRequest::Text {
                content: Some("styled".into()),
            })
            .unwrap();
        let fg = options.foreground.to_rgba();
        let bg = options.background.to_rgba();
        assert!(image.pixels().all(|p| *p == fg || *p == bg));
    }

    #[test]
    fn test_export_names() {
        let generator = Generator::default();
        let request = QrRequest::Phone { content: None };
        let artifact = generator.export_at(&request, ExportFormat::Svg, 42).unwrap();
        assert_eq!(artifact.file_name, "qr-code-phone-42.svg");
        assert!(String::from_utf8(artifact.bytes).unwrap().contains("<svg"));
    }
}

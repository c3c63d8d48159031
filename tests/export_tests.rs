//! Artifact export and batch archives

use qrcraft::batch::{BATCH_ARCHIVE_NAME, BatchSettings, generate_batch};
use qrcraft::export::{ExportFormat, artifact_file_name};
use qrcraft::{Error, Generator, PatternOptions, QrRequest, RenderOptions, ShapeStyle};
use std::io::{Cursor, Read};
use zip::ZipArchive;

#[test]
fn test_batch_of_five_lines() {
    let input = "https://one.example\ntwo\n\n  three  \nfour\nfive\n";
    let report = generate_batch(input, &BatchSettings::default()).unwrap();
    assert_eq!(
        report.entries,
        vec![
            "qr-code-1.png",
            "qr-code-2.png",
            "qr-code-3.png",
            "qr-code-4.png",
            "qr-code-5.png"
        ]
    );

    let mut archive = ZipArchive::new(Cursor::new(report.archive)).unwrap();
    assert_eq!(archive.len(), 5);
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).unwrap();
        assert_eq!(entry.name(), format!("qr-code-{}.png", i + 1));

        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).unwrap();
        let image = image::load_from_memory(&bytes).unwrap();
        assert_eq!(image.width(), 512);
        assert_eq!(image.height(), 512);
    }
    assert_eq!(BATCH_ARCHIVE_NAME, "qr-codes-batch.zip");
}

#[test]
fn test_batch_oversized_line_fails_whole_batch() {
    let input = format!("fine\n{}", "9".repeat(8000));
    match generate_batch(&input, &BatchSettings::default()) {
        Err(Error::Encode { .. }) => {}
        other => panic!("expected encode error, got {other:?}"),
    }
}

#[test]
fn test_png_artifact() {
    let generator = Generator::new(RenderOptions {
        patterns: Some(PatternOptions {
            shape_style: ShapeStyle::RoundedSquare,
            ..PatternOptions::default()
        }),
        ..RenderOptions::default()
    });
    let request = QrRequest::Url {
        content: Some("https://example.com/export".into()),
    };
    let artifact = generator.export_at(&request, ExportFormat::Png, 1700000000000).unwrap();
    assert_eq!(artifact.file_name, "qr-code-url-1700000000000.png");
    assert_eq!(artifact.format, ExportFormat::Png);

    let image = image::load_from_memory(&artifact.bytes).unwrap();
    assert_eq!((image.width(), image.height()), (256, 256));
}

#[test]
fn test_pdf_artifact() {
    let request = QrRequest::Event(Default::default());
    let artifact = Generator::default()
        .export_at(&request, ExportFormat::Pdf, 7)
        .unwrap();
    assert_eq!(artifact.file_name, "qr-code-event-7.pdf");
    assert!(artifact.bytes.starts_with(b"%PDF-"));
    let text = String::from_utf8_lossy(&artifact.bytes);
    assert!(text.contains("(QR Code - EVENT)"));

    let embedded = Generator::default().render_plain(&request, 400).unwrap();
    assert_eq!(embedded.dimensions(), (400, 400));
}

#[test]
fn test_svg_artifact_uses_colors() {
    let options: RenderOptions =
        serde_json::from_str(r##"{"color":"#112233","backgroundColor":"#ffeedd"}"##).unwrap();
    let artifact = Generator::new(options)
        .export_at(&QrRequest::default(), ExportFormat::Svg, 1)
        .unwrap();
    let svg = String::from_utf8(artifact.bytes).unwrap();
    assert!(svg.contains("#112233"));
    assert!(svg.contains("#ffeedd"));
    assert_eq!(ExportFormat::Svg.mime_type(), "image/svg+xml");
}

#[test]
fn test_artifact_names() {
    assert_eq!(
        artifact_file_name("wifi", 123, ExportFormat::Pdf),
        "qr-code-wifi-123.pdf"
    );
}

#[test]
fn test_unknown_type_name_cannot_escape_output_dir() {
    let request: QrRequest =
        serde_json::from_str(r#"{"type":"../../tmp/evil","content":"hi"}"#).unwrap();
    let artifact = Generator::default()
        .export_at(&request, ExportFormat::Svg, 5)
        .unwrap();
    assert_eq!(artifact.file_name, "qr-code-______tmp_evil-5.svg");
    assert!(!artifact.file_name.contains('/'));
}

#[test]
fn test_batch_ignores_byte_order_mark() {
    let with_bom = generate_batch("\u{feff}first\nsecond", &BatchSettings::default()).unwrap();
    let without = generate_batch("first\nsecond", &BatchSettings::default()).unwrap();
    assert_eq!(with_bom.entries, without.entries);
    assert_eq!(with_bom.archive, without.archive);
}

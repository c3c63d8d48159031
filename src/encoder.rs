//! Symbol encoding
//!
//! Matrix construction and Reed-Solomon coding come from `qrcodegen`; this
//! module only adapts its output to a [`BitMatrix`].

use crate::error::{Error, Result};
use crate::models::{BitMatrix, ECLevel};
use qrcodegen::{QrCode, QrSegment, Version};

/// Encode `content` into a module matrix (true = dark)
///
/// Picks the smallest version 1-40 that fits at exactly `level`; the level is
/// never raised behind the caller's back.
pub fn encode(content: &str, level: ECLevel) -> Result<BitMatrix> {
    let segments = QrSegment::make_segments(content);
    let qr = QrCode::encode_segments_advanced(
        &segments,
        level.to_qrcodegen(),
        Version::MIN,
        Version::MAX,
        None,
        false,
    )
    .map_err(|_| Error::Encode {
        length: content.len(),
    })?;

    let size = qr.size() as usize;
    let matrix = BitMatrix::from_fn(size, |x, y| qr.get_module(x as i32, y as i32));
    log::debug!(
        "encoded {} bytes at level {:?} into version {:?} ({}x{} modules, {} dark)",
        content.len(),
        level,
        version_for_size(size),
        size,
        size,
        matrix.count_dark()
    );

    Ok(matrix)
}

/// Symbol version for a matrix side length
pub fn version_for_size(size: usize) -> Option<u8> {
    if size < 21 || (size - 17) % 4 != 0 {
        return None;
    }
    let version = (size - 17) / 4;
    (1..=40).contains(&version).then_some(version as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_version_1() {
        // Version 1-L holds 17 bytes
        let matrix = encode("https://a.b/c", ECLevel::L).unwrap();
        assert_eq!(matrix.size(), 21);
        assert_eq!(version_for_size(matrix.size()), Some(1));
    }

    #[test]
    fn test_nineteen_bytes_need_version_2() {
        let matrix = encode("https://example.com", ECLevel::L).unwrap();
        assert_eq!(matrix.size(), 25);
        assert_eq!(version_for_size(matrix.size()), Some(2));
    }

    #[test]
    fn test_finder_pattern_corners_are_dark() {
        let matrix = encode("Sample text", ECLevel::M).unwrap();
        let last = matrix.size() - 1;
        assert!(matrix.get(0, 0));
        assert!(matrix.get(last, 0));
        assert!(matrix.get(0, last));
        // Separator ring around the top-left finder is light
        assert!(!matrix.get(7, 7));
    }

    #[test]
    fn test_higher_level_needs_more_modules() {
        let text = "BEGIN:VCARD\nVERSION:3.0\nFN:Jane Doe\nTEL:+15551234567\nEND:VCARD";
        let low = encode(text, ECLevel::L).unwrap();
        let high = encode(text, ECLevel::H).unwrap();
        assert!(high.size() >= low.size());
    }

    #[test]
    fn test_oversized_payload_fails() {
        let huge = "x".repeat(4000);
        assert!(matches!(
            encode(&huge, ECLevel::H),
            Err(Error::Encode { length: 4000 })
        ));
    }

    #[test]
    fn test_version_for_size() {
        assert_eq!(version_for_size(25), Some(2));
        assert_eq!(version_for_size(177), Some(40));
        assert_eq!(version_for_size(22), None);
        assert_eq!(version_for_size(181), None);
    }
}

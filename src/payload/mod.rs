//! Payload formatting
//!
//! Maps a [`QrRequest`] to the exact text stored in the symbol. Readers
//! recognise these micro-formats (`WIFI:`, vCard 3.0, `geo:`, VEVENT), so the
//! output is reproduced byte for byte. Missing fields fall back to sample
//! literals; formatting never fails.

mod uri;

pub use uri::encode_uri_component;

use crate::models::{CalendarEvent, ContactCard, QrRequest, WifiNetwork};

/// Sample address for URL requests and unknown types
pub const SAMPLE_URL: &str = "https://example.com";
/// Sample text
pub const SAMPLE_TEXT: &str = "Sample text";
/// Sample network shown when no SSID is given
pub const SAMPLE_WIFI: &str = "WIFI:T:WPA;S:SampleNetwork;P:password123;;";
/// Sample card shown when no name is given
pub const SAMPLE_VCARD: &str = "BEGIN:VCARD\nVERSION:3.0\nFN:Sample Contact\nEND:VCARD";
/// Sample mail address
pub const SAMPLE_EMAIL: &str = "example@example.com";
/// Sample phone number
pub const SAMPLE_PHONE: &str = "+1234567890";
/// Sample coordinates (New York City)
pub const SAMPLE_LOCATION: &str = "40.7128,-74.0060";
/// Sample event shown when no title is given
pub const SAMPLE_EVENT: &str = "BEGIN:VEVENT\nSUMMARY:Sample Event\nEND:VEVENT";

const DEFAULT_WIFI_SECURITY: &str = "WPA";

/// Format a request into the string to encode
///
/// # Example
/// ```
/// use qrcraft::models::QrRequest;
/// use qrcraft::payload::format_payload;
///
/// let request = QrRequest::Email { content: Some("a@b.com".into()) };
/// assert_eq!(format_payload(&request), "mailto:a@b.com");
/// ```
pub fn format_payload(request: &QrRequest) -> String {
    log::trace!("formatting {} payload", request.type_name());

    match request {
        QrRequest::Url { content } | QrRequest::Other { content, .. } => {
            or_sample(content, SAMPLE_URL).to_string()
        }
        QrRequest::Text { content } => or_sample(content, SAMPLE_TEXT).to_string(),
        QrRequest::Wifi(wifi) => format_wifi(wifi),
        QrRequest::Contact(contact) => format_vcard(contact),
        QrRequest::Email { content } => format!("mailto:{}", or_sample(content, SAMPLE_EMAIL)),
        QrRequest::Phone { content } => format!("tel:{}", or_sample(content, SAMPLE_PHONE)),
        QrRequest::Location { content } => format_location(or_sample(content, SAMPLE_LOCATION)),
        QrRequest::Event(event) => format_vevent(event),
    }
}

/// Present and non-empty, otherwise `sample`
fn or_sample<'a>(value: &'a Option<String>, sample: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => sample,
    }
}

fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn format_wifi(wifi: &WifiNetwork) -> String {
    let ssid = or_empty(&wifi.ssid);
    if ssid.is_empty() {
        return SAMPLE_WIFI.to_string();
    }
    format!(
        "WIFI:T:{};S:{};P:{};;",
        or_sample(&wifi.security, DEFAULT_WIFI_SECURITY),
        ssid,
        or_empty(&wifi.password)
    )
}

fn format_vcard(contact: &ContactCard) -> String {
    let name = or_empty(&contact.name);
    if name.is_empty() {
        return SAMPLE_VCARD.to_string();
    }
    format!(
        "BEGIN:VCARD\nVERSION:3.0\nFN:{}\nTEL:{}\nEMAIL:{}\nORG:{}\nEND:VCARD",
        name,
        or_empty(&contact.phone),
        or_empty(&contact.email),
        or_empty(&contact.organization)
    )
}

fn format_location(place: &str) -> String {
    // Bare "lat,lon" goes straight into the geo URI; anything else is a query.
    if place.contains(',') && !place.contains(' ') {
        format!("geo:{place}")
    } else {
        format!("geo:0,0?q={}", encode_uri_component(place))
    }
}

fn format_vevent(event: &CalendarEvent) -> String {
    let title = or_empty(&event.title);
    if title.is_empty() {
        return SAMPLE_EVENT.to_string();
    }
    format!(
        "BEGIN:VEVENT\nSUMMARY:{}\nDTSTART:{}\nDTEND:{}\nLOCATION:{}\nDESCRIPTION:{}\nEND:VEVENT",
        title,
        compact_datetime(or_empty(&event.start)),
        compact_datetime(or_empty(&event.end)),
        or_empty(&event.location),
        or_empty(&event.description)
    )
}

/// `2024-05-01T09:30` -> `202405010930`
///
/// Drops every `-` and `:`, then only the first `T`.
fn compact_datetime(value: &str) -> String {
    let stripped: String = value.chars().filter(|c| !matches!(c, '-' | ':')).collect();
    stripped.replacen('T', "", 1)
}

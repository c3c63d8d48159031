//! Request records describing what a QR code should carry.
//!
//! The JSON shape mirrors the form data of the generator UI:
//! `{"type": "wifi", "content": "", "wifi": {"ssid": "Home", ...}}`.
//! Every field is optional; gaps are filled with sample values by
//! [`crate::payload::format_payload`].

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eight payload kinds the generator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QrKind {
    /// Website address
    Url,
    /// Free text
    Text,
    /// WiFi network credentials
    Wifi,
    /// vCard contact
    Contact,
    /// `mailto:` address
    Email,
    /// `tel:` number
    Phone,
    /// `geo:` coordinates or free-form address
    Location,
    /// iCalendar VEVENT
    Event,
}

impl QrKind {
    /// All kinds in UI order
    pub const ALL: [QrKind; 8] = [
        QrKind::Url,
        QrKind::Text,
        QrKind::Wifi,
        QrKind::Contact,
        QrKind::Email,
        QrKind::Phone,
        QrKind::Location,
        QrKind::Event,
    ];

    /// Lower-case discriminator used in JSON and artifact names
    pub fn as_str(&self) -> &'static str {
        match self {
            QrKind::Url => "url",
            QrKind::Text => "text",
            QrKind::Wifi => "wifi",
            QrKind::Contact => "contact",
            QrKind::Email => "email",
            QrKind::Phone => "phone",
            QrKind::Location => "location",
            QrKind::Event => "event",
        }
    }
}

impl FromStr for QrKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QrKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| Error::Options(format!("unknown QR type '{s}'")))
    }
}

impl fmt::Display for QrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WiFi network fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiNetwork {
    /// Network name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssid: Option<String>,
    /// Passphrase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Authentication type (`WPA`, `WEP`, `nopass`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
}

/// Contact card fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    /// Full name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Telephone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Organization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

/// Calendar event fields; `start`/`end` are `datetime-local` strings such as
/// `2024-05-01T09:30`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Event summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Start date-time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// End date-time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// Venue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Long description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A QR generation request, discriminated by `type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRequest", into = "RawRequest")]
pub enum QrRequest {
    /// Website URL
    Url {
        /// The address
        content: Option<String>,
    },
    /// Plain text
    Text {
        /// The text
        content: Option<String>,
    },
    /// WiFi credentials
    Wifi(WifiNetwork),
    /// Contact card
    Contact(ContactCard),
    /// Email address
    Email {
        /// The address
        content: Option<String>,
    },
    /// Phone number
    Phone {
        /// The number
        content: Option<String>,
    },
    /// Coordinates (`lat,lon`) or a free-form place
    Location {
        /// Coordinates or address
        content: Option<String>,
    },
    /// Calendar event
    Event(CalendarEvent),
    /// Any other discriminator; formatted like a URL
    Other {
        /// The discriminator as given
        kind: String,
        /// Free-form content
        content: Option<String>,
    },
}

impl QrRequest {
    /// Build a request of `kind` from free-form content
    ///
    /// Structured kinds get an empty record, so they format as their sample.
    pub fn from_content(kind: QrKind, content: Option<String>) -> Self {
        match kind {
            QrKind::Url => QrRequest::Url { content },
            QrKind::Text => QrRequest::Text { content },
            QrKind::Email => QrRequest::Email { content },
            QrKind::Phone => QrRequest::Phone { content },
            QrKind::Location => QrRequest::Location { content },
            QrKind::Wifi => QrRequest::Wifi(WifiNetwork::default()),
            QrKind::Contact => QrRequest::Contact(ContactCard::default()),
            QrKind::Event => QrRequest::Event(CalendarEvent::default()),
        }
    }

    /// Known kind, or `None` for [`QrRequest::Other`]
    pub fn kind(&self) -> Option<QrKind> {
        match self {
            QrRequest::Url { .. } => Some(QrKind::Url),
            QrRequest::Text { .. } => Some(QrKind::Text),
            QrRequest::Wifi(_) => Some(QrKind::Wifi),
            QrRequest::Contact(_) => Some(QrKind::Contact),
            QrRequest::Email { .. } => Some(QrKind::Email),
            QrRequest::Phone { .. } => Some(QrKind::Phone),
            QrRequest::Location { .. } => Some(QrKind::Location),
            QrRequest::Event(_) => Some(QrKind::Event),
            QrRequest::Other { .. } => None,
        }
    }

    /// The `type` discriminator as it appears in JSON and file names
    pub fn type_name(&self) -> &str {
        match self {
            QrRequest::Other { kind, .. } => kind,
            _ => self.kind().map(|k| k.as_str()).unwrap_or("url"),
        }
    }
}

impl Default for QrRequest {
    fn default() -> Self {
        QrRequest::Url { content: None }
    }
}

/// Flat wire form shared by every variant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawRequest {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wifi: Option<WifiNetwork>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contact: Option<ContactCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    event: Option<CalendarEvent>,
}

impl From<RawRequest> for QrRequest {
    fn from(raw: RawRequest) -> Self {
        let content = raw.content;
        match raw.kind.parse::<QrKind>() {
            Ok(QrKind::Wifi) => QrRequest::Wifi(raw.wifi.unwrap_or_default()),
            Ok(QrKind::Contact) => QrRequest::Contact(raw.contact.unwrap_or_default()),
            Ok(QrKind::Event) => QrRequest::Event(raw.event.unwrap_or_default()),
            Ok(kind) => QrRequest::from_content(kind, content),
            Err(_) => QrRequest::Other {
                kind: raw.kind,
                content,
            },
        }
    }
}

impl From<QrRequest> for RawRequest {
    fn from(request: QrRequest) -> Self {
        let kind = request.type_name().to_string();
        match request {
            QrRequest::Url { content }
            | QrRequest::Text { content }
            | QrRequest::Email { content }
            | QrRequest::Phone { content }
            | QrRequest::Location { content }
            | QrRequest::Other { content, .. } => RawRequest {
                kind,
                content,
                ..Default::default()
            },
            QrRequest::Wifi(wifi) => RawRequest {
                kind,
                wifi: Some(wifi),
                ..Default::default()
            },
            QrRequest::Contact(contact) => RawRequest {
                kind,
                contact: Some(contact),
                ..Default::default()
            },
            QrRequest::Event(event) => RawRequest {
                kind,
                event: Some(event),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_form_data() {
        let json = r#"{"type":"wifi","content":"","wifi":{"ssid":"Home","password":"secret","security":"WEP"}}"#;
        let request: QrRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request,
            QrRequest::Wifi(WifiNetwork {
                ssid: Some("Home".into()),
                password: Some("secret".into()),
                security: Some("WEP".into()),
            })
        );
        assert_eq!(request.type_name(), "wifi");
    }

    #[test]
    fn test_unknown_type_keeps_content() {
        let request: QrRequest =
            serde_json::from_str(r#"{"type":"sms","content":"hello"}"#).unwrap();
        assert_eq!(
            request,
            QrRequest::Other {
                kind: "sms".into(),
                content: Some("hello".into())
            }
        );
        assert_eq!(request.kind(), None);
        assert_eq!(request.type_name(), "sms");
    }

    #[test]
    fn test_missing_record_is_empty_record() {
        let request: QrRequest = serde_json::from_str(r#"{"type":"event"}"#).unwrap();
        assert_eq!(request, QrRequest::Event(CalendarEvent::default()));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("location".parse::<QrKind>().unwrap(), QrKind::Location);
        assert!("barcode".parse::<QrKind>().is_err());
    }
}

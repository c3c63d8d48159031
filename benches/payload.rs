use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qrcraft::models::{CalendarEvent, ContactCard, WifiNetwork};
use qrcraft::payload::encode_uri_component;
use qrcraft::{QrRequest, encode, format_payload};

fn sample_requests() -> Vec<QrRequest> {
    vec![
        QrRequest::Url {
            content: Some("https://example.com/products?id=42".into()),
        },
        QrRequest::Wifi(WifiNetwork {
            ssid: Some("Office".into()),
            password: Some("correct horse battery staple".into()),
            security: Some("WPA".into()),
        }),
        QrRequest::Contact(ContactCard {
            name: Some("Jane Doe".into()),
            phone: Some("+15551234567".into()),
            email: Some("jane@example.com".into()),
            organization: Some("Acme".into()),
        }),
        QrRequest::Location {
            content: Some("1600 Amphitheatre Parkway, Mountain View".into()),
        },
        QrRequest::Event(CalendarEvent {
            title: Some("Quarterly review".into()),
            start: Some("2024-05-01T09:30".into()),
            end: Some("2024-05-01T11:00".into()),
            location: Some("Room 4".into()),
            description: None,
        }),
    ]
}

fn bench_format_payload(c: &mut Criterion) {
    let requests = sample_requests();
    c.bench_function("format_payload_mixed", |b| {
        b.iter(|| {
            for request in &requests {
                black_box(format_payload(black_box(request)));
            }
        })
    });
}

fn bench_encode_uri_component(c: &mut Criterion) {
    let address = "Calle de Alcalá 42, 28014 Madrid, España";
    c.bench_function("encode_uri_component_address", |b| {
        b.iter(|| encode_uri_component(black_box(address)))
    });
}

fn bench_encode(c: &mut Criterion) {
    let vcard = format_payload(&sample_requests()[2]);
    c.bench_function("encode_vcard_level_m", |b| {
        b.iter(|| encode(black_box(&vcard), Default::default()))
    });
}

criterion_group!(
    benches,
    bench_format_payload,
    bench_encode_uri_component,
    bench_encode
);
criterion_main!(benches);

//! Builder and authorization behavior over the public surface.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use pretty_assertions::assert_eq;
use webcall_core::{Authorization, Error, HeaderBuilder, UrlBuilder};

#[test]
fn basic_authorization_decodes_back_to_the_credential_pair() {
    let auth = Authorization::new("alice", "s3cr3t");
    let value = auth.basic();

    let encoded = value.strip_prefix("Basic ").unwrap();
    let decoded = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();

    assert_eq!(decoded, "alice:s3cr3t");
}

#[test]
fn header_produces_a_single_authorization_entry() {
    let auth = Authorization::new("alice", "s3cr3t");

    for scheme in ["basic", "bearer", "custom", "digest", "oauth", "oauth2"] {
        let headers = auth.header(scheme).unwrap();
        assert_eq!(headers.len(), 1, "scheme {scheme}");
        assert!(headers.contains_key("Authorization"), "scheme {scheme}");
    }
}

#[test]
fn header_rejects_anything_outside_the_closed_set() {
    let auth = Authorization::new("alice", "s3cr3t");

    for scheme in ["", "Basic", "negotiate", "bearer "] {
        assert!(
            matches!(auth.header(scheme), Err(Error::InvalidScheme { .. })),
            "scheme {scheme:?}"
        );
    }
}

#[test]
fn header_builder_accumulates_and_overwrites() {
    let headers = HeaderBuilder::new()
        .add("A", "1")
        .add("B", "2")
        .add("A", "3")
        .build();

    assert_eq!(headers.len(), 2);
    assert_eq!(headers["A"], "3");
    assert_eq!(headers["B"], "2");
}

#[test]
fn url_builder_is_a_pure_projection() {
    let builder = UrlBuilder::new("https://x/base");

    assert_eq!(builder.with_endpoint("y"), "https://x/base/y");
    assert_eq!(builder.with_endpoint("z"), "https://x/base/z");
    assert_eq!(builder.with_endpoint("y"), "https://x/base/y");
}

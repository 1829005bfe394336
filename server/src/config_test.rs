use super::*;

fn site() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

#[test]
fn resolve_addr_without_override_keeps_site_addr() {
    assert_eq!(resolve_addr(site(), None).unwrap(), site());
}

#[test]
fn resolve_addr_overrides_port_only() {
    let addr = resolve_addr(site(), Some("8080")).unwrap();
    assert_eq!(addr, "127.0.0.1:8080".parse().unwrap());
}

#[test]
fn resolve_addr_trims_whitespace() {
    let addr = resolve_addr(site(), Some(" 9000\n")).unwrap();
    assert_eq!(addr.port(), 9000);
}

#[test]
fn resolve_addr_rejects_non_numeric_port() {
    let err = resolve_addr(site(), Some("http")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "http"));
}

#[test]
fn resolve_addr_rejects_zero_and_out_of_range() {
    assert!(resolve_addr(site(), Some("0")).is_err());
    assert!(resolve_addr(site(), Some("70000")).is_err());
}

#[test]
fn invalid_port_carries_parse_reason() {
    let err = resolve_addr(site(), Some("abc")).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT \"abc\": invalid digit found in string");

    let err = resolve_addr(site(), Some("70000")).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT \"70000\": number too large to fit in target type");
}

#[test]
fn zero_port_reason_names_reservation() {
    let err = resolve_addr(site(), Some("0")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref reason, .. } if reason == "port 0 is reserved"));
}

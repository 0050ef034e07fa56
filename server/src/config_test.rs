use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, HostConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.backend_url, "http://127.0.0.1:5000");
    assert_eq!(cfg.upstream_timeout, Duration::from_secs(30));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("VOCAB_BACKEND_URL", "https://vocab.example.test/"),
        ("VOCAB_UPSTREAM_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://vocab.example.test");
    assert_eq!(cfg.upstream_timeout, Duration::from_secs(5));
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
}

#[test]
fn from_lookup_rejects_backend_without_scheme() {
    let err = HostConfig::from_lookup(lookup_from(&[("VOCAB_BACKEND_URL", "localhost:5000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBackendUrl("localhost:5000".to_owned()));
}

#[test]
fn from_lookup_ignores_unparseable_timeout() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("VOCAB_UPSTREAM_TIMEOUT_SECS", "soon")])).unwrap();
    assert_eq!(cfg.upstream_timeout, Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS));
}

#[test]
fn from_lookup_trims_surrounding_whitespace() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", " 4000 "), ("VOCAB_BACKEND_URL", " http://backend:5000// ")]))
        .unwrap();
    assert_eq!(cfg.port, 4000);
    assert_eq!(cfg.backend_url, "http://backend:5000");
}

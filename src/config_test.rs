use super::*;

fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn defaults_when_unset() {
    let config = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.site_root.is_none());
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_port_and_site_root() {
    let config = HostConfig::from_lookup(lookup_from(&[("PORT", " 8080 "), ("LYRN_SITE_ROOT", "/srv/site")])).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.site_root, Some(PathBuf::from("/srv/site")));
}

#[test]
fn blank_values_fall_back() {
    let config = HostConfig::from_lookup(lookup_from(&[("PORT", ""), ("LYRN_SITE_ROOT", "  ")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.site_root.is_none());
}

#[test]
fn invalid_port_is_an_error() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, HostError::InvalidPort(ref raw) if raw == "eighty"));
    assert_eq!(err.to_string(), "invalid PORT \"eighty\"");
}

#[test]
fn out_of_range_port_is_an_error() {
    assert!(HostConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}

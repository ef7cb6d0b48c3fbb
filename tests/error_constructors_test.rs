use boiler_panel::error::PanelError;

#[test]
fn error_constructors_group_1() {
    assert!(matches!(PanelError::config("x"), PanelError::Config { .. }));
    assert!(matches!(
        PanelError::network("x"),
        PanelError::Network { .. }
    ));
    assert!(matches!(PanelError::api("x"), PanelError::Api { .. }));
}

#[test]
fn error_constructors_group_2() {
    assert!(matches!(
        PanelError::serialization("s"),
        PanelError::Serialization { .. }
    ));
    assert!(matches!(PanelError::io("x"), PanelError::Io { .. }));
    assert!(matches!(
        PanelError::validation("f", "m"),
        PanelError::Validation { .. }
    ));
    assert!(matches!(
        PanelError::generic("x"),
        PanelError::Generic { .. }
    ));
}

#[test]
fn display_messages() {
    let e = PanelError::validation("field", "bad");
    let s = format!("{}", e);
    assert!(s.contains("Validation error"));
    assert_eq!(
        format!("{}", PanelError::api("Boiler is offline")),
        "API error: Boiler is offline"
    );
}

#[test]
fn conversions_classify_errors() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    assert!(matches!(PanelError::from(io), PanelError::Io { .. }));

    let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = PanelError::from(json);
    assert!(matches!(err, PanelError::Serialization { .. }));
    assert!(err.is_transport());
}

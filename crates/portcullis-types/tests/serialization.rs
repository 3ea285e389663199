//! Document shape tests for resources stored as JSON.

use portcullis_types::{
    ConnectionDiagnostic, ConnectionDiagnosticSpec, ConnectionDiagnostics, Identifiable, Labeled,
    Labels, Version,
};

#[test]
fn list_of_diagnostics_round_trips() {
    let mut labels = Labels::new();
    labels.insert("env".to_string(), "prod".to_string());

    let mut first = ConnectionDiagnostic::new(
        "diag-1",
        Some(labels),
        ConnectionDiagnosticSpec::new(true, "connected"),
    )
    .expect("create diagnostic");
    first.set_origin("dynamic");
    let second = ConnectionDiagnostic::new(
        "diag-2",
        None,
        ConnectionDiagnosticSpec::new(false, "connection refused"),
    )
    .expect("create diagnostic");

    let list: ConnectionDiagnostics = vec![first, second];
    let json = serde_json::to_string_pretty(&list).expect("serialize");
    let back: ConnectionDiagnostics = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back, list);
    assert_eq!(back[0].origin(), "dynamic");
    assert!(back.iter().all(|d| d.check_and_set_defaults().is_ok()));
}

#[test]
fn minimal_document_fills_defaults() {
    let json = r#"{
        "version": "v1",
        "kind": "connection_diagnostic",
        "metadata": {"name": "diag-min"},
        "spec": {"message": "ok"}
    }"#;

    let diag: ConnectionDiagnostic = serde_json::from_str(json).expect("deserialize");
    assert_eq!(diag.version(), Version::V1);
    assert_eq!(diag.name(), "diag-min");
    assert!(diag.static_labels().is_empty());
    assert!(!diag.is_success());
    assert!(diag.check_and_set_defaults().is_ok());
}

#[test]
fn unknown_version_is_rejected() {
    let json = r#"{
        "version": "v7",
        "kind": "connection_diagnostic",
        "metadata": {"name": "diag"},
        "spec": {"message": "ok"}
    }"#;

    assert!(serde_json::from_str::<ConnectionDiagnostic>(json).is_err());
}

#[test]
fn missing_message_field_is_rejected() {
    let json = r#"{
        "version": "v1",
        "kind": "connection_diagnostic",
        "metadata": {"name": "diag"},
        "spec": {"success": true}
    }"#;

    assert!(serde_json::from_str::<ConnectionDiagnostic>(json).is_err());
}

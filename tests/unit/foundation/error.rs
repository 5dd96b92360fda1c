use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MaquetteError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        MaquetteError::capture("x")
            .to_string()
            .contains("capture error:")
    );
    assert!(
        MaquetteError::store("x")
            .to_string()
            .contains("store error:")
    );
    assert!(
        MaquetteError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn user_input_errors_are_actionable() {
    assert!(MaquetteError::EmptyScene.to_string().contains("empty"));
    assert!(MaquetteError::EmptyBase.to_string().contains("base image"));
}

#[test]
fn relay_errors_stay_distinguishable_through_conversion() {
    let err: MaquetteError = RelayError::ModelNotFound("nano".to_string()).into();
    assert!(matches!(
        err,
        MaquetteError::Relay(RelayError::ModelNotFound(_))
    ));
    assert!(err.to_string().contains("'nano'"));

    let err: MaquetteError = RelayError::Timeout.into();
    assert!(err.to_string().contains("timeout"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MaquetteError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

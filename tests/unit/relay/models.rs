use super::*;

#[test]
fn catalog_offers_the_default_model() {
    let catalog = default_catalog();
    assert!(!catalog.is_empty());
    assert!(catalog.iter().any(|m| m.id == DEFAULT_MODEL_ID));
}

#[test]
fn flash_models_are_capped_at_2k() {
    assert_eq!(
        effective_resolution("gemini-2.5-flash-image", ResolutionTier::FourK),
        ResolutionTier::TwoK
    );
    // Lower tiers pass through untouched.
    assert_eq!(
        effective_resolution("gemini-2.5-flash-image", ResolutionTier::OneK),
        ResolutionTier::OneK
    );
}

#[test]
fn non_flash_models_keep_the_requested_tier() {
    assert_eq!(
        effective_resolution(DEFAULT_MODEL_ID, ResolutionTier::FourK),
        ResolutionTier::FourK
    );
}

use crate::seed::derive_seed;

#[test]
fn test_fnv1a_reference_vectors() {
    assert_eq!(derive_seed(""), 0xcbf2_9ce4_8422_2325);
    assert_eq!(derive_seed("a"), 0xaf63_dc4c_8601_ec8c);
}

#[test]
fn test_domain_suffix_changes_seed() {
    let cosmic = derive_seed("genesis_cosmic");
    let stellar = derive_seed("genesis_stellar");
    let timeline = derive_seed("genesis_cosmic-timeline");

    assert_ne!(cosmic, stellar);
    assert_ne!(cosmic, timeline);
    assert_ne!(stellar, timeline);
}

#[test]
fn test_unicode_keys_are_stable() {
    assert_eq!(derive_seed("🌍_stellar"), derive_seed("🌍_stellar"));
    assert_ne!(derive_seed("🌍_stellar"), derive_seed("🌎_stellar"));
}

//! Property tests for cache key derivation.

use proptest::prelude::*;

use ontofactory::CacheKey;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Keys are 64 lowercase hex characters for any locator.
    #[test]
    fn property_key_shape(locator in ".{0,200}") {
        let key = CacheKey::from_locator(&locator);
        prop_assert_eq!(key.as_str().len(), CacheKey::LEN);
        prop_assert!(key
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    /// PROPERTY: Same locator, same key; the key parses back to itself.
    #[test]
    fn property_key_deterministic(locator in ".{0,200}") {
        let a = CacheKey::from_locator(&locator);
        let b = CacheKey::from_locator(&locator);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(CacheKey::parse(a.as_str()), Some(a));
    }

    /// PROPERTY: Distinct locators get distinct keys.
    #[test]
    fn property_distinct_locators(a in "[a-z:/.]{1,40}", b in "[a-z:/.]{1,40}") {
        prop_assume!(a != b);
        prop_assert_ne!(CacheKey::from_locator(&a), CacheKey::from_locator(&b));
    }
}

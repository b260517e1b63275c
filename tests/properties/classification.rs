//! Property tests for handle classification.

use std::path::Path;

use proptest::prelude::*;

use ontofactory::domain::services::{classify, ClassifierSettings};
use ontofactory::{Handle, HandleKind, Strategy};

fn no_file(_: &Path) -> bool {
    false
}

fn every_file(_: &Path) -> bool {
    true
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Classification never panics on any non-blank handle.
    #[test]
    fn property_classify_total(raw in ".{1,80}") {
        prop_assume!(!raw.trim().is_empty());
        let handle = Handle::new(&raw).unwrap();
        let _ = classify(&handle, &ClassifierSettings::default(), &no_file);
        let _ = classify(&handle, &ClassifierSettings::default(), &every_file);
    }

    /// PROPERTY: Plain identifiers go to the remote query client unchanged.
    #[test]
    fn property_plain_identifiers_are_remote(raw in "[A-Za-z0-9_]{1,40}") {
        let handle = Handle::new(&raw).unwrap();
        let kind = classify(&handle, &ClassifierSettings::default(), &every_file);
        prop_assert_eq!(kind, HandleKind::RemoteQuery { id: raw });
    }

    /// PROPERTY: Library handles without a dot always gain the default extension.
    #[test]
    fn property_library_extension(name in "[a-z][a-z0-9_]{0,20}") {
        let raw = format!("obo:{}", name);
        let handle = Handle::new(&raw).unwrap();
        let kind = classify(&handle, &ClassifierSettings::default(), &no_file);
        prop_assert_eq!(
            kind,
            HandleKind::Library {
                artifact_name: format!("obo:{}.owl", name),
                remainder: format!("{}.owl", name),
            }
        );
    }

    /// PROPERTY: An existing dotted file always wins, whatever its prefix.
    #[test]
    fn property_existing_file_wins(
        stem in "(obo:|http:)?[a-z]{1,12}",
        ext in "(json|obo|owl|ttl)",
    ) {
        let raw = format!("{}.{}", stem, ext);
        let handle = Handle::new(&raw).unwrap();
        let kind = classify(&handle, &ClassifierSettings::default(), &every_file);
        prop_assert_eq!(kind.strategy(), Strategy::LocalFile);
    }
}

//! Property tests for tileset name validation.

use std::path::{Component, Path};

use proptest::prelude::*;

use tilebake::domain::value_objects::TilesetName;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An accepted name is always one plain path segment.
    #[test]
    fn property_accepted_name_is_single_segment(raw in "\\PC{0,40}") {
        if let Ok(name) = TilesetName::parse(&raw) {
            let components: Vec<_> = Path::new(name.as_str()).components().collect();
            prop_assert_eq!(components.len(), 1);
            prop_assert!(matches!(components[0], Component::Normal(_)));
            prop_assert!(!name.as_str().starts_with('.'));
            prop_assert_eq!(name.as_str(), raw.as_str());
        }
    }

    /// PROPERTY: Names from the portable character set are accepted unchanged.
    #[test]
    fn property_portable_names_accepted(raw in "[A-Za-z0-9_-][A-Za-z0-9._-]{0,40}") {
        let name = TilesetName::parse(&raw).unwrap();
        prop_assert_eq!(name.to_string(), raw);
    }

    /// PROPERTY: A separator anywhere in the name is rejected.
    #[test]
    fn property_separators_rejected(
        head in "[a-z]{0,8}",
        sep in prop::sample::select(vec!['/', '\\']),
        tail in "[a-z]{0,8}",
    ) {
        let raw = format!("{}{}{}", head, sep, tail);
        prop_assert!(TilesetName::parse(&raw).is_err());
    }
}

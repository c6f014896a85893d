//! Property tests for `--zoom` parsing.

use proptest::prelude::*;

use tilebake::domain::value_objects::{ZoomRange, MAX_ZOOM_LEVEL};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary input never panics.
    #[test]
    fn property_parse_never_panics(input in "\\PC{0,24}") {
        let _ = input.parse::<ZoomRange>();
    }

    /// PROPERTY: Any ordered pair parses to exactly that range and prints back the same way.
    #[test]
    fn property_ordered_pair_parses(a in 0u32..=30, b in 0u32..=30) {
        let (min, max) = (a.min(b), a.max(b));
        let input = format!("{}-{}", min, max);

        let range: ZoomRange = input.parse().unwrap();

        prop_assert_eq!(range.min(), min);
        prop_assert_eq!(range.max(), max);
        prop_assert_eq!(range.to_string(), input);
        prop_assert_eq!(range.levels().count() as u32, max - min + 1);
    }

    /// PROPERTY: A reversed pair is always rejected.
    #[test]
    fn property_reversed_pair_rejected(a in 0u32..=30, b in 0u32..=30) {
        prop_assume!(a != b);
        let (min, max) = (a.min(b), a.max(b));

        let reversed = format!("{}-{}", max, min);
        let err = reversed.parse::<ZoomRange>().unwrap_err();

        prop_assert!(err.to_string().contains("greater than"));
    }

    /// PROPERTY: Negative levels are never accepted.
    #[test]
    fn property_negative_rejected(a in 1u32..=30, b in 0u32..=30) {
        let leading = format!("-{}", a);
        let leading_pair = format!("-{}-{}", a, b);
        let trailing = format!("{}--{}", b, a);

        prop_assert!(leading.parse::<ZoomRange>().is_err());
        prop_assert!(leading_pair.parse::<ZoomRange>().is_err());
        prop_assert!(trailing.parse::<ZoomRange>().is_err());
    }

    /// PROPERTY: A level deeper than the tiler supports is always rejected.
    #[test]
    fn property_too_deep_rejected(
        min in 0u32..=MAX_ZOOM_LEVEL,
        deep in (MAX_ZOOM_LEVEL + 1)..=u32::MAX,
    ) {
        let input = format!("{}-{}", min, deep);

        prop_assert!(input.parse::<ZoomRange>().is_err());
    }

    /// PROPERTY: Whatever parses has min <= max.
    #[test]
    fn property_parsed_range_is_ordered(input in "[0-9 -]{0,8}") {
        if let Ok(range) = input.parse::<ZoomRange>() {
            prop_assert!(range.min() <= range.max());
            prop_assert!(range.contains(range.min()));
            prop_assert!(range.contains(range.max()));
        }
    }
}

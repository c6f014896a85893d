//! Property tests for the published path contract.

use proptest::prelude::*;

use tilebake::domain::services::ProjectLayout;
use tilebake::domain::value_objects::{ImageFormat, TilesetName};

fn format() -> impl Strategy<Value = ImageFormat> {
    prop::sample::select(vec![ImageFormat::Jpeg, ImageFormat::Png])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every output directory is a direct child of the tiles root.
    #[test]
    fn property_output_dir_is_child_of_tiles_root(raw in "[A-Za-z0-9_-][A-Za-z0-9._-]{0,40}") {
        let layout = ProjectLayout::new("/project");
        let name = TilesetName::parse(&raw).unwrap();

        let output = layout.output_dir(&name);
        let root = layout.tiles_root();

        prop_assert_eq!(output.parent(), Some(root.as_path()));
        prop_assert!(output.starts_with("/project/public/cesium/tiles"));
    }

    /// PROPERTY: The URL template mirrors the on-disk tile path.
    #[test]
    fn property_url_template_matches_disk_layout(
        raw in "[A-Za-z0-9_-][A-Za-z0-9._-]{0,40}",
        format in format(),
    ) {
        let name = TilesetName::parse(&raw).unwrap();

        let template = ProjectLayout::url_template(&name, format);
        let expected = format!("/cesium/tiles/{}/{{z}}/{{x}}/{{y}}.{}", raw, format.extension());

        prop_assert_eq!(template, expected);
    }
}

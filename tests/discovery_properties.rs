use std::collections::BTreeSet;

use lookctl::assets::{self, AssetCategory};
use lookctl::test_utils::AssetTree;
use proptest::prelude::*;

fn names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z][A-Za-z0-9-]{0,8}", 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn widget_themes_sorted_and_unique(first in names(), second in names()) {
        let tree = AssetTree::with_system_dirs(&["a", "b"]);
        for name in &first {
            tree.widget_theme(&tree.dirs.system_data_dirs[0].join("themes"), name);
        }
        for name in &second {
            tree.widget_theme(&tree.dirs.system_data_dirs[1].join("themes"), name);
        }

        let got = assets::installed(&tree.dirs, AssetCategory::WidgetTheme);

        let expected: BTreeSet<_> = first
            .iter()
            .chain(second.iter())
            .filter(|name| !AssetCategory::WidgetTheme.excluded().contains(&name.as_str()))
            .cloned()
            .collect();
        prop_assert_eq!(got, expected.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn excluded_icon_names_never_listed(extra in names()) {
        let tree = AssetTree::new();
        let root = tree.system_dir().join("icons");
        for name in AssetCategory::IconTheme.excluded().iter().copied().chain(extra.iter().map(String::as_str)) {
            tree.icon_theme(&root, name);
        }

        let got = assets::installed(&tree.dirs, AssetCategory::IconTheme);
        for excluded in AssetCategory::IconTheme.excluded() {
            prop_assert!(!got.iter().any(|name| name.as_str() == *excluded));
        }
    }
}

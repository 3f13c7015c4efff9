//! Reading the current configuration and writing it to every store.

use tracing::info;

use super::{
    FileStores, KEY_COLOR_SCHEME, KEY_CURSOR_THEME, KEY_GTK_THEME, KEY_ICON_THEME, LiveStore,
    ThemeConfig,
};
use crate::error::{LookError, Result};

/// Reads from the live store and writes to the live store and settings files.
pub struct ThemeSync<'a> {
    store: &'a dyn LiveStore,
    schema: &'a str,
    files: FileStores,
}

impl<'a> ThemeSync<'a> {
    pub fn new(store: &'a dyn LiveStore, schema: &'a str, files: FileStores) -> Self {
        Self {
            store,
            schema,
            files,
        }
    }

    /// Query all four keys. Any failure aborts the read.
    pub fn current(&self) -> Result<ThemeConfig> {
        let widget_theme = self.get(KEY_GTK_THEME)?;
        let icon_theme = self.get(KEY_ICON_THEME)?;
        let cursor_theme = self.get(KEY_CURSOR_THEME)?;
        let color_scheme = self.get(KEY_COLOR_SCHEME)?;

        Ok(ThemeConfig {
            widget_theme,
            icon_theme,
            cursor_theme,
            prefer_dark: ThemeConfig::prefers_dark(&color_scheme),
        })
    }

    /// Write the settings files, then apply to the live store.
    ///
    /// The files only take effect when a toolkit starts, so they go first; the
    /// live store changes the running session immediately and goes last.
    /// Stops at the first failure without undoing earlier writes.
    pub fn save(&self, cfg: &ThemeConfig) -> Result<()> {
        self.files.save(cfg)?;

        self.set(KEY_GTK_THEME, "gtk theme", &cfg.widget_theme)?;
        self.set(KEY_ICON_THEME, "icon theme", &cfg.icon_theme)?;
        self.set(KEY_CURSOR_THEME, "cursor theme", &cfg.cursor_theme)?;
        self.set(KEY_COLOR_SCHEME, "color scheme", cfg.color_scheme())?;

        info!(
            theme = %cfg.widget_theme,
            icon = %cfg.icon_theme,
            cursor = %cfg.cursor_theme,
            prefer_dark = cfg.prefer_dark,
            "appearance saved"
        );
        Ok(())
    }

    fn get(&self, key: &str) -> Result<String> {
        self.store
            .get(self.schema, key)
            .map_err(|source| LookError::Read {
                key: key.to_string(),
                source,
            })
    }

    fn set(&self, key: &str, setting: &str, value: &str) -> Result<()> {
        self.store
            .set(self.schema, key, value)
            .map_err(|source| LookError::Apply {
                setting: setting.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DESKTOP_INTERFACE_SCHEMA;
    use crate::test_utils::fixtures::AssetTree;
    use crate::test_utils::store::MemoryStore;

    fn sync<'a>(store: &'a MemoryStore, tree: &AssetTree) -> ThemeSync<'a> {
        ThemeSync::new(
            store,
            DESKTOP_INTERFACE_SCHEMA,
            FileStores::from_dirs(&tree.dirs),
        )
    }

    #[test]
    fn current_reads_all_keys() {
        let tree = AssetTree::new();
        let store = MemoryStore::with_config(&ThemeConfig {
            widget_theme: "Nordic".to_string(),
            icon_theme: "Papirus".to_string(),
            cursor_theme: "Bibata".to_string(),
            prefer_dark: true,
        });

        let cfg = sync(&store, &tree).current().unwrap();
        assert_eq!(cfg.widget_theme, "Nordic");
        assert_eq!(cfg.icon_theme, "Papirus");
        assert_eq!(cfg.cursor_theme, "Bibata");
        assert!(cfg.prefer_dark);
    }

    #[test]
    fn unknown_color_scheme_reads_as_light() {
        let tree = AssetTree::new();
        let store = MemoryStore::with_config(&ThemeConfig::default());
        store.insert(KEY_COLOR_SCHEME, "default");

        assert!(!sync(&store, &tree).current().unwrap().prefer_dark);
    }

    #[test]
    fn read_failure_names_the_key() {
        let tree = AssetTree::new();
        let store = MemoryStore::with_config(&ThemeConfig::default());
        store.fail_get(KEY_CURSOR_THEME);

        match sync(&store, &tree).current().unwrap_err() {
            LookError::Read { key, .. } => assert_eq!(key, KEY_CURSOR_THEME),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn save_then_read_round_trips() {
        let tree = AssetTree::new();
        let store = MemoryStore::default();
        let sync = sync(&store, &tree);
        let cfg = ThemeConfig {
            widget_theme: "A".to_string(),
            icon_theme: "B".to_string(),
            cursor_theme: "C".to_string(),
            prefer_dark: true,
        };

        sync.save(&cfg).unwrap();
        assert_eq!(sync.current().unwrap(), cfg);
    }

    #[test]
    fn save_writes_files_before_live_store() {
        let tree = AssetTree::new();
        let store = MemoryStore::default();
        let files = FileStores::from_dirs(&tree.dirs);
        // block the first file target so the files step fails
        tree.touch(&files.gtk3_dir);

        let err = sync(&store, &tree).save(&ThemeConfig::default()).unwrap_err();
        assert_eq!(err.code(), "write_failed");
        assert!(store.sets().is_empty());
    }

    #[test]
    fn live_store_failure_stops_remaining_keys() {
        let tree = AssetTree::new();
        let store = MemoryStore::default();
        store.fail_set(KEY_ICON_THEME);

        match sync(&store, &tree).save(&ThemeConfig::default()).unwrap_err() {
            LookError::Apply { setting, .. } => assert_eq!(setting, "icon theme"),
            other => panic!("unexpected error: {other:?}"),
        }
        let keys: Vec<_> = store.sets().into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![KEY_GTK_THEME.to_string()]);
        // files were already written and stay in place
        assert!(FileStores::from_dirs(&tree.dirs).gtkrc2.is_file());
    }

    #[test]
    fn color_scheme_written_from_boolean() {
        let tree = AssetTree::new();
        let store = MemoryStore::default();
        let cfg = ThemeConfig {
            prefer_dark: false,
            ..ThemeConfig::default()
        };

        sync(&store, &tree).save(&cfg).unwrap();
        assert_eq!(store.value(KEY_COLOR_SCHEME).as_deref(), Some("prefer-light"));
    }
}

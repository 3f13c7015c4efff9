use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashSet};

use crate::error::StoreError;
use crate::settings::{
    KEY_COLOR_SCHEME, KEY_CURSOR_THEME, KEY_GTK_THEME, KEY_ICON_THEME, LiveStore, ThemeConfig,
};

/// In-memory [`LiveStore`] that records every call.
///
/// The schema argument is ignored. Keys can be made to fail on read or write.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
    sets: RefCell<Vec<(String, String)>>,
    gets: Cell<usize>,
    failing_gets: RefCell<HashSet<String>>,
    failing_sets: RefCell<HashSet<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_config(cfg: &ThemeConfig) -> Self {
        let store = Self::default();
        store.insert(KEY_GTK_THEME, &cfg.widget_theme);
        store.insert(KEY_ICON_THEME, &cfg.icon_theme);
        store.insert(KEY_CURSOR_THEME, &cfg.cursor_theme);
        store.insert(KEY_COLOR_SCHEME, cfg.color_scheme());
        store
    }

    /// Seed a value without recording a `set`.
    pub fn insert(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn fail_get(&self, key: &str) {
        self.failing_gets.borrow_mut().insert(key.to_string());
    }

    pub fn fail_set(&self, key: &str) {
        self.failing_sets.borrow_mut().insert(key.to_string());
    }

    /// Successful `set` calls in order, as `(key, value)`.
    #[must_use]
    pub fn sets(&self) -> Vec<(String, String)> {
        self.sets.borrow().clone()
    }

    #[must_use]
    pub fn get_count(&self) -> usize {
        self.gets.get()
    }
}

fn unavailable(key: &str, reason: &str) -> StoreError {
    StoreError::Unavailable {
        program: "memory".to_string(),
        source: std::io::Error::other(format!("{key}: {reason}")),
    }
}

impl LiveStore for MemoryStore {
    fn get(&self, _schema: &str, key: &str) -> Result<String, StoreError> {
        self.gets.set(self.gets.get() + 1);
        if self.failing_gets.borrow().contains(key) {
            return Err(unavailable(key, "read refused"));
        }
        self.value(key).ok_or_else(|| unavailable(key, "no such key"))
    }

    fn set(&self, _schema: &str, key: &str, value: &str) -> Result<(), StoreError> {
        if self.failing_sets.borrow().contains(key) {
            return Err(unavailable(key, "write refused"));
        }
        self.insert(key, value);
        self.sets
            .borrow_mut()
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}

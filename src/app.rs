use tracing::debug;

use crate::cli::OutputFormat;
use crate::config::{Config, XdgDirs};
use crate::settings::{FileStores, Gsettings, LiveStore, ThemeSync};

pub struct AppContext {
    pub dirs: XdgDirs,
    pub config: Config,
    pub store: Box<dyn LiveStore>,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn new(dirs: XdgDirs, config: Config, output_format: OutputFormat) -> Self {
        let gsettings = Gsettings::from_config(&config.store);
        if !gsettings.is_available() {
            // only `current` and `set` need it; they report the failure themselves
            debug!(program = %config.store.gsettings, "live settings store not found");
        }

        Self {
            output_format,
            store: Box::new(gsettings),
            dirs,
            config,
        }
    }

    /// Reader/writer bound to this context's store, schema, and directories.
    pub fn sync(&self) -> ThemeSync<'_> {
        ThemeSync::new(
            self.store.as_ref(),
            &self.config.store.schema,
            FileStores::from_dirs(&self.dirs),
        )
    }
}

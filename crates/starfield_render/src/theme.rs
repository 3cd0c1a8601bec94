use bevy::prelude::*;
use starfield_core::{Theme, ThemeColors};
use std::path::{Path, PathBuf};

/// Process-wide theme flag plus its derived color tokens. The tokens are
/// recomputed from the palette table on every change and are not otherwise
/// mutable, so they can never drift from the lookup values.
#[derive(Resource)]
pub struct ThemeStore {
    theme: Theme,
    colors: ThemeColors,
    path: PathBuf,
}

impl ThemeStore {
    /// Initialize from persisted storage; absent or invalid flags mean dark
    pub fn load(path: PathBuf) -> Self {
        let theme = starfield_storage::load_theme(&path);
        Self {
            theme,
            colors: theme.colors(),
            path,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn colors(&self) -> ThemeColors {
        self.colors
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.colors = theme.colors();
    }

    pub fn toggle(&mut self) {
        self.set_theme(self.theme.toggled());
    }
}

/// Persists the theme whenever it changes (including the initial load)
pub struct ThemePlugin;

impl Plugin for ThemePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, persist_theme.run_if(resource_changed::<ThemeStore>));
    }
}

fn persist_theme(store: Res<ThemeStore>) {
    if let Err(e) = starfield_storage::save_theme(store.theme(), store.path()) {
        warn!("Failed to persist theme: {e}");
    }
}

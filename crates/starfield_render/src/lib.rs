pub mod gate;
pub mod plugin;
pub mod surface;
pub mod theme;
pub mod ui;

pub use gate::ShowWhenVisible;
pub use plugin::StarfieldRenderPlugin;
pub use theme::{ThemePlugin, ThemeStore};
pub use ui::{ThemeText, ThemeView};

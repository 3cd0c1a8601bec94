pub mod config;
pub mod constants;
pub mod theme;

pub use config::StarfieldConfig;
pub use constants::*;
pub use theme::*;

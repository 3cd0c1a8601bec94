pub mod debounce;
pub mod pipeline;
pub mod state;
pub mod visibility;

pub use debounce::Debounce;
pub use pipeline::StarfieldSimPlugin;
pub use state::{DisturbRng, FieldState, ResizeDebounce};
pub use visibility::VisibilityGate;

pub mod field;
pub mod star;
pub mod surface;

pub use field::StarField;
pub use star::Star;
pub use surface::RasterSurface;

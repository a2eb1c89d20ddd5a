mod fill;
mod path;
mod stroke;

pub use fill::{Fill, FillStyle};
pub use path::{ArcPath, Path, PathBuilder};
pub use stroke::{LineCap, Stroke};

pub use lyon;

pub mod traits;
pub mod vector;
pub mod shapes;
pub mod draw;

pub use traits::DrawingSurface;
pub use vector::{VectorColor, VectorSurface, VectorVertex};
pub use shapes::shape_path;
pub use draw::render_particles;

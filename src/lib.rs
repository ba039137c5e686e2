pub mod arcball;
pub mod cli;
pub mod mesh;
pub mod renderer;
pub mod texture;

pub use arcball::Arcball;
pub use mesh::{cube, Vertex};
pub use renderer::CubeRenderer;

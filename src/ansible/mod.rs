mod inventory_renderer;
mod render_error;

pub use inventory_renderer::*;
pub use render_error::*;

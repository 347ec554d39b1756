pub mod render;
pub mod view;

pub use render::PageRenderer;
pub use view::PageView;

pub mod terminal;

pub use terminal::format_building;
pub use terminal::NullRenderer;
pub use terminal::Renderer;
pub use terminal::TerminalRenderer;

pub mod gallery;
pub mod typing;
pub mod zoom;

pub use gallery::GallerySession;
pub use typing::TypingCycle;
pub use zoom::{ZoomState, touch_distance};

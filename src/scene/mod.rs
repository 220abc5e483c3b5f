//! Scene screens
//!
//! Each scene keeps its own timers, paints its shapes into the framebuffer
//! and draws its text over the blitted frame.

pub mod menu;
pub mod letter;
pub mod select;
pub mod star_get;
pub mod hud;

pub use menu::MenuScene;
pub use letter::LetterScene;
pub use select::CourseSelect;
pub use star_get::StarGetScene;

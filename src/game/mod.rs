//! Game simulation
//!
//! Player physics, chase camera, collectibles and the per-level session.
//! Nothing here touches the window except `InputState::from_keyboard`.

mod player;
mod camera;
mod collectible;
mod input;
mod session;

pub use player::*;
pub use camera::*;
pub use collectible::*;
pub use input::*;
pub use session::*;

mod layout;
mod playback;
mod session;

pub use layout::{BOARD_TOP, BoardLayout};
pub use playback::PlaybackController;
pub use session::Session;

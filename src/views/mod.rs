pub mod game_screen;
pub mod setup_screen;

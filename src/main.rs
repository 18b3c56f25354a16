use log::debug;
use snakepit::app::State;

fn main() {
    std::env::set_var("RUST_LOG", "snakepit=debug");
    env_logger::init();
    debug!("Debug on");
    let _ = iced::application("Snake Pit", State::update, State::view)
        .window_size(iced::Size::new(1000.0, 800.0))
        .subscription(State::subscription)
        .run();
}

use iced::{Element, Subscription};
use log::{debug, error};

use crate::{
    view::View,
    view_models::game_view_model::GameViewModel,
    views::{
        game_screen::{GameMessage, GameScreen},
        setup_screen::{SetupMessage, SetupScreen},
    },
};

/// Top-level application state: which screen is currently showing.
pub struct State {
    screen: Screen,
}

#[derive(Debug)]
enum Screen {
    Setup(SetupScreen),
    Game(GameScreen),
}

#[derive(Clone, Debug)]
pub enum Message {
    Setup(SetupMessage),
    Game(GameMessage),
}

impl View for Screen {
    fn update(&mut self, message: Message) -> Option<Message> {
        match self {
            Screen::Setup(screen) => screen.update(message),
            Screen::Game(screen) => screen.update(message),
        }
    }

    fn view(&self) -> Element<Message> {
        match self {
            Screen::Setup(screen) => screen.view(),
            Screen::Game(screen) => screen.view(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match self {
            Screen::Setup(screen) => screen.subscription(),
            Screen::Game(screen) => screen.subscription(),
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: Screen::Setup(SetupScreen::new()),
        }
    }

    pub fn update(state: &mut State, message: Message) {
        if let Some(next) = state.screen.update(message) {
            match next {
                Message::Setup(_) => state.screen = Screen::Setup(SetupScreen::new()),
                Message::Game(GameMessage::Launch(config)) => {
                    match GameViewModel::new(&config) {
                        Ok(view_model) => {
                            state.screen = Screen::Game(GameScreen::new(view_model));
                        }
                        Err(e) => {
                            error!("Rejected game config: {e:?}");
                            state.screen = Screen::Setup(SetupScreen::new());
                        }
                    }
                }
                Message::Game(other) => {
                    debug!("Unroutable game message: {other:?}");
                }
            }
        }
    }

    #[must_use]
    pub fn view(state: &State) -> Element<Message> {
        state.screen.view()
    }

    #[must_use]
    pub fn subscription(state: &State) -> Subscription<Message> {
        state.screen.subscription()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

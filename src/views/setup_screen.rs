use iced::{
    alignment,
    widget::{button, column, container, pick_list, text},
    Element, Length,
};
use log::debug;

use crate::{
    app::Message,
    models::config::{AgentVariant, SimulationConfig},
    view::View,
};

use super::game_screen::GameMessage;

/// Number of human players sharing the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCount {
    One,
    Two,
}

impl PlayerCount {
    pub const VALUES: [Self; 2] = [Self::One, Self::Two];
}

impl std::fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerCount::One => write!(f, "1 player (arrow keys)"),
            PlayerCount::Two => write!(f, "2 players (arrows + WASD)"),
        }
    }
}

#[derive(Clone, Debug)]
pub enum SetupMessage {
    Default,
    VariantSelected(AgentVariant),
    PlayersSelected(PlayerCount),
    Start,
}

#[derive(Debug)]
pub struct SetupScreen {
    selected_variant: Option<AgentVariant>,
    selected_players: PlayerCount,
}

impl Default for SetupScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected_variant: None,
            selected_players: PlayerCount::One,
        }
    }
}

impl View for SetupScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        if let Message::Setup(setup_message) = message {
            match setup_message {
                SetupMessage::Default => (),
                SetupMessage::VariantSelected(variant) => {
                    debug!("Selected variant: {variant}");
                    self.selected_variant = Some(variant);
                }
                SetupMessage::PlayersSelected(players) => {
                    debug!("Selected players: {players}");
                    self.selected_players = players;
                }
                SetupMessage::Start => {
                    if let Some(variant) = self.selected_variant {
                        debug!("Starting game: {variant}, {}", self.selected_players);
                        let config = match self.selected_players {
                            PlayerCount::One => SimulationConfig::single_player(variant),
                            PlayerCount::Two => SimulationConfig::two_player(variant),
                        };
                        return Some(Message::Game(GameMessage::Launch(config)));
                    }
                    debug!("Start pressed with no variant selected");
                }
            }
        } else {
            debug!("Received non-setup message in setup screen: {message:#?}");
        }
        None
    }

    fn view(&self) -> Element<Message> {
        let variant_picker = pick_list(
            AgentVariant::VALUES,
            self.selected_variant,
            |variant| Message::Setup(SetupMessage::VariantSelected(variant)),
        )
        .placeholder("Select a snake variant");

        let players_picker = pick_list(
            PlayerCount::VALUES,
            Some(self.selected_players),
            |players| Message::Setup(SetupMessage::PlayersSelected(players)),
        );

        let start_button = button(text("Start Game"))
            .on_press(Message::Setup(SetupMessage::Start))
            .width(Length::Shrink);

        let content = column![
            text("Snake Pit").size(32),
            text("Choose a snake variant").size(24),
            variant_picker,
            players_picker,
            start_button,
        ]
        .spacing(20)
        .align_x(alignment::Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }
}

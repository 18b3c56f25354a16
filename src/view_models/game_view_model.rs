use iced::keyboard::{key::Named, Key};
use log::{debug, warn};

use crate::{
    app::Message,
    models::{
        config::{ConfigError, ControlKey, SimulationConfig},
        render::GridFrame,
        simulation::{Simulation, SimulationStatus},
    },
    view_model::ViewModel,
    views::game_screen::GameMessage,
};

/// Owns the running [`Simulation`] and the frame the game screen draws from.
///
/// The timer subscription delivers one tick message per interval; key presses
/// arrive between ticks and are translated into the simulation's own key
/// vocabulary before being forwarded.
#[derive(Debug)]
pub struct GameViewModel {
    config: SimulationConfig,
    simulation: Simulation,
    frame: GridFrame,
}

impl GameViewModel {
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the config fails validation.
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        debug!("New GameViewModel config: {config:#?}");
        let simulation = Simulation::new(config)?;
        let mut frame = GridFrame::new(config.grid_width, config.grid_height);
        simulation.draw(&mut frame);
        Ok(Self {
            config: config.clone(),
            simulation,
            frame,
        })
    }

    #[must_use]
    pub fn frame(&self) -> &GridFrame {
        &self.frame
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.simulation.status() == SimulationStatus::Stopped
    }

    #[must_use]
    pub fn tick_interval_millis(&self) -> u64 {
        self.config.tick_interval_millis
    }

    #[must_use]
    pub fn cell_size(&self) -> u16 {
        self.config.cell_size
    }

    /// Translates an iced key event into the simulation's key vocabulary.
    fn control_key(key: &Key) -> Option<ControlKey> {
        match key {
            Key::Named(named) => match named {
                Named::ArrowUp => Some(ControlKey::ArrowUp),
                Named::ArrowDown => Some(ControlKey::ArrowDown),
                Named::ArrowLeft => Some(ControlKey::ArrowLeft),
                Named::ArrowRight => Some(ControlKey::ArrowRight),
                _ => None,
            },
            Key::Character(c) => c
                .as_str()
                .chars()
                .next()
                .map(|ch| ControlKey::Char(ch.to_ascii_lowercase())),
            Key::Unidentified => None,
        }
    }
}

impl ViewModel for GameViewModel {
    fn update(&mut self, message: Message) -> Option<Message> {
        if let Message::Game(game_message) = message {
            match game_message {
                GameMessage::Key(key) => {
                    if let Some(control) = Self::control_key(&key) {
                        self.simulation.handle_key(control);
                    }
                    None
                }
                GameMessage::Tick(_) => {
                    self.simulation.tick(&mut self.frame);
                    None
                }
                other => {
                    warn!("Unroutable message in GameViewModel: {other:#?}");
                    None
                }
            }
        } else {
            warn!("Non-game message sent to GameViewModel: {message:#?}");
            None
        }
    }
}

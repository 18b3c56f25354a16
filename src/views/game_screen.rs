use std::time::{Duration, Instant};

use iced::{
    keyboard::{self, Key},
    time,
    widget::{button, column, container, row, text, Column, Row},
    Border, Color, Element, Length, Subscription,
};
use log::debug;

use crate::{
    app::Message,
    models::{config::SimulationConfig, render::ColorTag},
    view::View,
    view_model::ViewModel,
    view_models::game_view_model::GameViewModel,
};

use super::setup_screen::SetupMessage;

#[derive(Clone, Debug)]
pub enum GameMessage {
    Launch(SimulationConfig),
    Key(Key),
    Tick(Instant),
    Restart,
    BackToSetup,
}

#[derive(Debug)]
pub struct GameScreen {
    view_model: GameViewModel,
}

impl GameScreen {
    #[must_use]
    pub fn new(view_model: GameViewModel) -> Self {
        Self { view_model }
    }
}

fn tag_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Red => Color::from_rgb(1.0, 0.0, 0.0),
        ColorTag::Green => Color::from_rgb(0.0, 0.8, 0.0),
        ColorTag::Blue => Color::from_rgb(0.0, 0.2, 1.0),
        ColorTag::Yellow => Color::from_rgb(0.9, 0.8, 0.0),
        ColorTag::Purple => Color::from_rgb(0.6, 0.0, 0.8),
        ColorTag::Orange => Color::from_rgb(1.0, 0.5, 0.0),
    }
}

impl View for GameScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        if let Message::Game(game_message) = message {
            match game_message {
                GameMessage::Restart => Some(Message::Game(GameMessage::Launch(
                    self.view_model.config().clone(),
                ))),
                GameMessage::BackToSetup => Some(Message::Setup(SetupMessage::Default)),
                other => self.view_model.update(Message::Game(other)),
            }
        } else {
            debug!("Received non-game message in game screen: {message:#?}");
            None
        }
    }

    fn view(&self) -> Element<Message> {
        let mut grid_view = Column::new();
        let cell_size = self.view_model.cell_size();

        let make_container = |color: Color| {
            container(text(" ").color(color)) // Empty text to preserve size
                .width(cell_size)
                .height(cell_size)
                .style(move |_: &_| container::Style {
                    border: Border {
                        color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
                        width: 1.0,
                        ..Default::default()
                    },
                    background: Some(color.into()),
                    ..container::Style::default()
                })
        };

        for frame_row in self.view_model.frame().rows() {
            let mut grid_row = Row::new();
            for cell in frame_row {
                let color = match cell {
                    Some(tag) => tag_color(*tag),
                    None => Color::WHITE,
                };
                grid_row = grid_row.push(make_container(color));
            }
            grid_view = grid_view.push(grid_row);
        }

        let setup_button = button(text("Back to Setup"))
            .on_press(Message::Game(GameMessage::BackToSetup))
            .width(160)
            .height(40);
        let restart_button = button(text("Restart"))
            .on_press(Message::Game(GameMessage::Restart))
            .width(80)
            .height(40);

        let game = container(
            column![
                row![setup_button, restart_button].spacing(10),
                grid_view,
            ]
            .spacing(10),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center);

        if self.view_model.is_stopped() {
            return column!(game, text("GAME OVER"))
                .align_x(iced::alignment::Horizontal::Center)
                .into();
        }
        game.into()
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.view_model.is_stopped() {
            return Subscription::none();
        }
        let timer = time::every(Duration::from_millis(
            self.view_model.tick_interval_millis(),
        ))
        .map(GameMessage::Tick)
        .map(Message::Game);
        let keyboard = keyboard::on_key_press(|key, _| {
            Some(Message::Game(GameMessage::Key(key)))
        });
        Subscription::batch(vec![timer, keyboard])
    }
}

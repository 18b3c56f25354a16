//! The [`ViewModel`] trait for the MVVM architecture.

use crate::app::Message;

/// A view model mediates between a [`crate::view::View`] and the simulation
/// model it owns.
pub trait ViewModel {
    /// Handles a message on behalf of the owning view, optionally returning
    /// a follow-up message for the application to route.
    fn update(&mut self, message: Message) -> Option<Message>;
}

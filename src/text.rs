//! Asynchronous text-input dialog plumbing.
//!
//! Requesting text input never blocks and never calls back synchronously: the
//! hub parks the listener, forwards a [`TextInputRequest`] to the backend's
//! dialog collaborator, and returns. The outcome comes back through the event
//! queue in a later frame as a [`DriverEvent::TextInput`], at which point the
//! hub fires exactly one of the listener's two callbacks, exactly once, on
//! the render-loop thread.
//!
//! [`DriverEvent::TextInput`]: crate::queue::DriverEvent::TextInput

/// Identifier correlating a text-input request with its completion event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRequestId(pub(crate) u64);

/// Receiver for the outcome of a text-input dialog. Exactly one of the two
/// methods is invoked, exactly once per request.
pub trait TextInputListener {
    /// The user confirmed the dialog with the given text.
    fn input(&mut self, text: &str);

    /// The user dismissed the dialog without entering text.
    fn canceled(&mut self);
}

/// How the dialog presents its pre-filled message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextPrompt {
    /// Editable initial text shown in the input field.
    Initial(String),
    /// Greyed-out placeholder shown while the field is empty.
    Placeholder(String),
}

/// A request for the external dialog collaborator, as handed to
/// [`Backend::request_text_input`].
///
/// [`Backend::request_text_input`]: crate::backend::Backend::request_text_input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextInputRequest {
    /// Identifier the backend must echo in the completion event.
    pub id: TextRequestId,
    /// Dialog title.
    pub title: String,
    /// Pre-filled message for the user.
    pub prompt: TextPrompt,
}

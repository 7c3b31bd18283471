//! Session controller and host protocol for figcode.
//!
//! The [`Session`] reacts to host events: it loads the user's settings,
//! converts the current selection, dispatches it to the generators and
//! relays settings, code and errors to the UI through a [`UiChannel`].
//!
//! ```text
//! host event → Session → SettingsStore → ConversionAdapter → Dispatcher → UiChannel
//! ```

mod channel;
pub mod config;
mod generators;
pub mod logging;
mod protocol;
mod session;

pub use channel::{JsonLines, UiChannel};
pub use config::Config;
pub use generators::default_dispatcher;
pub use protocol::{HostEvent, NodeInput, OutboundMessage, UiMessage};
pub use session::{Session, SessionState, export_language, export_once};

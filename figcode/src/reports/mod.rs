//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod options;
mod output;
mod settings;

pub use options::OptionsReport;
pub use output::{Report, TerminalOutput};
pub use settings::SettingsReport;

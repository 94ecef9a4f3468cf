//! Entry and exit panels.

pub mod entry;
pub mod exit;

pub use entry::EntryPanel;
pub use exit::ExitPanel;

pub mod content;
pub mod countdown;
pub mod host;
pub mod notice;

pub use content::DisplayVariant;
pub use countdown::{CloseControl, Countdown};
pub use notice::{CopyOutcome, MigrationNotice};

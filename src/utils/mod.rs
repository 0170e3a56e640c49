pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::mins2readable;
pub use time::format_duration;

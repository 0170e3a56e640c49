pub mod batch;
pub mod compute;
pub mod config;
pub mod init;
pub mod presets;
pub mod round;
pub mod span;

pub mod cli;
pub mod flags;

pub use cli::LighthouseCli;
pub use flags::option_flags;

pub mod date;
pub mod formatting;
pub mod path;
pub mod time;

pub use formatting::mask_secret;

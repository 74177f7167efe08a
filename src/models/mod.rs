pub mod coordinate;
pub mod record;
pub mod state;

pub mod gamemode;
pub mod math;
pub mod random;

pub use gamemode::GameMode;

pub mod roster;
pub mod seed;
pub mod uploads;

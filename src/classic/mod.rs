pub mod draw;
pub mod logic;
pub mod timer;
pub mod types;

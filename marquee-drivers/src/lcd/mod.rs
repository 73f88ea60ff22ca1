//! LCD bus and panel drivers

pub mod hd44780;
pub mod parallel;

pub use hd44780::Hd44780;
pub use parallel::ParallelBus;

//! Computer specification assembly (Builder)

pub mod computer;
pub mod director;

pub use computer::{Computer, ComputerBuilder, DEFAULT_GPU};
pub use director::{ComputerDirector, Profile};

pub mod factories;
pub mod fakes;

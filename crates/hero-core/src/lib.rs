pub mod config;
pub mod constants;
pub mod controller;
pub mod easing;
pub mod error;
pub mod idle;
pub mod language;
pub mod mapper;
pub mod sequence;
pub mod spring;

pub use config::*;
pub use controller::*;
pub use easing::Easing;
pub use error::*;
pub use idle::*;
pub use language::*;
pub use mapper::*;
pub use sequence::*;
pub use spring::*;

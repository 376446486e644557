#[macro_use]
extern crate serde;

pub mod package;
pub use package::{ActivityCode, TrainingPackage};

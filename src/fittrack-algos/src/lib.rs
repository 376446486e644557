#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

mod error;
pub use error::TrainingError;

pub(crate) mod session;
pub use session::Session;

pub(crate) mod training;
pub use training::{Running, SportsWalking, Swimming, Training, TrainingCalculator};

pub(crate) mod summary;
pub use summary::TrainingSummary;

pub(crate) mod dispatch;
pub use dispatch::{read, read_package};

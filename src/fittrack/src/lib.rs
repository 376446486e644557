#[macro_use]
extern crate log;

mod packages;
pub use packages::{DEMO_PACKAGES, demo_packages, load_packages, run_packages, write_summaries};

mod report;
pub use report::{OutputFormat, render};

pub mod common;
pub mod u101_generate_reports;

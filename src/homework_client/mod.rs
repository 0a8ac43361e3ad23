mod client;
mod validation;
mod verdicts;

pub use client::{HomeworkClient, StatusSource};
pub use validation::check_response;
pub use verdicts::parse_status;

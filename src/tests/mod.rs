mod job_tests;
mod utils;

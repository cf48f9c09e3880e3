pub mod dtos;
pub mod use_cases;
mod validation;

pub use validation::parse_new_record;

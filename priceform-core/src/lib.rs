pub mod models;
pub mod parse;
pub mod rates;
pub mod validation;

pub use models::*;
pub use validation::{SubmitBlock, ValueField, check_submit};

mod currency;
mod input_mode;

pub use currency::{Currency, is_base_selection};
pub use input_mode::InputMode;

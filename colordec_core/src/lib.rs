pub mod convert;
pub mod store;
pub mod view;

pub use convert::{HexError, hex_string, parse_hex, rgb_to_decimal};
pub use store::{PresetStore, Rgb};
pub use view::ViewState;

pub fn version() -> &'static str {
    "0.1.0"
}

use crate::convert::{self, HexError};
use crate::store::Rgb;

/// The whole UI model: three channels, everything else derived.
///
/// The GUI binds its widgets to the fields and calls the methods below for
/// every piece of display state, so the logic stays toolkit-free.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rgb(&self) -> Rgb {
        [self.red, self.green, self.blue]
    }

    pub fn set_rgb(&mut self, rgb: Rgb) {
        [self.red, self.green, self.blue] = rgb;
    }

    /// Swatch color as `#rrggbb`.
    pub fn hex_string(&self) -> String {
        convert::hex_string(self.red, self.green, self.blue)
    }

    pub fn decimal(&self) -> (f64, f64, f64) {
        convert::rgb_to_decimal(self.red, self.green, self.blue)
    }

    /// The three-line readout, in fixed channel order.
    pub fn output_text(&self) -> String {
        let (r, g, b) = self.decimal();
        format!("red: {r}\ngreen: {g}\nblue: {b}")
    }

    /// Import a `#rrggbb` / `rrggbb` string. On any error the channels are
    /// left untouched.
    pub fn apply_hex(&mut self, input: &str) -> Result<(), HexError> {
        let (r, g, b) = convert::parse_hex(input)?;
        self.set_rgb([r, g, b]);
        Ok(())
    }
}

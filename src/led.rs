//! RGB LED capability consumed by the console.
//!
//! The GPIO implementation is board glue; the console only needs the
//! three named actions below. Tests use a recording double.

/// RGB LED with one-color set, cycle and off actions.
pub trait RgbLed {
    /// Drive the three channels. Exactly one is set by the stock
    /// commands, but the contract allows any combination.
    fn set_color(&mut self, red: bool, green: bool, blue: bool);

    /// Advance to the next color in the implementation's cycle.
    fn cycle(&mut self);

    /// All channels off.
    fn off(&mut self);
}

//! SSD1306 OLED panel wrapper (128x32).
//!
//! Write-only sink: short text plus a cursor position, cleared and redrawn
//! on every call. Draw and flush errors after successful bring-up are
//! dropped - a missed frame costs nothing.

use crate::display::digits::format_value;
use crate::error::Error;
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I2C implementation so callers pass in their HAL's
/// I2C peripheral.
pub type Panel<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x32, BufferedGraphicsMode<DisplaySize128x32>>;

/// Initialise the SSD1306 and clear the screen. Failure here is surfaced
/// to the caller - bring-up treats it as fatal.
pub fn init<I2C>(i2c: I2C) -> Result<Panel<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut panel = Ssd1306::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    panel.init().map_err(|_| Error::Display)?;
    panel.clear_buffer();
    panel.flush().map_err(|_| Error::Display)?;
    Ok(panel)
}

fn style(font: &'static MonoFont<'static>) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(BinaryColor::On)
        .build()
}

/// Render the entry buffer while digits are being typed.
pub fn draw_entry<I2C>(panel: &mut Panel<I2C>, text: &str)
where
    I2C: embedded_hal::i2c::I2c,
{
    panel.clear_buffer();
    let _ = Text::new(text, Point::new(20, 20), style(&FONT_10X20)).draw(panel);
    let _ = panel.flush();
}

/// Render the current count, zero-padded to two digits.
pub fn draw_count<I2C>(panel: &mut Panel<I2C>, value: i32)
where
    I2C: embedded_hal::i2c::I2c,
{
    panel.clear_buffer();
    let text = format_value(value);
    let _ = Text::new(text.as_str(), Point::new(44, 24), style(&FONT_10X20)).draw(panel);
    let _ = panel.flush();
}

/// Render a short bring-up / status message.
pub fn draw_message<I2C>(panel: &mut Panel<I2C>, message: &str)
where
    I2C: embedded_hal::i2c::I2c,
{
    panel.clear_buffer();
    let _ = Text::new(message, Point::new(0, 12), style(&FONT_6X10)).draw(panel);
    let _ = panel.flush();
}

/// Blank the panel (terminal-flash off phase).
pub fn clear<I2C>(panel: &mut Panel<I2C>)
where
    I2C: embedded_hal::i2c::I2c,
{
    panel.clear_buffer();
    let _ = panel.flush();
}

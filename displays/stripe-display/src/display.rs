//! Application-facing display driver
//!
//! Draw calls return as soon as their last pixels are queued. The next call
//! waits (yielding to the executor) until the previous transfer drained, so
//! composing a text row overlaps with clocking out the one before it.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use heapless::String;
use stripe_hal::{OutputPin, SpiBus};

use crate::backend::{CommandLink, DisplayError, PanelBackend};
use crate::buffer::LineBuffer;
use crate::color::Rgb565;
use crate::config::{line_buffer_len, DisplayConfig};
use crate::font::{FontSet, REPLACEMENT};
use crate::geometry::{HardwareExtent, Rotation, VisibleExtent, Window};
use crate::text::{self, Justify, TextArea};
use crate::transfer::{Transaction, TransferEngine, TransferState};
use crate::{BASELINE, MAX_TEXT_LEN, ROW_HEIGHT};

/// The bus and control lines a panel is wired to
pub struct Interface<BUS, CS, DC, RST, D> {
    pub spi: BUS,
    pub cs: CS,
    pub dc: DC,
    pub rst: RST,
    pub delay: D,
}

/// RGB565 SPI panel with one text area and solid fills
pub struct Display<'b, P, BUS, CS, DC, RST, D>
where
    P: PanelBackend,
    BUS: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    engine: TransferEngine<'b, BUS, CS, DC, D>,
    rst: RST,
    panel: P,
    hardware: HardwareExtent,
    visible: VisibleExtent,
    rotation: Rotation,
    fonts: FontSet,
    area: TextArea,
}

impl<'b, P, BUS, CS, DC, RST, D> Display<'b, P, BUS, CS, DC, RST, D>
where
    P: PanelBackend,
    BUS: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    /// Create a driver
    ///
    /// `buffer` must hold at least [`line_buffer_len`] bytes for the
    /// configured glass. Nothing is sent until [`reset`](Self::reset).
    pub fn new(
        config: DisplayConfig,
        panel: P,
        interface: Interface<BUS, CS, DC, RST, D>,
        buffer: &'b mut [u8],
    ) -> Result<Self, DisplayError> {
        if buffer.len() < line_buffer_len(config.hardware) {
            return Err(DisplayError::BufferTooSmall);
        }

        let Interface {
            spi,
            cs,
            dc,
            rst,
            delay,
        } = interface;

        Ok(Self {
            engine: TransferEngine::new(spi, cs, dc, delay, buffer, config.spi),
            rst,
            panel,
            hardware: config.hardware,
            visible: VisibleExtent::default(),
            rotation: Rotation::default(),
            fonts: FontSet::default(),
            area: TextArea::default(),
        })
    }

    /// Replace the built-in font tiers
    pub fn with_fonts(mut self, fonts: FontSet) -> Self {
        self.fonts = fonts;
        self
    }

    /// Put the control lines into their idle state
    pub fn initialize(&mut self) {
        self.engine.release_lines();
        self.rst.set_high();
    }

    /// Reset the controller, set the rotation and clear the screen
    ///
    /// Returns with the bus released.
    pub async fn reset(&mut self, rotation: Rotation, background: Rgb565) -> Result<(), DisplayError> {
        self.engine.hardware_reset(&mut self.rst).await;

        let mut tx = self.engine.begin().await;
        self.panel.reset(&mut tx)?;
        self.visible = self.panel.set_orientation(&mut tx, self.hardware, rotation)?;
        self.rotation = rotation;

        let screen = Window::new(0, 0, self.visible.width, self.visible.height);
        if let Some(window) = screen.clamp_to(&self.visible) {
            fill_window(&mut tx, &mut self.panel, &self.visible, window, background)?;
        }
        tx.finish();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "display: reset, {=u16} deg, {=u16}x{=u16} at {=u16},{=u16}",
            rotation.degrees(),
            self.visible.width,
            self.visible.height,
            self.visible.x_start,
            self.visible.y_start
        );

        Ok(())
    }

    /// Fill a rectangle with a solid color
    ///
    /// The rectangle is clipped to the screen. Returns once the last chunk is
    /// queued.
    pub async fn fill_rectangle(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        let Some(window) = Window::new(x, y, width, height).clamp_to(&self.visible) else {
            return Ok(());
        };

        let mut tx = self.engine.begin().await;
        fill_window(&mut tx, &mut self.panel, &self.visible, window, color)?;
        tx.submit();
        Ok(())
    }

    /// Fill the whole visible screen
    pub async fn fill_screen(&mut self, color: Rgb565) -> Result<(), DisplayError> {
        self.fill_rectangle(0, 0, self.visible.width, self.visible.height, color)
            .await
    }

    /// Define the area text is drawn into and reset the cursor
    ///
    /// `row` counts bands of [`ROW_HEIGHT`] pixels. The width is limited to
    /// what one band of the line buffer holds.
    pub fn set_text_area(
        &mut self,
        x: u16,
        row: u8,
        width: u16,
        justify: Justify,
        foreground: Rgb565,
        background: Rgb565,
    ) {
        let max_width = (self.engine.capacity() / usize::from(ROW_HEIGHT)).min(usize::from(u16::MAX));

        self.area = TextArea {
            x,
            row,
            width: width.min(max_width as u16),
            justify,
            foreground,
            background,
            cursor: 0,
        };
    }

    /// Change the text color of the current area
    pub fn set_color(&mut self, foreground: Rgb565) {
        self.area.foreground = foreground;
    }

    /// Draw one character at the cursor, without sending it
    ///
    /// Always uses the default tier. The band is cleared before the first
    /// character after an area change or a [`print`](Self::print).
    pub async fn draw_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let c = if c.is_ascii() { c as u8 } else { REPLACEMENT };

        let area = self.area;
        let font = self.fonts.default;
        let glyph = font.glyph(c);

        let stride = band_stride(&area, &self.visible);
        let mut canvas = LineBuffer::new(self.engine.idle_buffer().await, stride);
        if area.cursor == 0 {
            canvas.clear(area.background);
        }
        canvas.draw_glyph(font, glyph, area.cursor, BASELINE, area.foreground);

        self.area.cursor = area.cursor.saturating_add(u16::from(glyph.advance));
    }

    /// Print one line of text into the area
    pub async fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        self.print_bytes(text.as_bytes()).await
    }

    /// Print raw bytes, drawing anything outside printable ASCII as `#`
    pub async fn print_bytes(&mut self, raw: &[u8]) -> Result<(), DisplayError> {
        let line = text::sanitize(raw);
        let area = self.area;
        let (tier, text_width) = text::fit(&self.fonts, &line, area.width);
        let font = self.fonts.get(tier);

        #[cfg(feature = "defmt")]
        defmt::debug!("display: print {=usize} glyphs, {}", line.len(), tier);

        let mut tx = self.engine.begin().await;
        let mut canvas = LineBuffer::new(tx.buffer_mut(), band_stride(&area, &self.visible));
        canvas.clear(area.background);

        let mut cursor = area.justify.offset(area.width, text_width);
        for &c in &line {
            let glyph = font.glyph(c);
            let advance = u16::from(glyph.advance);
            if u32::from(cursor) + u32::from(advance) > u32::from(area.width) {
                break;
            }

            canvas.draw_glyph(font, glyph, cursor, BASELINE, area.foreground);
            cursor += advance;
        }

        self.area.cursor = 0;
        send_band(tx, &mut self.panel, &self.visible, &area)
    }

    /// Print a number with `precision` fractional digits
    pub async fn print_float(&mut self, value: f32, precision: u8) -> Result<(), DisplayError> {
        let mut text: String<MAX_TEXT_LEN> = String::new();
        // Overlong numbers are cut, without a dangling decimal point
        if write!(text, "{:.*}", usize::from(precision), value).is_err() && text.ends_with('.') {
            text.pop();
        }
        self.print(&text).await
    }

    /// Send the band as composed by [`draw_char`](Self::draw_char)
    ///
    /// Sends a cleared band if nothing was drawn. The cursor is kept, so
    /// more characters can follow.
    pub async fn flush(&mut self) -> Result<(), DisplayError> {
        let area = self.area;

        let mut tx = self.engine.begin().await;
        if area.cursor == 0 {
            let stride = band_stride(&area, &self.visible);
            LineBuffer::new(tx.buffer_mut(), stride).clear(area.background);
        }
        send_band(tx, &mut self.panel, &self.visible, &area)
    }

    /// Release the bus once the last transfer drained
    ///
    /// Call this regularly from the main loop.
    pub fn poll(&mut self) -> TransferState {
        self.engine.poll()
    }

    /// Run backend commands, e.g. power control, inside a bus session
    pub async fn with_panel<R, F>(&mut self, f: F) -> Result<R, DisplayError>
    where
        F: FnOnce(&mut P, &mut dyn CommandLink) -> Result<R, DisplayError>,
    {
        let mut tx = self.engine.begin().await;
        let result = f(&mut self.panel, &mut tx);
        tx.finish();
        result
    }

    /// Visible extent for the current rotation
    pub fn visible(&self) -> &VisibleExtent {
        &self.visible
    }

    /// Physical glass dimensions
    pub fn hardware(&self) -> &HardwareExtent {
        &self.hardware
    }

    /// Rotation set by the last reset
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Current text area, including the cursor
    pub fn text_area(&self) -> &TextArea {
        &self.area
    }

    /// Transfer state, without polling the bus
    pub fn state(&self) -> TransferState {
        self.engine.state()
    }

    /// Whether a submitted transfer may still be draining
    pub fn is_busy(&self) -> bool {
        self.engine.is_busy()
    }
}

/// Address `window` and stream it full of `color`
///
/// The line buffer is filled once and sent as often as needed.
fn fill_window<P, BUS, CS, DC, D>(
    tx: &mut Transaction<'_, '_, BUS, CS, DC, D>,
    panel: &mut P,
    visible: &VisibleExtent,
    window: Window,
    color: Rgb565,
) -> Result<(), DisplayError>
where
    P: PanelBackend,
    BUS: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    D: DelayNs,
{
    panel.set_window(tx, visible, window)?;

    let total = window.pixel_count() as usize;
    let chunk = LineBuffer::new(tx.buffer_mut(), window.width).fill(color, total);
    if chunk == 0 {
        return Ok(());
    }

    let mut remaining = total;
    while remaining > 0 {
        let count = remaining.min(chunk);
        tx.write_pixels(count * 2)?;
        remaining -= count;
    }
    Ok(())
}

/// On-screen part of the text band of `area`
fn text_band(area: &TextArea, visible: &VisibleExtent) -> Option<Window> {
    Window::new(area.x, u16::from(area.row) * ROW_HEIGHT, area.width, ROW_HEIGHT).clamp_to(visible)
}

/// Row length the band is composed at
///
/// Only the visible columns are kept, so the rows are already packed the
/// way they go out and glyph pixels past the screen edge are clipped.
fn band_stride(area: &TextArea, visible: &VisibleExtent) -> u16 {
    text_band(area, visible).map_or(area.width, |window| window.width)
}

/// Queue the text band of `area` and hand the transfer to the background
fn send_band<P, BUS, CS, DC, D>(
    mut tx: Transaction<'_, '_, BUS, CS, DC, D>,
    panel: &mut P,
    visible: &VisibleExtent,
    area: &TextArea,
) -> Result<(), DisplayError>
where
    P: PanelBackend,
    BUS: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    D: DelayNs,
{
    let Some(window) = text_band(area, visible) else {
        return Ok(());
    };

    panel.set_window(&mut tx, visible, window)?;
    tx.write_pixels(window.pixel_count() as usize * 2)?;
    tx.submit();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::DEFAULT;
    use crate::geometry::Extent;
    use crate::mock::{self, Event, Line, MockBus, MockDelay, MockPin, Wire};
    use crate::st7789::{cmd, St7789};
    use embassy_futures::block_on;
    use proptest::prelude::*;

    type TestDisplay = Display<'static, St7789, MockBus, MockPin, MockPin, MockPin, MockDelay>;

    const SMALL: HardwareExtent = HardwareExtent::new(135, 240, true);
    const FG: Rgb565 = Rgb565::WHITE;
    const BG: Rgb565 = Rgb565::BLUE;

    fn interface(wire: &Wire) -> Interface<MockBus, MockPin, MockPin, MockPin, MockDelay> {
        Interface {
            spi: wire.bus(),
            cs: wire.pin(Line::Cs),
            dc: wire.pin(Line::Dc),
            rst: wire.pin(Line::Rst),
            delay: wire.delay(),
        }
    }

    fn display(wire: &Wire, hardware: HardwareExtent, rotation: Rotation) -> TestDisplay {
        let config = DisplayConfig::st7789(hardware);
        let buffer = mock::leak(config.line_buffer_len());
        let mut display = Display::new(config, St7789::new(), interface(wire), buffer).unwrap();
        display.initialize();
        block_on(display.reset(rotation, Rgb565::BLACK)).unwrap();
        wire.clear();
        display
    }

    /// Pixel columns that hold the foreground color
    fn ink_columns(pixels: &[u16], width: usize) -> Vec<usize> {
        let mut columns: Vec<usize> = pixels
            .iter()
            .enumerate()
            .filter(|(_, p)| **p == FG.0)
            .map(|(i, _)| i % width)
            .collect();
        columns.sort_unstable();
        columns.dedup();
        columns
    }

    fn ramwr_count(wire: &Wire) -> usize {
        wire.opcodes().iter().filter(|c| **c == cmd::RAMWR).count()
    }

    #[test]
    fn test_buffer_too_small() {
        let wire = Wire::new();
        let config = DisplayConfig::st7789(SMALL);
        let buffer = mock::leak(config.line_buffer_len() - 2);
        let result = Display::new(config, St7789::new(), interface(&wire), buffer);
        assert!(matches!(result, Err(DisplayError::BufferTooSmall)));
    }

    #[test]
    fn test_reset_sequence() {
        let wire = Wire::new();
        let config = DisplayConfig::st7789(SMALL);
        let mut display = Display::new(
            config,
            St7789::new(),
            interface(&wire),
            mock::leak(config.line_buffer_len()),
        )
        .unwrap();

        block_on(display.reset(Rotation::Deg0, Rgb565::RED)).unwrap();

        let events = wire.events();
        assert_eq!(
            &events[..6],
            &[
                Event::Cs(false),
                Event::Dc(true),
                Event::Rst(false),
                Event::DelayNs(1_000_000),
                Event::Rst(true),
                Event::DelayNs(5_000_000),
            ]
        );
        assert_eq!(&events[events.len() - 2..], &[Event::End, Event::Cs(true)]);

        assert_eq!(
            wire.opcodes(),
            [0x01, 0x11, 0x3a, 0x36, 0x21, 0x13, 0x29, 0x36, 0x2a, 0x2b, 0x2c]
        );

        // 135 x 240 pixels through a 240 x 60 pixel buffer
        assert_eq!(wire.pixel_writes(cmd::RAMWR), [28_800, 28_800, 7_200]);
        let pixels = wire.last_pixels(cmd::RAMWR);
        assert_eq!(pixels.len(), 135 * 240);
        assert!(pixels.iter().all(|p| *p == Rgb565::RED.0));

        assert_eq!(display.state(), TransferState::Idle);
        assert_eq!(
            display.visible(),
            &VisibleExtent {
                width: 135,
                height: 240,
                x_start: 52,
                y_start: 40,
            }
        );
    }

    #[test]
    fn test_reset_rotated() {
        let wire = Wire::new();
        let display = display(&wire, SMALL, Rotation::Deg90);
        assert_eq!(display.rotation(), Rotation::Deg90);
        assert_eq!(
            display.visible(),
            &VisibleExtent {
                width: 240,
                height: 135,
                x_start: 40,
                y_start: 53,
            }
        );
    }

    #[test]
    fn test_fill_rectangle_window_and_state() {
        let wire = Wire::new();
        wire.set_busy_polls(2);
        let mut display = display(&wire, SMALL, Rotation::Deg0);

        block_on(display.fill_rectangle(5, 5, 10, 10, Rgb565::GREEN)).unwrap();
        assert!(display.is_busy());

        let commands = wire.commands();
        assert_eq!(commands[0].data, [0, 57, 0, 66]);
        assert_eq!(commands[1].data, [0, 45, 0, 54]);
        let pixels = wire.last_pixels(cmd::RAMWR);
        assert_eq!(pixels.len(), 100);
        assert!(pixels.iter().all(|p| *p == Rgb565::GREEN.0));

        // Session still open until the queue drained
        assert!(!wire.events().contains(&Event::End));
        while display.poll() == TransferState::InFlight {}
        assert_eq!(wire.events().last(), Some(&Event::Cs(true)));
    }

    #[test]
    fn test_fill_rectangle_clipped() {
        let wire = Wire::new();
        let mut display = display(&wire, SMALL, Rotation::Deg0);

        block_on(display.fill_rectangle(130, 230, 50, 50, Rgb565::GREEN)).unwrap();
        assert_eq!(wire.last_pixels(cmd::RAMWR).len(), 5 * 10);

        wire.clear();
        block_on(display.fill_rectangle(135, 0, 10, 10, Rgb565::GREEN)).unwrap();
        block_on(display.fill_rectangle(0, 0, 0, 10, Rgb565::GREEN)).unwrap();
        assert!(wire.events().is_empty());
    }

    #[test]
    fn test_fill_screen_after_rotation() {
        let wire = Wire::new();
        let mut display = display(&wire, SMALL, Rotation::Deg270);

        block_on(display.fill_screen(Rgb565::CYAN)).unwrap();
        let commands = wire.commands();
        // x: 40..=279, y: 52..=186
        assert_eq!(commands[0].data, [0, 40, 1, 23]);
        assert_eq!(commands[1].data, [0, 52, 0, 186]);
        assert_eq!(wire.last_pixels(cmd::RAMWR).len(), 240 * 135);
    }

    #[test]
    fn test_print_empty_sends_cleared_band() {
        let wire = Wire::new();
        let mut display = display(&wire, SMALL, Rotation::Deg0);
        display.set_text_area(0, 1, 135, Justify::Center, FG, BG);

        block_on(display.print("")).unwrap();
        assert_eq!(ramwr_count(&wire), 1);
        let pixels = wire.last_pixels(cmd::RAMWR);
        assert_eq!(pixels.len(), 135 * 60);
        assert!(pixels.iter().all(|p| *p == BG.0));

        // Row 1 starts 60 pixels down, plus the panel offset
        assert_eq!(wire.commands()[1].data, [0, 100, 0, 159]);

        while display.poll() == TransferState::InFlight {}
        wire.clear();
        block_on(display.flush()).unwrap();
        assert_eq!(ramwr_count(&wire), 1);
        assert!(wire.last_pixels(cmd::RAMWR).iter().all(|p| *p == BG.0));
    }

    #[test]
    fn test_print_replaces_non_ascii_run() {
        let wire = Wire::new();
        let mut display = display(&wire, SMALL, Rotation::Deg0);
        display.set_text_area(0, 0, 135, Justify::Left, FG, BG);

        block_on(display.print_bytes(&[0x41, 0xc3, 0xa9, 0xc3, 0xa9, 0x42])).unwrap();
        let raw = wire.last_pixels(cmd::RAMWR);

        wire.clear();
        block_on(display.print("A#B")).unwrap();
        assert_eq!(wire.last_pixels(cmd::RAMWR), raw);
        assert!(raw.contains(&FG.0));
    }

    #[test]
    fn test_print_justification() {
        let wire = Wire::new();
        let mut display = display(&wire, HardwareExtent::new(240, 320, true), Rotation::Deg0);
        let a = DEFAULT.glyph(b'A');

        // "AAAA" is 112 pixels wide in the default tier
        for (justify, start) in [(Justify::Left, 0), (Justify::Center, 44), (Justify::Right, 88)] {
            display.set_text_area(0, 0, 200, justify, FG, BG);
            wire.clear();
            block_on(display.print("AAAA")).unwrap();

            let columns = ink_columns(&wire.last_pixels(cmd::RAMWR), 200);
            let first = start + a.x_start as usize;
            assert_eq!(columns.first(), Some(&first));
            assert_eq!(display.text_area().cursor, 0);
        }
    }

    #[test]
    fn test_print_trailing_spaces_ignored() {
        let wire = Wire::new();
        let mut display = display(&wire, SMALL, Rotation::Deg0);
        display.set_text_area(0, 0, 135, Justify::Right, FG, BG);

        block_on(display.print("AB")).unwrap();
        let expected = wire.last_pixels(cmd::RAMWR);

        wire.clear();
        block_on(display.print("AB     ")).unwrap();
        assert_eq!(wire.last_pixels(cmd::RAMWR), expected);
    }

    #[test]
    fn test_print_overflow_cuts_line() {
        let wire = Wire::new();
        let mut display = display(&wire, SMALL, Rotation::Deg0);
        // "AAAA" needs 72 pixels even in the smallest tier; 18 per glyph
        display.set_text_area(0, 0, 70, Justify::Right, FG, BG);

        block_on(display.print("AAAA")).unwrap();
        let columns = ink_columns(&wire.last_pixels(cmd::RAMWR), 70);
        assert!(columns.iter().any(|x| *x >= 36));
        assert!(columns.iter().all(|x| *x < 54));
    }

    #[test]
    fn test_draw_char_accumulates_until_flush() {
        let wire = Wire::new();
        let mut display = display(&wire, SMALL, Rotation::Deg0);
        display.set_text_area(0, 2, 135, Justify::Left, FG, BG);

        block_on(display.draw_char('H'));
        block_on(display.draw_char('\n'));
        block_on(display.draw_char('i'));
        assert!(wire.events().is_empty());
        assert_eq!(display.text_area().cursor, 30 + 12);

        block_on(display.flush()).unwrap();
        let first = wire.last_pixels(cmd::RAMWR);
        let columns = ink_columns(&first, 135);
        assert!(columns.contains(&3));
        assert!(columns.iter().any(|x| *x >= 30));

        // The cursor survives the flush, the band is not cleared again
        assert_eq!(display.text_area().cursor, 42);
        block_on(display.draw_char('é'));
        block_on(display.flush()).unwrap();
        let second = wire.last_pixels(cmd::RAMWR);
        assert!(ink_columns(&second, 135).iter().any(|x| *x >= 42));
        for (before, after) in first.iter().zip(&second) {
            if *before == FG.0 {
                assert_eq!(*after, FG.0);
            }
        }
    }

    #[test]
    fn test_print_resets_cursor() {
        let wire = Wire::new();
        let mut display = display(&wire, SMALL, Rotation::Deg0);
        display.set_text_area(0, 0, 135, Justify::Left, FG, BG);

        block_on(display.draw_char('H'));
        block_on(display.print("x")).unwrap();
        assert_eq!(display.text_area().cursor, 0);
    }

    #[test]
    fn test_draw_while_busy_waits_for_drain() {
        let wire = Wire::new();
        let mut display = display(&wire, SMALL, Rotation::Deg0);
        display.set_text_area(0, 0, 135, Justify::Left, FG, BG);
        wire.set_busy_polls(10);

        block_on(async {
            display.fill_screen(Rgb565::BLACK).await.unwrap();
            assert!(display.is_busy());
            display.print("1").await.unwrap();
        });

        let events = wire.events();
        let begins: Vec<usize> = events
            .iter()
            .enumerate()
            .filter(|(_, e)| matches!(e, Event::Begin(_)))
            .map(|(i, _)| i)
            .collect();
        let first_end = events.iter().position(|e| *e == Event::End).unwrap();
        assert_eq!(begins.len(), 2);
        assert!(begins[0] < first_end && first_end < begins[1]);
        assert_eq!(events[first_end + 1], Event::Cs(true));
    }

    #[test]
    fn test_print_float() {
        let wire = Wire::new();
        let mut display = display(&wire, SMALL, Rotation::Deg0);
        display.set_text_area(0, 0, 135, Justify::Center, FG, BG);

        block_on(display.print("3.14")).unwrap();
        let expected = wire.last_pixels(cmd::RAMWR);

        wire.clear();
        block_on(display.print_float(3.14159, 2)).unwrap();
        assert_eq!(wire.last_pixels(cmd::RAMWR), expected);
    }

    #[test]
    fn test_print_float_overlong() {
        let wire = Wire::new();
        let mut display = display(&wire, HardwareExtent::new(240, 320, true), Rotation::Deg0);
        display.set_text_area(0, 0, 240, Justify::Right, FG, BG);

        block_on(display.print("1000000015047466219876688855040")).unwrap();
        let expected = wire.last_pixels(cmd::RAMWR);

        while display.poll() == TransferState::InFlight {}
        wire.clear();
        block_on(display.print_float(1e30, 2)).unwrap();
        assert_eq!(wire.last_pixels(cmd::RAMWR), expected);
    }

    #[test]
    fn test_rotation_cycle_restores_extent() {
        let wire = Wire::new();
        let mut display = display(&wire, SMALL, Rotation::Deg0);
        let start = *display.visible();

        let mut rotation = Rotation::Deg0;
        let mut seen = Vec::new();
        for _ in 0..4 {
            rotation = rotation.next();
            block_on(display.reset(rotation, BG)).unwrap();
            assert_eq!(display.rotation(), rotation);
            seen.push(*display.visible());
        }

        assert_eq!(seen[3], start);
        assert_eq!((seen[0].width, seen[0].height), (start.height, start.width));
        assert_eq!((seen[1].width, seen[1].height), (start.width, start.height));
        assert_ne!(seen[0], seen[2]);
    }

    #[test]
    fn test_text_area_limits() {
        let wire = Wire::new();
        let mut display = display(&wire, SMALL, Rotation::Deg0);

        display.set_text_area(0, 0, 1000, Justify::Left, FG, BG);
        assert_eq!(display.text_area().width, 240);

        display.set_color(Rgb565::RED);
        assert_eq!(display.text_area().foreground, Rgb565::RED);

        // A band below the screen sends nothing
        display.set_text_area(0, 4, 135, Justify::Left, FG, BG);
        block_on(display.print("x")).unwrap();
        assert!(wire.events().iter().all(|e| *e != Event::Write(Vec::from([cmd::RAMWR]))));
        assert_eq!(display.state(), TransferState::Idle);
    }

    #[test]
    fn test_band_overhanging_edge() {
        let wire = Wire::new();
        let mut display = display(&wire, SMALL, Rotation::Deg0);
        display.set_text_area(100, 0, 100, Justify::Left, FG, BG);

        block_on(display.print("")).unwrap();
        assert_eq!(wire.commands()[0].data, [0, 152, 0, 186]);
        assert_eq!(wire.last_pixels(cmd::RAMWR).len(), 35 * 60);
    }

    #[test]
    fn test_overhanging_band_streams_draw_char() {
        let wire = Wire::new();
        let mut display = display(&wire, SMALL, Rotation::Deg0);
        display.set_text_area(100, 0, 100, Justify::Left, FG, BG);

        block_on(display.draw_char('I'));
        block_on(display.flush()).unwrap();
        let first = wire.last_pixels(cmd::RAMWR);
        assert_eq!(first.len(), 35 * 60);
        assert!(first.contains(&FG.0));

        while display.poll() == TransferState::InFlight {}
        wire.clear();
        block_on(display.flush()).unwrap();
        assert_eq!(wire.last_pixels(cmd::RAMWR), first);

        // Glyphs running past the edge are clipped, earlier ink stays
        while display.poll() == TransferState::InFlight {}
        wire.clear();
        block_on(display.draw_char('W'));
        block_on(display.draw_char('W'));
        block_on(display.flush()).unwrap();
        let third = wire.last_pixels(cmd::RAMWR);
        assert_eq!(third.len(), 35 * 60);
        for (before, after) in first.iter().zip(&third) {
            if *before == FG.0 {
                assert_eq!(*after, FG.0);
            }
        }
    }

    #[test]
    fn test_with_panel_power() {
        let wire = Wire::new();
        let mut display = display(&wire, SMALL, Rotation::Deg0);

        block_on(display.with_panel(|panel, link| panel.set_enabled(link, false))).unwrap();
        assert_eq!(wire.opcodes(), [cmd::DISPOFF]);
        assert_eq!(wire.events().last(), Some(&Event::Cs(true)));
        assert_eq!(display.state(), TransferState::Idle);
    }

    #[test]
    fn test_panel_by_reference() {
        let wire = Wire::new();
        let config = DisplayConfig::st7789(SMALL);
        let mut panel = St7789::new();
        let mut display = Display::new(
            config,
            &mut panel,
            interface(&wire),
            mock::leak(config.line_buffer_len()),
        )
        .unwrap();

        block_on(display.reset(Rotation::Deg180, BG)).unwrap();
        assert_eq!(display.visible().x_start, 53);
        assert_eq!(St7789::NATIVE, Extent::new(240, 320));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_fill_sends_every_pixel(
            x in 0u16..240,
            y in 0u16..320,
            width in 1u16..=240,
            height in 1u16..=320,
        ) {
            let wire = Wire::new();
            let mut display = display(&wire, HardwareExtent::new(240, 320, true), Rotation::Deg0);
            let width = width.min(240 - x);
            let height = height.min(320 - y);

            block_on(display.fill_rectangle(x, y, width, height, Rgb565::MAGENTA)).unwrap();

            let pixels = wire.last_pixels(cmd::RAMWR);
            prop_assert_eq!(pixels.len(), usize::from(width) * usize::from(height));
            prop_assert!(pixels.iter().all(|p| *p == Rgb565::MAGENTA.0));

            let capacity = 320 * 60 * 2;
            let writes = wire.pixel_writes(cmd::RAMWR);
            prop_assert!(writes.iter().all(|w| *w <= capacity));
            prop_assert!(writes.iter().rev().skip(1).all(|w| *w == writes[0]));
        }
    }
}

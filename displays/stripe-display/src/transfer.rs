//! Bus ownership and the asynchronous transfer state machine
//!
//! ```text
//!            begin()                 submit()
//!   Idle ─────────────► Transaction ─────────► InFlight
//!    ▲                      │                     │
//!    │     finish() / drop  │                     │ poll(): queue drained
//!    └──────────────────────┴─────────────────────┘
//! ```
//!
//! The engine owns the line buffer. While a submission is in flight the
//! buffer is still being clocked out, so it is only handed out again after
//! [`TransferEngine::poll`] observed the queue drained.

use embassy_futures::yield_now;
use embedded_hal::delay::DelayNs;
use stripe_hal::{OutputPin, SpiBus, SpiConfig};

use crate::backend::{CommandLink, DisplayError};

/// Transfer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferState {
    /// No session open, the buffer is free
    Idle,
    /// A submitted pixel write is still draining
    InFlight,
}

/// Owner of the bus, chip select, data/command line and line buffer
pub struct TransferEngine<'b, BUS, CS, DC, D>
where
    BUS: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    D: DelayNs,
{
    bus: BUS,
    cs: CS,
    dc: DC,
    delay: D,
    config: SpiConfig,
    buffer: &'b mut [u8],
    state: TransferState,
}

impl<'b, BUS, CS, DC, D> TransferEngine<'b, BUS, CS, DC, D>
where
    BUS: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    D: DelayNs,
{
    /// Create an idle engine
    pub fn new(bus: BUS, cs: CS, dc: DC, delay: D, buffer: &'b mut [u8], config: SpiConfig) -> Self {
        Self {
            bus,
            cs,
            dc,
            delay,
            config,
            buffer,
            state: TransferState::Idle,
        }
    }

    /// Drive the control lines to their idle levels
    pub fn release_lines(&mut self) {
        self.cs.set_high();
        self.dc.set_high();
    }

    /// Current state, without polling the bus
    pub fn state(&self) -> TransferState {
        self.state
    }

    /// Whether a submission is in flight
    pub fn is_busy(&self) -> bool {
        self.state == TransferState::InFlight
    }

    /// Line buffer size in pixels
    pub fn capacity(&self) -> usize {
        self.buffer.len() / 2
    }

    /// Advance the state machine without blocking
    ///
    /// Ends the session of a drained submission and returns to idle.
    pub fn poll(&mut self) -> TransferState {
        if self.state == TransferState::InFlight && !self.bus.is_busy() {
            self.close();
            self.state = TransferState::Idle;

            #[cfg(feature = "defmt")]
            defmt::trace!("transfer: drained");
        }
        self.state
    }

    /// Yield until the previous submission drained
    pub async fn wait_idle(&mut self) {
        while self.poll() == TransferState::InFlight {
            yield_now().await;
        }
    }

    /// The line buffer, once no submission is reading it
    pub async fn idle_buffer(&mut self) -> &mut [u8] {
        self.wait_idle().await;
        &mut *self.buffer
    }

    /// Open a bus session, after the previous submission drained
    pub async fn begin(&mut self) -> Transaction<'_, 'b, BUS, CS, DC, D> {
        self.wait_idle().await;
        self.bus.begin_transaction(&self.config);
        self.cs.set_low();

        #[cfg(feature = "defmt")]
        defmt::trace!("transfer: session open");

        Transaction {
            engine: self,
            submitted: false,
        }
    }

    /// Pulse the controller's reset line
    ///
    /// The device is selected in data mode for the pulse.
    pub async fn hardware_reset<RST: OutputPin>(&mut self, rst: &mut RST) {
        self.wait_idle().await;

        self.cs.set_low();
        self.dc.set_high();
        rst.set_low();
        self.delay.delay_ms(1);
        rst.set_high();
        self.delay.delay_ms(5);
    }

    fn close(&mut self) {
        self.bus.flush();
        self.bus.end_transaction();
        self.cs.set_high();
    }
}

/// An open bus session with exclusive access to the line buffer
///
/// Dropping the transaction ends the session synchronously, unless it was
/// handed to the background with [`submit`](Self::submit).
pub struct Transaction<'t, 'b, BUS, CS, DC, D>
where
    BUS: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    D: DelayNs,
{
    engine: &'t mut TransferEngine<'b, BUS, CS, DC, D>,
    submitted: bool,
}

impl<BUS, CS, DC, D> Transaction<'_, '_, BUS, CS, DC, D>
where
    BUS: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    D: DelayNs,
{
    /// The line buffer
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut *self.engine.buffer
    }

    /// Line buffer size in pixels
    pub fn capacity(&self) -> usize {
        self.engine.capacity()
    }

    /// Queue the first `len` bytes of the line buffer in data mode
    ///
    /// Returns when the bus accepted every byte.
    pub fn write_pixels(&mut self, len: usize) -> Result<(), DisplayError> {
        let engine = &mut *self.engine;
        let len = len.min(engine.buffer.len());

        engine.bus.flush();
        engine
            .bus
            .write(&engine.buffer[..len])
            .map_err(|_| DisplayError::Communication)
    }

    /// End the session, waiting for the queue to drain
    pub fn finish(self) {}

    /// Leave the queued pixels draining in the background
    ///
    /// The session stays open until [`TransferEngine::poll`] sees the bus
    /// idle.
    pub fn submit(mut self) {
        self.submitted = true;
        self.engine.state = TransferState::InFlight;

        #[cfg(feature = "defmt")]
        defmt::trace!("transfer: submitted");
    }
}

impl<BUS, CS, DC, D> CommandLink for Transaction<'_, '_, BUS, CS, DC, D>
where
    BUS: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    D: DelayNs,
{
    fn write_command(&mut self, command: u8, args: &[u8]) -> Result<(), DisplayError> {
        let engine = &mut *self.engine;

        engine.bus.flush();
        engine.dc.set_low();
        engine
            .bus
            .write(&[command])
            .map_err(|_| DisplayError::Communication)?;
        engine.bus.flush();
        engine.dc.set_high();

        if !args.is_empty() {
            engine
                .bus
                .write(args)
                .map_err(|_| DisplayError::Communication)?;
        }
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) {
        self.engine.bus.flush();
        self.engine.delay.delay_ms(ms);
    }
}

impl<BUS, CS, DC, D> Drop for Transaction<'_, '_, BUS, CS, DC, D>
where
    BUS: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    D: DelayNs,
{
    fn drop(&mut self) {
        if !self.submitted {
            self.engine.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{self, Event, Wire};
    use embassy_futures::block_on;

    fn engine(wire: &Wire, buffer: &'static mut [u8]) -> mock::Engine {
        TransferEngine::new(
            wire.bus(),
            wire.pin(mock::Line::Cs),
            wire.pin(mock::Line::Dc),
            wire.delay(),
            buffer,
            SpiConfig::default(),
        )
    }

    #[test]
    fn test_command_framing() {
        let wire = Wire::new();
        let mut engine = engine(&wire, mock::leak(8));

        block_on(async {
            let mut tx = engine.begin().await;
            tx.write_command(0x3a, &[0x55]).unwrap();
            tx.write_command(0x29, &[]).unwrap();
            tx.finish();
        });

        assert_eq!(
            wire.events(),
            vec![
                Event::Begin(SpiConfig::default()),
                Event::Cs(false),
                Event::Dc(false),
                Event::Write(vec![0x3a]),
                Event::Dc(true),
                Event::Write(vec![0x55]),
                Event::Dc(false),
                Event::Write(vec![0x29]),
                Event::Dc(true),
                Event::End,
                Event::Cs(true),
            ]
        );
        assert_eq!(engine.state(), TransferState::Idle);
    }

    #[test]
    fn test_submit_stays_open_until_drained() {
        let wire = Wire::new();
        wire.set_busy_polls(3);
        let mut engine = engine(&wire, mock::leak(8));

        block_on(async {
            let mut tx = engine.begin().await;
            tx.buffer_mut().fill(0xab);
            tx.write_pixels(4).unwrap();
            tx.submit();
        });

        assert_eq!(engine.state(), TransferState::InFlight);
        assert!(!wire.events().contains(&Event::End));

        assert_eq!(engine.poll(), TransferState::InFlight);
        assert_eq!(engine.poll(), TransferState::InFlight);
        assert_eq!(engine.poll(), TransferState::InFlight);
        assert_eq!(engine.poll(), TransferState::Idle);

        let events = wire.events();
        assert_eq!(&events[events.len() - 2..], &[Event::End, Event::Cs(true)]);
        assert!(events.contains(&Event::Write(vec![0xab; 4])));
    }

    #[test]
    fn test_begin_waits_for_previous_submission() {
        let wire = Wire::new();
        wire.set_busy_polls(5);
        let mut engine = engine(&wire, mock::leak(4));

        block_on(async {
            let mut tx = engine.begin().await;
            tx.write_pixels(4).unwrap();
            tx.submit();

            // The second session opens only after the first one ended
            let tx = engine.begin().await;
            tx.finish();
        });

        let events = wire.events();
        let first_end = events.iter().position(|e| *e == Event::End).unwrap();
        let second_begin = events
            .iter()
            .rposition(|e| matches!(e, Event::Begin(_)))
            .unwrap();
        assert!(first_end < second_begin);
        assert_eq!(engine.state(), TransferState::Idle);
    }

    #[test]
    fn test_bus_error_releases_session() {
        let wire = Wire::new();
        wire.fail_writes(true);
        let mut engine = engine(&wire, mock::leak(4));

        let result = block_on(async {
            let mut tx = engine.begin().await;
            tx.write_pixels(4)
        });

        assert_eq!(result, Err(DisplayError::Communication));
        assert_eq!(engine.state(), TransferState::Idle);
        assert_eq!(wire.events().last(), Some(&Event::Cs(true)));
    }

    #[test]
    fn test_write_pixels_is_bounded_by_buffer() {
        let wire = Wire::new();
        let mut engine = engine(&wire, mock::leak(4));

        block_on(async {
            let mut tx = engine.begin().await;
            tx.write_pixels(100).unwrap();
        });

        assert_eq!(wire.data_bytes(), 4);
    }

    #[test]
    fn test_hardware_reset_pulse() {
        let wire = Wire::new();
        let mut engine = engine(&wire, mock::leak(4));
        let mut rst = wire.pin(mock::Line::Rst);

        block_on(engine.hardware_reset(&mut rst));

        assert_eq!(
            wire.events(),
            vec![
                Event::Cs(false),
                Event::Dc(true),
                Event::Rst(false),
                Event::DelayNs(1_000_000),
                Event::Rst(true),
                Event::DelayNs(5_000_000),
            ]
        );
    }
}

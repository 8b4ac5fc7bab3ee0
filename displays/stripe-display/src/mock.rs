//! Recording peripherals for unit tests
//!
//! Every peripheral shares one [`Wire`] log, so tests can assert on the
//! exact interleaving of pin changes, bus writes and delays.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use stripe_hal::{OutputPin, SpiBus, SpiConfig};

use crate::transfer::TransferEngine;

pub type Engine = TransferEngine<'static, MockBus, MockPin, MockPin, MockDelay>;

/// Everything a peripheral did, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Begin(SpiConfig),
    End,
    Cs(bool),
    Dc(bool),
    Rst(bool),
    Write(Vec<u8>),
    DelayNs(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Cs,
    Dc,
    Rst,
}

/// One command as seen by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub opcode: u8,
    pub data: Vec<u8>,
}

#[derive(Default)]
struct State {
    events: Vec<Event>,
    busy_polls: u32,
    busy_remaining: u32,
    fail_writes: bool,
}

/// Shared log behind the mock peripherals
#[derive(Clone, Default)]
pub struct Wire(Rc<RefCell<State>>);

impl Wire {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bus(&self) -> MockBus {
        MockBus(self.clone())
    }

    pub fn pin(&self, line: Line) -> MockPin {
        MockPin {
            wire: self.clone(),
            line,
        }
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay(self.clone())
    }

    /// Number of `is_busy` polls answered `true` after each write
    pub fn set_busy_polls(&self, polls: u32) {
        self.0.borrow_mut().busy_polls = polls;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.0.borrow_mut().fail_writes = fail;
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().events.clear();
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().events.push(event);
    }

    /// Bytes written while the data/command line was high
    pub fn data_bytes(&self) -> usize {
        let mut dc = true;
        let mut count = 0;
        for event in self.events() {
            match event {
                Event::Dc(level) => dc = level,
                Event::Write(bytes) if dc => count += bytes.len(),
                _ => {}
            }
        }
        count
    }

    /// Decode the log into commands with their data bytes
    pub fn commands(&self) -> Vec<Command> {
        let mut dc = true;
        let mut commands: Vec<Command> = Vec::new();
        for event in self.events() {
            match event {
                Event::Dc(level) => dc = level,
                Event::Write(bytes) if !dc => {
                    for opcode in bytes {
                        commands.push(Command {
                            opcode,
                            data: Vec::new(),
                        });
                    }
                }
                Event::Write(bytes) => {
                    if let Some(last) = commands.last_mut() {
                        last.data.extend_from_slice(&bytes);
                    }
                }
                _ => {}
            }
        }
        commands
    }

    /// Opcodes only
    pub fn opcodes(&self) -> Vec<u8> {
        self.commands().iter().map(|c| c.opcode).collect()
    }

    /// Pixels sent after the last memory write command, as RGB565 values
    pub fn last_pixels(&self, ramwr: u8) -> Vec<u16> {
        self.commands()
            .iter()
            .rev()
            .find(|c| c.opcode == ramwr)
            .map(|c| {
                c.data
                    .chunks_exact(2)
                    .map(|p| u16::from_be_bytes([p[0], p[1]]))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Sizes of the individual writes that carried pixel data
    pub fn pixel_writes(&self, ramwr: u8) -> Vec<usize> {
        let mut dc = true;
        let mut in_pixels = false;
        let mut sizes = Vec::new();
        for event in self.events() {
            match event {
                Event::Dc(level) => dc = level,
                Event::Write(bytes) if !dc => in_pixels = bytes == [ramwr],
                Event::Write(bytes) if in_pixels => sizes.push(bytes.len()),
                _ => {}
            }
        }
        sizes
    }
}

pub struct MockBus(Wire);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl SpiBus for MockBus {
    type Error = MockError;

    fn begin_transaction(&mut self, config: &SpiConfig) {
        self.0.push(Event::Begin(*config));
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let mut state = self.0 .0.borrow_mut();
        if state.fail_writes {
            return Err(MockError);
        }
        state.events.push(Event::Write(data.to_vec()));
        state.busy_remaining = state.busy_polls;
        Ok(())
    }

    fn is_busy(&mut self) -> bool {
        let mut state = self.0 .0.borrow_mut();
        if state.busy_remaining > 0 {
            state.busy_remaining -= 1;
            true
        } else {
            false
        }
    }

    fn end_transaction(&mut self) {
        self.0.push(Event::End);
    }
}

pub struct MockPin {
    wire: Wire,
    line: Line,
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.set_state(true);
    }

    fn set_low(&mut self) {
        self.set_state(false);
    }

    fn set_state(&mut self, high: bool) {
        self.wire.push(match self.line {
            Line::Cs => Event::Cs(high),
            Line::Dc => Event::Dc(high),
            Line::Rst => Event::Rst(high),
        });
    }
}

pub struct MockDelay(Wire);

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.push(Event::DelayNs(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.delay_ns(us.saturating_mul(1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay_ns(ms.saturating_mul(1_000_000));
    }
}

/// A zeroed line buffer that lives for the rest of the test
pub fn leak(len: usize) -> &'static mut [u8] {
    vec![0u8; len].leak()
}

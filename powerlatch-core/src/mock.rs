//! Mock hardware shared by the unit tests
//!
//! Every mock appends to one trace so tests can assert on the order of
//! side effects across the rail, the clock and the auxiliary hooks.

use core::cell::RefCell;

use heapless::Vec;
use powerlatch_hal::{PeripheralClock, RetainedWord};

use crate::traits::{AuxiliaryShutdown, ModulePower, PowerRailControl};

/// A recorded hardware side effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    ClockEnable,
    Wait(u32),
    Configure,
    ConfigureOutput,
    Energize,
    Release,
    Aux(&'static str),
    AuxIdle(&'static str),
    ModulesOff,
    Write(u32),
}

pub struct Trace(RefCell<Vec<Op, 32>>);

impl Trace {
    pub fn new() -> Self {
        Self(RefCell::new(Vec::new()))
    }

    pub fn push(&self, op: Op) {
        self.0.borrow_mut().push(op).ok();
    }

    pub fn ops(&self) -> Vec<Op, 32> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn position(&self, op: Op) -> Option<usize> {
        self.0.borrow().iter().position(|o| *o == op)
    }
}

/// Rail mock with a latched output level and a settable button
pub struct MockRail<'a> {
    trace: &'a Trace,
    pub energized: bool,
    pub output_configured: bool,
    pub button_pressed: bool,
}

impl<'a> MockRail<'a> {
    /// Rail straight out of a hardware reset: unconfigured, latch low
    pub fn new(trace: &'a Trace) -> Self {
        Self {
            trace,
            energized: false,
            output_configured: false,
            button_pressed: false,
        }
    }
}

impl PowerRailControl for MockRail<'_> {
    fn configure(&mut self) {
        self.trace.push(Op::Configure);
        self.output_configured = true;
    }

    fn configure_output(&mut self) {
        self.trace.push(Op::ConfigureOutput);
        self.output_configured = true;
    }

    fn energize(&mut self) {
        self.trace.push(Op::Energize);
        self.energized = true;
    }

    fn release(&mut self) {
        self.trace.push(Op::Release);
        self.energized = false;
    }

    fn is_energized(&self) -> bool {
        self.energized
    }

    fn is_button_pressed(&self) -> bool {
        self.button_pressed
    }
}

pub struct MockClock<'a> {
    trace: &'a Trace,
}

impl<'a> MockClock<'a> {
    pub fn new(trace: &'a Trace) -> Self {
        Self { trace }
    }
}

impl PeripheralClock for MockClock<'_> {
    fn enable(&mut self) {
        self.trace.push(Op::ClockEnable);
    }

    fn wait_cycles(&mut self, cycles: u32) {
        self.trace.push(Op::Wait(cycles));
    }
}

pub struct MockAux<'a> {
    trace: &'a Trace,
    name: &'static str,
}

impl<'a> MockAux<'a> {
    pub fn new(trace: &'a Trace, name: &'static str) -> Self {
        Self { trace, name }
    }
}

impl AuxiliaryShutdown for MockAux<'_> {
    fn shutdown(&mut self) {
        self.trace.push(Op::Aux(self.name));
    }

    fn idle(&mut self) {
        self.trace.push(Op::AuxIdle(self.name));
    }
}

pub struct MockModules<'a> {
    trace: &'a Trace,
}

impl<'a> MockModules<'a> {
    pub fn new(trace: &'a Trace) -> Self {
        Self { trace }
    }
}

impl ModulePower for MockModules<'_> {
    fn power_off_modules(&mut self) {
        self.trace.push(Op::ModulesOff);
    }
}

/// Retained word that records every write
pub struct TracedWord<'a> {
    trace: &'a Trace,
    value: u32,
}

impl<'a> TracedWord<'a> {
    pub fn new(trace: &'a Trace, value: u32) -> Self {
        Self { trace, value }
    }
}

impl RetainedWord for TracedWord<'_> {
    fn read(&self) -> u32 {
        self.value
    }

    fn write(&mut self, value: u32) {
        self.trace.push(Op::Write(value));
        self.value = value;
    }
}

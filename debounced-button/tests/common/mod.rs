#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use debounced_button::{Clock, DebouncedInput, InputBinding, ToggleInput};
use embedded_hal::digital::{Error, ErrorKind, ErrorType, InputPin};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Manually advanced millisecond clock
#[derive(Default)]
pub struct TestClock {
    now: Cell<u32>,
}

impl TestClock {
    pub fn new(start: u32) -> Self {
        Self { now: Cell::new(start) }
    }

    pub fn set(&self, now: u32) {
        self.now.set(now);
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for TestClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestPinError;

impl Error for TestPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Electrical state of the line, shared between the test and the pin it drives.
#[derive(Default)]
pub struct Line {
    high: Cell<bool>,
    fail_reads: Cell<bool>,
    fail_bind: Cell<bool>,
    pull_up: Cell<Option<bool>>,
    reads: Cell<usize>,
}

impl Line {
    pub fn new(high: bool) -> Rc<Self> {
        let line = Rc::new(Self::default());
        line.set_high(high);
        line
    }

    pub fn set_high(&self, high: bool) {
        self.high.set(high);
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn set_fail_bind(&self, fail: bool) {
        self.fail_bind.set(fail);
    }

    /// Pull-up setting of the last successful bind, `None` if never bound
    pub fn pull_up(&self) -> Option<bool> {
        self.pull_up.get()
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

pub struct TestPin {
    line: Rc<Line>,
}

impl TestPin {
    pub fn new(line: &Rc<Line>) -> Self {
        Self { line: line.clone() }
    }
}

impl ErrorType for TestPin {
    type Error = TestPinError;
}

impl InputPin for TestPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.line.reads.set(self.line.reads.get() + 1);
        if self.line.fail_reads.get() {
            return Err(TestPinError);
        }
        Ok(self.line.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

impl InputBinding for TestPin {
    fn bind_input(&mut self, pull_up: bool) -> Result<(), Self::Error> {
        if self.line.fail_bind.get() {
            return Err(TestPinError);
        }
        self.line.pull_up.set(Some(pull_up));
        Ok(())
    }
}

/// Raw level of the line at a given time
pub struct Segment {
    pub until: u32,
    pub high: bool,
}

/// Drive `line` through `segments`, polling every millisecond from `start` up to the end of the last
/// segment. `on_poll` is called after each poll with the current time.
pub fn run_button(
    button: &mut DebouncedInput<TestPin>,
    line: &Line,
    clock: &TestClock,
    start: u32,
    segments: &[Segment],
    mut on_poll: impl FnMut(u32, &DebouncedInput<TestPin>),
) {
    let mut t = start;
    for segment in segments {
        while t < segment.until {
            clock.set(t);
            line.set_high(segment.high);
            button.poll(clock);
            on_poll(t, button);
            t += 1;
        }
    }
}

/// Same as [`run_button`] for a toggle button
pub fn run_toggle(
    toggle: &mut ToggleInput<TestPin>,
    line: &Line,
    clock: &TestClock,
    start: u32,
    segments: &[Segment],
    mut on_poll: impl FnMut(u32, &ToggleInput<TestPin>),
) {
    let mut t = start;
    for segment in segments {
        while t < segment.until {
            clock.set(t);
            line.set_high(segment.high);
            toggle.poll(clock);
            on_poll(t, toggle);
            t += 1;
        }
    }
}

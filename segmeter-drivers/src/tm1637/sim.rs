//! Simulated TM1637 bus for host tests
//!
//! Both lines share one [`Wire`]. The wire resolves open-drain levels,
//! records timing, and runs a receiver that decodes start/stop framing and
//! LSB-first bytes the way the display chip does.

use core::cell::RefCell;

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use segmeter_hal::OpenDrainLine;

pub type Frame = Vec<u8, 8>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Clk,
    Dio,
}

pub struct Wire {
    clk_driven: bool,
    dio_driven: bool,
    /// Receiver holding DIO low for an ack
    device_pull: bool,
    /// Whether the simulated display acknowledges bytes
    acks: bool,
    now_ns: u64,
    in_frame: bool,
    bits: u8,
    shift: u8,
    current: Frame,
    pub frames: Vec<Frame, 16>,
    pub clk_edges_ns: Vec<u64, 2048>,
    pub waits_ns: Vec<u32, 2048>,
    pub acks_sent: usize,
    /// Per byte: whether the master held DIO low when the ack clock fell
    pub master_dio_low_after_ack: Vec<bool, 64>,
}

impl Wire {
    pub fn new(acks: bool) -> Self {
        Self {
            clk_driven: false,
            dio_driven: false,
            device_pull: false,
            acks,
            now_ns: 0,
            in_frame: false,
            bits: 0,
            shift: 0,
            current: Vec::new(),
            frames: Vec::new(),
            clk_edges_ns: Vec::new(),
            waits_ns: Vec::new(),
            acks_sent: 0,
            master_dio_low_after_ack: Vec::new(),
        }
    }

    pub fn clk(&self) -> bool {
        !self.clk_driven
    }

    pub fn dio(&self) -> bool {
        !(self.dio_driven || self.device_pull)
    }

    pub fn elapsed_us(&self) -> u64 {
        self.now_ns / 1_000
    }

    /// Decoded frames as plain slices
    pub fn frame(&self, index: usize) -> &[u8] {
        &self.frames[index]
    }

    fn set_driven(&mut self, line: Line, driven: bool) {
        let (clk_before, dio_before) = (self.clk(), self.dio());
        match line {
            Line::Clk => self.clk_driven = driven,
            Line::Dio => self.dio_driven = driven,
        }

        let clk = self.clk();
        if clk != clk_before {
            self.clk_edges_ns.push(self.now_ns).unwrap();
            if clk {
                self.clock_rise();
            } else {
                self.clock_fall();
            }
        }

        let dio = self.dio();
        if dio != dio_before && clk {
            if dio {
                self.stop();
            } else {
                self.start();
            }
        }
    }

    fn start(&mut self) {
        self.in_frame = true;
        self.bits = 0;
        self.shift = 0;
        self.current.clear();
    }

    fn stop(&mut self) {
        if self.in_frame {
            // Any partial byte clocked in before the stop is discarded
            self.frames.push(self.current.clone()).unwrap();
            self.in_frame = false;
        }
    }

    fn clock_rise(&mut self) {
        if !self.in_frame {
            return;
        }
        if self.bits < 8 {
            if self.dio() {
                self.shift |= 1 << self.bits;
            }
            self.bits += 1;
            if self.bits == 8 {
                self.current.push(self.shift).unwrap();
            }
        } else if self.bits == 8 {
            // Ack clock
            self.bits = 9;
        }
    }

    fn clock_fall(&mut self) {
        if !self.in_frame {
            return;
        }
        if self.bits == 8 && self.acks {
            self.device_pull = true;
            self.acks_sent += 1;
        } else if self.bits == 9 {
            self.master_dio_low_after_ack.push(self.dio_driven).unwrap();
            self.device_pull = false;
            self.bits = 0;
            self.shift = 0;
        }
    }
}

pub struct SimLine<'a> {
    wire: &'a RefCell<Wire>,
    line: Line,
}

impl<'a> SimLine<'a> {
    pub fn clk(wire: &'a RefCell<Wire>) -> Self {
        Self {
            wire,
            line: Line::Clk,
        }
    }

    pub fn dio(wire: &'a RefCell<Wire>) -> Self {
        Self {
            wire,
            line: Line::Dio,
        }
    }
}

impl OpenDrainLine for SimLine<'_> {
    fn drive_low(&mut self) {
        self.wire.borrow_mut().set_driven(self.line, true);
    }

    fn release(&mut self) {
        self.wire.borrow_mut().set_driven(self.line, false);
    }

    fn is_high(&self) -> bool {
        let wire = self.wire.borrow();
        match self.line {
            Line::Clk => wire.clk(),
            Line::Dio => wire.dio(),
        }
    }
}

pub struct SimDelay<'a> {
    wire: &'a RefCell<Wire>,
}

impl<'a> SimDelay<'a> {
    pub fn new(wire: &'a RefCell<Wire>) -> Self {
        Self { wire }
    }
}

impl DelayNs for SimDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        let mut wire = self.wire.borrow_mut();
        wire.now_ns += ns as u64;
        wire.waits_ns.push(ns).unwrap();
    }
}

pub type SimBus<'a> = super::Tm1637Bus<SimLine<'a>, SimLine<'a>, SimDelay<'a>>;

/// Bus wired to `wire`
pub fn sim_bus(wire: &RefCell<Wire>) -> SimBus<'_> {
    super::Tm1637Bus::new(SimLine::clk(wire), SimLine::dio(wire), SimDelay::new(wire))
}

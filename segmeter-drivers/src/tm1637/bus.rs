//! TM1637 bus protocol engine
//!
//! Frames start/stop conditions and byte transfers using only the
//! drive-low/release capability of two open-drain lines.

use core::ops::AddAssign;

use embedded_hal::delay::DelayNs;
use segmeter_hal::OpenDrainLine;

use super::BIT_DELAY_US;

/// Outcome of one or more framed transfers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameStatus {
    /// Bytes clocked out
    pub sent: u8,
    /// Bytes the display did not acknowledge
    pub missed_acks: u8,
}

impl FrameStatus {
    /// True if every byte was acknowledged
    pub fn is_acknowledged(&self) -> bool {
        self.missed_acks == 0
    }

    fn record(&mut self, acked: bool) {
        self.sent = self.sent.saturating_add(1);
        if !acked {
            self.missed_acks = self.missed_acks.saturating_add(1);
        }
    }
}

impl AddAssign for FrameStatus {
    fn add_assign(&mut self, rhs: Self) {
        self.sent = self.sent.saturating_add(rhs.sent);
        self.missed_acks = self.missed_acks.saturating_add(rhs.missed_acks);
    }
}

/// Bit-banged TM1637 master
///
/// Lines idle released (high). Every transition is followed by a
/// [`BIT_DELAY_US`] busy-wait.
pub struct Tm1637Bus<CLK, DIO, D> {
    clk: CLK,
    dio: DIO,
    delay: D,
}

impl<CLK, DIO, D> Tm1637Bus<CLK, DIO, D>
where
    CLK: OpenDrainLine,
    DIO: OpenDrainLine,
    D: DelayNs,
{
    /// Create a bus and release both lines to idle
    pub fn new(clk: CLK, dio: DIO, delay: D) -> Self {
        let mut bus = Self { clk, dio, delay };
        bus.clk.release();
        bus.dio.release();
        bus
    }

    fn settle(&mut self) {
        self.delay.delay_us(BIT_DELAY_US);
    }

    /// Start condition: DIO falls while CLK is released
    pub fn start(&mut self) {
        self.dio.drive_low();
        self.settle();
    }

    /// Stop condition: DIO rises while CLK is released
    ///
    /// Leaves both lines released.
    pub fn stop(&mut self) {
        self.dio.drive_low();
        self.settle();
        self.clk.release();
        self.settle();
        self.dio.release();
        self.settle();
    }

    /// Clock out one byte, LSB first, and sample the ack slot
    ///
    /// Returns `true` if the display pulled DIO low during the ack clock.
    /// A missing ack is only reported; the transfer is not repeated.
    pub fn write_byte(&mut self, byte: u8) -> bool {
        let mut bits = byte;
        for _ in 0..8 {
            self.clk.drive_low();
            self.settle();

            if bits & 0x01 != 0 {
                self.dio.release();
            } else {
                self.dio.drive_low();
            }
            self.settle();

            bits >>= 1;
            self.clk.release();
            self.settle();
        }

        // Ack slot: hand DIO to the display for one clock
        self.clk.drive_low();
        self.dio.release();
        self.settle();

        self.clk.release();
        self.settle();

        let acked = self.dio.is_low();
        if acked {
            // Keep DIO low once the display lets go of it
            self.dio.drive_low();
        }
        self.settle();

        self.clk.drive_low();
        self.settle();

        acked
    }

    /// Write one command group bracketed by start and stop
    pub fn write_frame<I>(&mut self, bytes: I) -> FrameStatus
    where
        I: IntoIterator<Item = u8>,
    {
        let mut status = FrameStatus::default();

        self.start();
        for byte in bytes {
            let acked = self.write_byte(byte);
            if !acked {
                #[cfg(feature = "defmt")]
                defmt::warn!("TM1637: no ack for byte {=u8:#x}", byte);
            }
            status.record(acked);
        }
        self.stop();

        status
    }

    /// Write one command group from a byte slice
    pub fn write_command(&mut self, bytes: &[u8]) -> FrameStatus {
        self.write_frame(bytes.iter().copied())
    }
}

//! Recording doubles for the LED and bootloader collaborators.

use crate::actuator::{LedChannel, LedDriver};
use crate::control::dispatch::Bootloader;

/// Remembers the last level per channel and every write in order.
#[derive(Default)]
pub struct RecordingLeds {
    pub red: Option<u8>,
    pub green: Option<u8>,
    pub blue: Option<u8>,
    pub writes: std::vec::Vec<(LedChannel, u8)>,
}

impl LedDriver for RecordingLeds {
    fn set_level(&mut self, channel: LedChannel, level: u8) {
        match channel {
            LedChannel::Red => self.red = Some(level),
            LedChannel::Green => self.green = Some(level),
            LedChannel::Blue => self.blue = Some(level),
        }
        self.writes.push((channel, level));
    }
}

#[derive(Default)]
pub struct RecordingBootloader {
    pub reboots: usize,
}

impl Bootloader for RecordingBootloader {
    fn reboot_to_usb_boot(&mut self) {
        self.reboots += 1;
    }
}

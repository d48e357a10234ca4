//! Controller command definitions
//!
//! Command and data bytes understood by the controller IC on the E0213A367
//! panel. Commands are sent over SPI with the DC pin low, data with DC high.
//!
//! ## Example
//!
//! ```rust,no_run
//! use e0213a367::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::{InputPin, OutputPin};
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl InputPin for MockPin {
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! # }
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! // Border waveform for a full refresh
//! let _ = interface.send_command(command::BORDER_WAVEFORM);
//! let _ = interface.send_data(&[command::BORDER_WAVEFORM_FULL]);
//! ```

// System control commands

/// Soft reset command (0x12)
///
/// Resets the controller registers. BUSY is high until the reset completes.
pub const SOFT_RESET: u8 = 0x12;

/// Deep sleep command (0x10)
///
/// Requires 1 byte, see [`DeepSleepMode`](crate::DeepSleepMode).
/// Only a hardware reset wakes the controller.
pub const DEEP_SLEEP: u8 = 0x10;

// RAM addressing commands

/// Data entry mode command (0x11)
///
/// Controls the address counter auto-increment direction.
/// Requires 1 byte:
/// - Bit 0 (ID0): X direction (0=decrement, 1=increment)
/// - Bit 1 (ID1): Y direction (0=decrement, 1=increment)
/// - Bit 2 (AM): Address counter direction (0=X, 1=Y)
pub const DATA_ENTRY_MODE: u8 = 0x11;

/// Data entry mode value: left to right, then top to bottom
pub const DATA_ENTRY_X_INC_Y_INC: u8 = 0x03;

/// Set RAM X address range command (0x44)
///
/// Requires 2 bytes on this panel: [start, end], in byte (8 column) units.
pub const SET_RAM_X_RANGE: u8 = 0x44;

/// Set RAM Y address range command (0x45)
///
/// Requires 2 bytes on this panel: [start, end], in rows.
pub const SET_RAM_Y_RANGE: u8 = 0x45;

/// Set RAM X address counter command (0x4E)
pub const SET_RAM_X_COUNTER: u8 = 0x4E;

/// Set RAM Y address counter command (0x4F)
pub const SET_RAM_Y_COUNTER: u8 = 0x4F;

/// Write to BW RAM command (0x24)
///
/// Bit=0: Black, Bit=1: White. Data is written at the RAM cursor and
/// advances through the window set by [`SET_RAM_X_RANGE`] / [`SET_RAM_Y_RANGE`].
pub const WRITE_RAM_BW: u8 = 0x24;

// Waveform selection commands

/// Write register for display option (0x37)
///
/// Selects which of the pre-programmed OTP waveforms are used. The payload
/// is undocumented by the vendor; see [`DISPLAY_OPTION`].
pub const WRITE_DISPLAY_OPTION: u8 = 0x37;

/// Display option payload used by both refresh modes
///
/// Vendor-opaque. Must be sent byte-for-byte.
pub const DISPLAY_OPTION: [u8; 4] = [0x00, 0x80, 0x03, 0x0E];

/// Border waveform control command (0x3C)
///
/// Requires 1 byte of data.
pub const BORDER_WAVEFORM: u8 = 0x3C;

/// Border waveform value for full refresh
pub const BORDER_WAVEFORM_FULL: u8 = 0x01;

/// Border waveform value for partial refresh
pub const BORDER_WAVEFORM_PARTIAL: u8 = 0x80;

// Display update commands

/// Display update control 2 command (0x22)
///
/// Selects the update sequence run by [`MASTER_ACTIVATION`].
/// Requires 1 byte.
pub const DISPLAY_UPDATE_CTRL2: u8 = 0x22;

/// Update sequence: clock and analog on, load temperature and LUT, display
pub const UPDATE_SEQUENCE_NORMAL: u8 = 0xF7;

/// Update sequence used when fast mode is active
pub const UPDATE_SEQUENCE_FAST: u8 = 0xFF;

/// Master activation command (0x20)
///
/// Runs the sequence selected by [`DISPLAY_UPDATE_CTRL2`]. BUSY goes high
/// until the update completes.
pub const MASTER_ACTIVATION: u8 = 0x20;

//! E0213A367 E-Paper Display Driver
//!
//! A driver for the Heltec HINK-E0213A367 2.13" monochrome e-paper panel
//! (128x250 RAM, 122x250 visible), as fitted to the Wireless Paper and
//! Vision Master E213 boards.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` color interop (with `graphics` feature)
//! - Full and partial refresh modes
//! - Byte-quantized RAM window addressing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use e0213a367::{Builder, Color, Display, E0213A367, Interface, Region, Target};
//!
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let busy = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst, busy);
//! let config = match Builder::new().target(Target::WirelessPaper).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.reset(&mut delay);
//!
//! // One frame covering the whole controller RAM
//! let frame = [Color::White.bw_byte(); E0213A367.buffer_size()];
//!
//! // Program the window, stream pixels, then refresh
//! let area = display.calculate_memory_area(Region::new(0, 0, 121, 249));
//! let _ = display.set_memory_area(area);
//! let _ = display.write_ram(&frame[..area.buffer_size()]);
//! let _ = display.configure_full(&mut delay);
//! let _ = display.activate(&mut delay);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Color type for the monochrome panel
pub mod color;
/// Controller command definitions
pub mod command;
/// Panel geometry, capabilities and configuration builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;

pub use color::Color;
pub use config::{
    Builder, Capabilities, Config, DRAWING_HEIGHT, DRAWING_WIDTH, E0213A367, Geometry,
    PHYSICAL_HEIGHT, PHYSICAL_WIDTH, SUPPORTED_COLORS, Target,
};
pub use display::{
    DeepSleepMode, Display, FastMode, MemoryArea, PanelState, RefreshMode, Region,
};
pub use error::{BuilderError, Error};
pub use interface::InterfaceError;
pub use interface::{DEFAULT_BUSY_TIMEOUT_MS, DisplayInterface, Interface};

//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the panel controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The panel requires:
//! - SPI bus (MOSI + SCK)
//! - 3 GPIO pins:
//!   - **DC**: Data/Command select (output)
//!   - **RST**: Reset (output, active low)
//!   - **BUSY**: Busy status (input, active high)
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use e0213a367::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI and GPIO pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//!
//! // Send command
//! let _ = interface.send_command(0x3C); // Border waveform
//!
//! // Send data
//! let _ = interface.send_data(&[0x01]);
//!
//! // Wait for display ready
//! let _ = interface.busy_wait(&mut delay);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for hardware interface to the panel controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., different pin polarities, additional CS control),
/// implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;
    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Send the command byte over SPI
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    #[allow(clippy::type_complexity)]
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin high (data mode)
    /// 2. Send the data bytes over SPI
    ///
    /// # Arguments
    ///
    /// * `data` - Slice of bytes to send
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    #[allow(clippy::type_complexity)]
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set RST pin low
    /// 2. Wait at least 10ms
    /// 3. Set RST pin high
    /// 4. Wait at least 10ms
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay implementation for timing
    ///
    /// # Errors
    ///
    /// Returns an error if the RST pin cannot be driven.
    #[allow(clippy::type_complexity)]
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;

    /// Wait for busy pin to go low
    ///
    /// Polls the BUSY pin until it goes low (display ready).
    /// BUSY is active high - when high, the display is processing a command.
    /// Implementations may block forever on a stuck BUSY line.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay implementation for polling interval
    ///
    /// # Errors
    ///
    /// Returns an error if the pin cannot be read, or if the implementation
    /// bounds the wait and BUSY doesn't go low in time.
    #[allow(clippy::type_complexity)]
    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
    /// Timeout waiting for busy pin
    Timeout,
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
            Self::Timeout => write!(f, "Timeout waiting for display"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Default timeout for busy-wait in milliseconds (`None` waits forever)
pub const DEFAULT_BUSY_TIMEOUT_MS: Option<u32> = None;

/// Hardware interface implementation for the panel
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BUSY` - Busy pin implementing [`InputPin`]
///
/// ## Example
///
/// ```rust,no_run
/// use e0213a367::{Builder, Display, Interface, Target};
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::{InputPin, OutputPin};
/// # use embedded_hal::spi::{Operation, SpiDevice};
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiDevice for MockSpi {
/// #     fn transaction(
/// #         &mut self,
/// #         _operations: &mut [Operation<'_, u8>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # impl InputPin for MockPin {
/// #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
/// #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
/// # }
/// let interface = Interface::new(
///     MockSpi,  // SpiDevice
///     MockPin,  // OutputPin
///     MockPin,  // OutputPin
///     MockPin,  // InputPin
/// );
///
/// // Use with Display
/// # let config = match Builder::new().target(Target::WirelessPaper).build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, config);
/// ```
pub struct Interface<SPI, DC, RST, BUSY> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Busy pin (active high)
    busy: BUSY,
    /// Timeout for busy-wait in milliseconds
    busy_timeout_ms: Option<u32>,
}

impl<SPI, DC, RST, BUSY> Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    /// * `busy` - Busy pin (input, active high)
    ///
    /// ## Example
    ///
    /// ```rust,no_run
    /// use e0213a367::{DisplayInterface, Interface};
    /// # use core::convert::Infallible;
    /// # use embedded_hal::digital::{InputPin, OutputPin};
    /// # use embedded_hal::spi::{Operation, SpiDevice};
    /// # struct MockSpi;
    /// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
    /// # impl SpiDevice for MockSpi {
    /// #     fn transaction(
    /// #         &mut self,
    /// #         _operations: &mut [Operation<'_, u8>],
    /// #     ) -> Result<(), Self::Error> {
    /// #         Ok(())
    /// #     }
    /// # }
    /// # struct MockPin;
    /// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
    /// # impl OutputPin for MockPin {
    /// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
    /// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
    /// # }
    /// # impl InputPin for MockPin {
    /// #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
    /// #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
    /// # }
    /// let _interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
    /// ```
    pub fn new(spi: SPI, dc: DC, rst: RST, busy: BUSY) -> Self {
        Self {
            spi,
            dc,
            rst,
            busy,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    /// Set the busy-wait timeout in milliseconds
    ///
    /// Default is `None`: a controller that never clears BUSY blocks the
    /// caller. `Some(ms)` turns that into [`InterfaceError::Timeout`].
    pub fn set_busy_timeout(&mut self, timeout_ms: Option<u32>) -> &mut Self {
        self.busy_timeout_ms = timeout_ms;
        self
    }

    /// Get the current busy-wait timeout in milliseconds
    pub fn busy_timeout(&self) -> Option<u32> {
        self.busy_timeout_ms
    }
}

impl<SPI, DC, RST, BUSY, PinErr> DisplayInterface for Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BUSY: InputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(|e| InterfaceError::Pin(e))?;
        self.spi
            .write(&[command])
            .map_err(|e| InterfaceError::Spi(e))?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(|e| InterfaceError::Pin(e))?;
        self.spi.write(data).map_err(|e| InterfaceError::Spi(e))?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        // LOW -> 10ms -> HIGH -> 10ms
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(10);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(10);
        Ok(())
    }

    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        let mut elapsed_ms = 0u32;

        loop {
            if !self.busy.is_high().map_err(InterfaceError::Pin)? {
                return Ok(());
            }

            delay.delay_ms(1);
            elapsed_ms = elapsed_ms.saturating_add(1);
            if self.busy_timeout_ms.is_some_and(|timeout_ms| elapsed_ms >= timeout_ms) {
                log::warn!("e0213a367: busy-wait timed out after {elapsed_ms} ms");
                return Err(InterfaceError::Timeout);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::spi::{ErrorType as SpiErrorType, Operation};

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Wire {
        DcLow,
        DcHigh,
        Spi(u8),
    }

    type Log = Rc<RefCell<Vec<Wire>>>;

    struct MockSpi(Log);

    impl SpiErrorType for MockSpi {
        type Error = core::convert::Infallible;
    }

    impl SpiDevice for MockSpi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
            for op in operations.iter() {
                if let Operation::Write(bytes) = op {
                    self.0.borrow_mut().extend(bytes.iter().map(|b| Wire::Spi(*b)));
                }
            }
            Ok(())
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct PinFault;

    impl embedded_hal::digital::Error for PinFault {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    struct MockDc(Log);

    impl ErrorType for MockDc {
        type Error = PinFault;
    }

    impl OutputPin for MockDc {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Wire::DcLow);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Wire::DcHigh);
            Ok(())
        }
    }

    /// BUSY pin that reads high for a fixed number of polls
    struct MockBusy {
        high_polls: u32,
    }

    impl ErrorType for MockBusy {
        type Error = PinFault;
    }

    impl InputPin for MockBusy {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            if self.high_polls == 0 {
                return Ok(false);
            }
            self.high_polls -= 1;
            Ok(true)
        }
        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    struct CountingDelay {
        ms: u32,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, _ns: u32) {}
        fn delay_ms(&mut self, ms: u32) {
            self.ms += ms;
        }
    }

    /// RST pin recording its levels, optionally refusing to be driven
    struct MockRst {
        levels: Vec<bool>,
        fail: bool,
    }

    impl ErrorType for MockRst {
        type Error = PinFault;
    }

    impl OutputPin for MockRst {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            if self.fail {
                return Err(PinFault);
            }
            self.levels.push(false);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            if self.fail {
                return Err(PinFault);
            }
            self.levels.push(true);
            Ok(())
        }
    }

    type TestInterface = Interface<MockSpi, MockDc, MockRst, MockBusy>;

    fn interface_with_rst(high_polls: u32, rst_fails: bool) -> (TestInterface, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let interface = Interface::new(
            MockSpi(log.clone()),
            MockDc(log.clone()),
            MockRst {
                levels: Vec::new(),
                fail: rst_fails,
            },
            MockBusy { high_polls },
        );
        (interface, log)
    }

    fn interface(high_polls: u32) -> (TestInterface, Log) {
        interface_with_rst(high_polls, false)
    }

    #[test]
    fn test_default_busy_timeout_is_unbounded() {
        assert_eq!(DEFAULT_BUSY_TIMEOUT_MS, None);
        let (interface, _) = interface(0);
        assert_eq!(interface.busy_timeout(), None);
    }

    #[test]
    fn test_set_busy_timeout() {
        let (mut interface, _) = interface(0);
        interface.set_busy_timeout(Some(5_000));
        assert_eq!(interface.busy_timeout(), Some(5_000));

        interface.set_busy_timeout(None);
        assert_eq!(interface.busy_timeout(), None);
    }

    #[test]
    fn test_command_and_data_toggle_dc() {
        let (mut interface, log) = interface(0);
        interface.send_command(0x3C).unwrap();
        interface.send_data(&[0x80]).unwrap();

        assert_eq!(
            *log.borrow(),
            [Wire::DcLow, Wire::Spi(0x3C), Wire::DcHigh, Wire::Spi(0x80)]
        );
    }

    #[test]
    fn test_busy_wait_polls_until_idle_without_timeout() {
        let (mut interface, _) = interface(50_000);
        let mut delay = CountingDelay { ms: 0 };
        assert!(interface.busy_wait(&mut delay).is_ok());
        assert_eq!(delay.ms, 50_000);
    }

    #[test]
    fn test_busy_wait_times_out_when_bounded() {
        let (mut interface, _) = interface(u32::MAX);
        interface.set_busy_timeout(Some(10));
        let mut delay = CountingDelay { ms: 0 };
        assert!(matches!(
            interface.busy_wait(&mut delay),
            Err(InterfaceError::Timeout)
        ));
        assert_eq!(delay.ms, 10);
    }

    #[test]
    fn test_reset_pulses_rst_low_then_high() {
        let (mut interface, log) = interface(0);
        let mut delay = CountingDelay { ms: 0 };
        assert!(interface.reset(&mut delay).is_ok());
        assert_eq!(interface.rst.levels, [false, true]);
        assert_eq!(delay.ms, 20);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_reset_reports_rst_pin_fault() {
        let (mut interface, _) = interface_with_rst(0, true);
        let mut delay = CountingDelay { ms: 0 };
        assert!(matches!(
            interface.reset(&mut delay),
            Err(InterfaceError::Pin(PinFault))
        ));
        assert_eq!(delay.ms, 0);
    }
}

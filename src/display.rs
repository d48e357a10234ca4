//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::command::{
    BORDER_WAVEFORM, BORDER_WAVEFORM_FULL, BORDER_WAVEFORM_PARTIAL, DATA_ENTRY_MODE,
    DATA_ENTRY_X_INC_Y_INC, DEEP_SLEEP, DISPLAY_OPTION, DISPLAY_UPDATE_CTRL2, MASTER_ACTIVATION,
    SET_RAM_X_COUNTER, SET_RAM_X_RANGE, SET_RAM_Y_COUNTER, SET_RAM_Y_RANGE, SOFT_RESET,
    UPDATE_SEQUENCE_FAST, UPDATE_SEQUENCE_NORMAL, WRITE_DISPLAY_OPTION, WRITE_RAM_BW,
};
use crate::config::{Config, Geometry};
use crate::error::Error;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Pixel-space rectangle to update
///
/// Edges are inclusive. Coordinates are trusted: nothing here checks that
/// `left <= right`, `top <= bottom` or that the rectangle lies on the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// Leftmost pixel column
    pub left: i16,
    /// Topmost pixel row
    pub top: i16,
    /// Rightmost pixel column
    pub right: i16,
    /// Bottommost pixel row
    pub bottom: i16,
}

impl Region {
    /// Create a new region from its inclusive edges
    pub fn new(left: i16, top: i16, right: i16, bottom: i16) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Translate into controller RAM addresses
    ///
    /// X is addressed in bytes of 8 columns and truncates on both edges.
    /// A right edge that is not the last column of its byte is therefore
    /// rounded down, and the window can fall short of `right` by up to 7
    /// pixels. Y maps 1:1 to rows.
    ///
    /// ```
    /// use e0213a367::Region;
    ///
    /// let area = Region::new(9, 4, 23, 40).memory_area();
    /// assert_eq!((area.start_x, area.end_x), (1, 2));
    /// assert_eq!((area.start_y, area.end_y), (4, 40));
    /// ```
    pub fn memory_area(&self) -> MemoryArea {
        MemoryArea {
            start_x: (self.left / 8) as u16,
            start_y: self.top as u16,
            end_x: (self.right / 8) as u16,
            end_y: self.bottom as u16,
        }
    }
}

/// Controller RAM window, X in bytes and Y in rows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryArea {
    /// First byte column
    pub start_x: u16,
    /// First row
    pub start_y: u16,
    /// Last byte column (inclusive)
    pub end_x: u16,
    /// Last row (inclusive)
    pub end_y: u16,
}

impl MemoryArea {
    /// Create a new window from controller addresses
    pub fn new(start_x: u16, start_y: u16, end_x: u16, end_y: u16) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
        }
    }

    /// Bytes per row of the window
    pub fn byte_width(&self) -> usize {
        (self.end_x as usize + 1).saturating_sub(self.start_x as usize)
    }

    /// Bytes of pixel data that fill the window
    pub fn buffer_size(&self) -> usize {
        self.byte_width() * (self.end_y as usize + 1).saturating_sub(self.start_y as usize)
    }
}

/// Refresh mode for display updates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefreshMode {
    /// Full refresh (slow, clears ghosting)
    #[default]
    Full,
    /// Partial refresh (faster, leaves some ghosting)
    Partial,
}

impl RefreshMode {
    /// Display option payload for this mode
    ///
    /// Vendor-opaque and identical for both modes.
    pub fn display_option(self) -> [u8; 4] {
        match self {
            Self::Full | Self::Partial => DISPLAY_OPTION,
        }
    }

    /// Border waveform byte for this mode
    pub fn border_waveform(self) -> u8 {
        match self {
            Self::Full => BORDER_WAVEFORM_FULL,
            Self::Partial => BORDER_WAVEFORM_PARTIAL,
        }
    }
}

/// Fast update sequence toggle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FastMode {
    /// Normal update sequence
    #[default]
    Off,
    /// Fast update sequence
    On,
}

impl FastMode {
    /// Update sequence byte sent ahead of master activation
    pub fn update_sequence(self) -> u8 {
        match self {
            Self::Off => UPDATE_SEQUENCE_NORMAL,
            Self::On => UPDATE_SEQUENCE_FAST,
        }
    }
}

/// Last waveform configuration sent to the controller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    /// No configure call since construction or reset
    #[default]
    Unconfigured,
    /// Configured for the given refresh mode
    Configured(RefreshMode),
}

/// Deep sleep mode byte sent with [`DEEP_SLEEP`](crate::command::DEEP_SLEEP)
///
/// The values are controller-defined. What each mode retains is not
/// documented for this panel, so treat RAM contents as lost and rewrite the
/// frame after waking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum DeepSleepMode {
    /// Deep sleep mode 1
    #[default]
    Mode1 = 0x01,
    /// Deep sleep mode 2
    Mode2 = 0x03,
}

/// Core display driver for the E0213A367 panel
///
/// Owns the interface for the duration of its life: every operation takes
/// `&mut self` and runs to completion, busy-waiting on the controller where
/// the protocol requires it.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Requested fast-mode state
    fast_mode: FastMode,
    /// Last configure call
    state: PanelState,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// No bytes are sent until the first operation.
    pub fn new(interface: I, config: Config) -> Self {
        let fast_mode = if config.fast_mode && config.capabilities.fast_mode {
            FastMode::On
        } else {
            FastMode::Off
        };
        Self {
            interface,
            config,
            fast_mode,
            state: PanelState::Unconfigured,
        }
    }

    /// Hardware reset followed by a software reset
    ///
    /// Leaves the panel [`PanelState::Unconfigured`].
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if the RST pin cannot be driven, the soft
    /// reset cannot be sent or the busy-wait fails. The state is left as it
    /// was.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("e0213a367: reset");
        self.interface.reset(delay).map_err(Error::Interface)?;
        self.send_command(SOFT_RESET)?;
        self.wait(delay)?;
        self.state = PanelState::Unconfigured;
        Ok(())
    }

    /// Translate a pixel rectangle into controller RAM addresses
    ///
    /// See [`Region::memory_area`] for the rounding rules.
    pub fn calculate_memory_area(&self, region: Region) -> MemoryArea {
        region.memory_area()
    }

    /// Point the controller RAM window at `area`
    ///
    /// Sets left-to-right, top-to-bottom data entry, the X and Y spans, and
    /// moves the write cursor to the window's top-left corner. Addresses go
    /// out as single bytes.
    pub fn set_memory_area(&mut self, area: MemoryArea) -> DisplayResult<I> {
        log::trace!("e0213a367: memory area {area:?}");

        self.send_command(DATA_ENTRY_MODE)?;
        self.send_data(&[DATA_ENTRY_X_INC_Y_INC])?;

        self.send_command(SET_RAM_X_RANGE)?;
        self.send_data(&[area.start_x as u8])?;
        self.send_data(&[area.end_x as u8])?;

        self.send_command(SET_RAM_Y_RANGE)?;
        self.send_data(&[area.start_y as u8])?;
        self.send_data(&[area.end_y as u8])?;

        self.send_command(SET_RAM_X_COUNTER)?;
        self.send_data(&[area.start_x as u8])?;

        self.send_command(SET_RAM_Y_COUNTER)?;
        self.send_data(&[area.start_y as u8])?;

        Ok(())
    }

    /// Select the full refresh waveforms
    pub fn configure_full<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.configure(RefreshMode::Full, delay)
    }

    /// Select the partial refresh waveforms
    pub fn configure_partial<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.configure(RefreshMode::Partial, delay)
    }

    /// Select the waveforms for `mode` and wait for the controller
    ///
    /// Either mode may follow the other, or a fresh reset, at any time.
    /// The state only changes once the controller has reported idle.
    pub fn configure<D: DelayNs>(&mut self, mode: RefreshMode, delay: &mut D) -> DisplayResult<I> {
        log::debug!("e0213a367: configure {mode:?}");

        self.send_command(WRITE_DISPLAY_OPTION)?;
        for byte in mode.display_option() {
            self.send_data(&[byte])?;
        }

        self.send_command(BORDER_WAVEFORM)?;
        self.send_data(&[mode.border_waveform()])?;

        self.wait(delay)?;
        self.state = PanelState::Configured(mode);
        Ok(())
    }

    /// Run the update sequence and block until the panel has refreshed
    ///
    /// Uses whichever mode was last configured. There is no timeout here;
    /// bound the wait on the interface if needed.
    pub fn activate<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        if self.state == PanelState::Unconfigured {
            log::warn!("e0213a367: activating without a refresh mode configured");
        }
        let sequence = self.effective_fast_mode().update_sequence();
        log::debug!("e0213a367: activate ({:?}, sequence {sequence:#04x})", self.state);

        self.send_command(DISPLAY_UPDATE_CTRL2)?;
        self.send_data(&[sequence])?;
        self.send_command(MASTER_ACTIVATION)?;

        self.wait(delay)
    }

    /// Request the fast update sequence on or off
    ///
    /// # Errors
    ///
    /// Returns `Error::FastModeUnsupported` when turning fast mode on for a
    /// target without that capability. The flag stays off.
    pub fn set_fast_mode(&mut self, mode: FastMode) -> DisplayResult<I> {
        if mode == FastMode::On && !self.config.capabilities.fast_mode {
            log::warn!(
                "e0213a367: fast mode not supported on {:?}",
                self.config.target
            );
            return Err(Error::FastModeUnsupported);
        }
        self.fast_mode = mode;
        Ok(())
    }

    /// Current fast-mode flag
    pub fn fast_mode(&self) -> FastMode {
        self.fast_mode
    }

    fn effective_fast_mode(&self) -> FastMode {
        if self.config.capabilities.fast_mode {
            self.fast_mode
        } else {
            FastMode::Off
        }
    }

    /// Stream pixel data into BW RAM at the current cursor
    ///
    /// Bit=0 is black, bit=1 is white, MSB is the leftmost pixel.
    pub fn write_ram(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.send_command(WRITE_RAM_BW)?;
        self.send_data(data)
    }

    /// Write and refresh a region of the panel
    ///
    /// Translates `region`, programs the RAM window, writes `data` (one
    /// byte-aligned row after another), selects `mode` and activates.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `data` does not cover the window.
    pub fn update_region<D: DelayNs>(
        &mut self,
        region: Region,
        data: &[u8],
        mode: RefreshMode,
        delay: &mut D,
    ) -> DisplayResult<I> {
        let area = self.calculate_memory_area(region);
        let required = area.buffer_size();
        if data.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: data.len(),
            });
        }

        self.set_memory_area(area)?;
        self.write_ram(&data[..required])?;
        self.configure(mode, delay)?;
        self.activate(delay)
    }

    /// Enter deep sleep
    ///
    /// Only a hardware reset ([`Display::reset`]) wakes the controller.
    pub fn deep_sleep(&mut self, mode: DeepSleepMode) -> DisplayResult<I> {
        log::debug!("e0213a367: deep sleep {mode:?}");
        self.send_command(DEEP_SLEEP)?;
        self.send_data(&[mode as u8])?;
        self.state = PanelState::Unconfigured;
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    fn wait<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.interface.busy_wait(delay).map_err(Error::Interface)
    }

    /// Panel geometry
    pub fn geometry(&self) -> &Geometry {
        &self.config.geometry
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Last configured refresh mode
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Access the underlying interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }
}

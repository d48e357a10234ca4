//! Panel geometry, capabilities and configuration builder

use crate::color::Color;
pub use crate::error::BuilderError;

/// Physical width of the controller RAM in pixels
pub const PHYSICAL_WIDTH: u16 = 128;
/// Physical height of the controller RAM in pixels
pub const PHYSICAL_HEIGHT: u16 = 250;
/// Usable drawing width in pixels
pub const DRAWING_WIDTH: u16 = 122;
/// Usable drawing height in pixels
pub const DRAWING_HEIGHT: u16 = 250;
/// Colors the panel can show
pub const SUPPORTED_COLORS: [Color; 2] = [Color::Black, Color::White];

/// Fixed panel geometry
///
/// The controller RAM is wider than the glass: only the first
/// [`DRAWING_WIDTH`] columns are visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    /// Physical width in pixels (RAM columns)
    pub physical_width: u16,
    /// Physical height in pixels (RAM rows)
    pub physical_height: u16,
    /// Visible width in pixels
    pub drawing_width: u16,
    /// Visible height in pixels
    pub drawing_height: u16,
    /// Colors available for drawing
    pub colors: &'static [Color],
}

impl Geometry {
    /// Bytes needed to hold one full frame of physical RAM
    pub const fn buffer_size(&self) -> usize {
        (self.physical_width as usize).div_ceil(8) * self.physical_height as usize
    }
}

/// Geometry of the HINK-E0213A367 panel
pub const E0213A367: Geometry = Geometry {
    physical_width: PHYSICAL_WIDTH,
    physical_height: PHYSICAL_HEIGHT,
    drawing_width: DRAWING_WIDTH,
    drawing_height: DRAWING_HEIGHT,
    colors: &SUPPORTED_COLORS,
};

/// Boards the driver has been validated on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Heltec Wireless Paper
    WirelessPaper,
    /// Heltec Vision Master E213
    VisionMasterE213,
}

impl Target {
    /// Capabilities of the panel as fitted to this board
    pub const fn capabilities(self) -> Capabilities {
        match self {
            // Fast mode gives no speedup on either board.
            Self::WirelessPaper | Self::VisionMasterE213 => Capabilities { fast_mode: false },
        }
    }
}

/// Optional features a hardware target supports
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether the fast update sequence may be selected
    pub fast_mode: bool,
}

/// Display configuration
///
/// Use [`Builder`] to create a Config for a validated [`Target`].
#[derive(Clone, Debug)]
pub struct Config {
    /// Board the panel is fitted to
    pub target: Target,
    /// Panel geometry
    pub geometry: Geometry,
    /// Capabilities negotiated for the target
    pub capabilities: Capabilities,
    /// Initial state of the fast-mode flag
    pub fast_mode: bool,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use e0213a367::{Builder, Target};
///
/// let config = match Builder::new().target(Target::WirelessPaper).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert!(!config.capabilities.fast_mode);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    /// Hardware target (required)
    target: Option<Target>,
    /// Request fast mode at construction
    fast_mode: bool,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hardware target (required)
    pub fn target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    /// Request fast mode to start enabled
    ///
    /// Building fails if the target cannot run fast updates.
    pub fn fast_mode(mut self, enabled: bool) -> Self {
        self.fast_mode = enabled;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// - `BuilderError::MissingTarget` if no target was set
    /// - `BuilderError::FastModeUnsupported` if fast mode was requested on a
    ///   target without that capability
    pub fn build(self) -> Result<Config, BuilderError> {
        let target = self.target.ok_or(BuilderError::MissingTarget)?;
        let capabilities = target.capabilities();
        if self.fast_mode && !capabilities.fast_mode {
            return Err(BuilderError::FastModeUnsupported { target });
        }
        Ok(Config {
            target,
            geometry: E0213A367,
            capabilities,
            fast_mode: self.fast_mode,
        })
    }
}

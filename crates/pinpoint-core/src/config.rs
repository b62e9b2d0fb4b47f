use serde::{Deserialize, Serialize};

use crate::error::{PinpointError, Result};
use crate::render::OverlayStyle;
use crate::session::{validate_setting, DisplaySettings, SettingKind};

/// Startup configuration: initial display settings plus overlay style.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinpointConfig {
    pub display: DisplaySettings,
    pub style: OverlayStyle,
}

impl PinpointConfig {
    pub fn validate(&self) -> Result<()> {
        for kind in [SettingKind::ScaleFactor, SettingKind::UnitPerPixel] {
            validate_setting(kind, self.display.get(kind))
                .map_err(|e| PinpointError::Config(e.to_string()))?;
        }
        self.style.validate()
    }
}

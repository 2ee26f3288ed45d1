//! Page setup. Everything is measured in points (1/`dpi` of an inch) once it
//! leaves this module; the config itself is written in inches so it reads like
//! the paper it describes.
use geo_types::{coord, Rect};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::geo_types::RectExt;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: f64,
    pub margin_in: f64,
    /// Swap width and height.
    pub landscape: bool,
}

impl Default for PageConfig {
    /// US letter, portrait, 72dpi, one inch margins.
    fn default() -> Self {
        PageConfig {
            width_in: 8.5,
            height_in: 11.0,
            dpi: 72.0,
            margin_in: 1.0,
            landscape: false,
        }
    }
}

impl PageConfig {
    pub fn letter() -> Self {
        PageConfig::default()
    }

    pub fn landscape(mut self, landscape: bool) -> Self {
        self.landscape = landscape;
        self
    }

    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width_in > 0.0 && self.height_in > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "page size must be positive, got {}x{}",
                self.width_in, self.height_in
            )));
        }
        if !(self.dpi > 0.0) {
            return Err(ConfigError::Invalid(format!("dpi must be positive, got {}", self.dpi)));
        }
        if self.margin_in < 0.0 || 2.0 * self.margin_in >= self.width_in.min(self.height_in) {
            return Err(ConfigError::Invalid(format!(
                "margin {} doesn't fit a {}x{} page",
                self.margin_in, self.width_in, self.height_in
            )));
        }
        Ok(())
    }

    /// Page size in points, after orientation.
    pub fn size(&self) -> (f64, f64) {
        let (w, h) = (self.width_in * self.dpi, self.height_in * self.dpi);
        if self.landscape {
            (h, w)
        } else {
            (w, h)
        }
    }

    pub fn margin(&self) -> f64 {
        self.margin_in * self.dpi
    }

    pub fn page(&self) -> Rect<f64> {
        let (w, h) = self.size();
        Rect::new(coord! {x: 0.0, y: 0.0}, coord! {x: w, y: h})
    }

    /// The page minus its margins. This is the usual packing domain.
    pub fn domain(&self) -> Rect<f64> {
        self.page().inset_by(self.margin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_in_points() {
        let page = PageConfig::letter();
        assert_eq!(page.size(), (612.0, 792.0));
        let domain = page.domain();
        assert_eq!(domain.min(), coord! {x: 72.0, y: 72.0});
        assert_eq!(domain.max(), coord! {x: 540.0, y: 720.0});
        assert_eq!(page.landscape(true).size(), (792.0, 612.0));
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let page = PageConfig::from_ron("(dpi: 96.0, landscape: true)").unwrap();
        assert_eq!(page.dpi, 96.0);
        assert_eq!(page.width_in, 8.5);
        assert_eq!(page.size(), (1056.0, 816.0));
    }

    #[test]
    fn test_to_ron_loads_back() {
        let page = PageConfig {
            margin_in: 0.5,
            ..PageConfig::default()
        };
        assert_eq!(PageConfig::from_ron(&page.to_ron().unwrap()).unwrap(), page);
    }

    #[test]
    fn test_bad_config() {
        assert!(matches!(
            PageConfig::from_ron("(dpi: 0.0)"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            PageConfig::from_ron("(margin_in: 5.0)"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            PageConfig::from_ron("(dpi: \"lots\")"),
            Err(ConfigError::Parse(_))
        ));
    }
}

//! Map display options

use serde::{Deserialize, Serialize};

use crate::config::{MapConfig, MarkerConfig};
use crate::models::Coordinate;

/// Raster tile source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

/// Marker icon images and geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerIcon {
    pub icon_url: String,
    pub retina_url: String,
    pub shadow_url: String,
    pub size: [u32; 2],
    pub anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
}

/// Everything a map session needs to render, handed over when it is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    pub center: Coordinate,
    pub zoom: u8,
    pub tile_layer: TileLayer,
    pub marker_icon: MarkerIcon,
}

impl From<&MarkerConfig> for MarkerIcon {
    fn from(config: &MarkerConfig) -> Self {
        Self {
            icon_url: config.icon_url.clone(),
            retina_url: config.icon_retina_url.clone(),
            shadow_url: config.shadow_url.clone(),
            size: config.icon_size,
            anchor: config.icon_anchor,
            popup_anchor: config.popup_anchor,
        }
    }
}

impl From<&MapConfig> for MapOptions {
    fn from(config: &MapConfig) -> Self {
        Self {
            center: Coordinate::new(config.center_latitude, config.center_longitude),
            zoom: config.zoom,
            tile_layer: TileLayer {
                url_template: config.tile_url.clone(),
                attribution: config.tile_attribution.clone(),
                max_zoom: config.max_zoom,
            },
            marker_icon: MarkerIcon::from(&config.marker),
        }
    }
}

impl Default for MapOptions {
    fn default() -> Self {
        Self::from(&MapConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_config() {
        let mut config = MapConfig::default();
        config.zoom = 4;
        config.marker.icon_url = "/static/pin.png".to_string();

        let options = MapOptions::from(&config);
        assert_eq!(options.zoom, 4);
        assert_eq!(options.center, Coordinate::new(20.0, 0.0));
        assert_eq!(options.marker_icon.icon_url, "/static/pin.png");
        assert_eq!(options.marker_icon.size, [25, 41]);
        assert_eq!(options.tile_layer.max_zoom, 19);
    }
}

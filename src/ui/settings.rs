use egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    pub ui_scale: f32,

    /// Roster file picked from the UI; the data dir default otherwise.
    pub roster_path: Option<PathBuf>,

    // Used for the "Yes" cell of blacklisted members
    pub blacklist_color: [u8; 4],
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            roster_path: None,
            blacklist_color: [200, 60, 60, 255],
        }
    }
}

impl UiSettings {
    pub fn blacklist_color(&self) -> Color32 {
        let c = self.blacklist_color;
        Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3])
    }

    pub fn set_blacklist_color(&mut self, color: Color32) {
        self.blacklist_color = [color.r(), color.g(), color.b(), color.a()];
    }

    pub fn clamped_scale(&self) -> f32 {
        if self.ui_scale.is_finite() {
            self.ui_scale.clamp(0.75, 2.0)
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_fill_in_defaults() {
        let s: UiSettings = serde_json::from_str(r#"{ "ui_scale": 1.5 }"#).unwrap();
        assert_eq!(s.ui_scale, 1.5);
        assert_eq!(s.roster_path, None);
        assert_eq!(s.blacklist_color, UiSettings::default().blacklist_color);
    }

    #[test]
    fn scale_is_kept_in_range() {
        let mut s = UiSettings::default();
        s.ui_scale = 9.0;
        assert_eq!(s.clamped_scale(), 2.0);
        s.ui_scale = f32::NAN;
        assert_eq!(s.clamped_scale(), 1.0);
    }

    #[test]
    fn color_round_trips() {
        let mut s = UiSettings::default();
        s.set_blacklist_color(Color32::from_rgb(1, 2, 3));
        assert_eq!(s.blacklist_color(), Color32::from_rgb(1, 2, 3));
    }
}

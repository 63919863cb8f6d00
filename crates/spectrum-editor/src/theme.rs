use crate::prefs::Theme;
use egui::Color32;

/// Colors used to paint the spectrum editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub editor_background: Color32,
    pub fill: Color32,
    pub tonic: Color32,
    pub fifth_note: Color32,
    pub curve: Color32,
}

// Dark palette
const DARK: Palette = Palette {
    editor_background: Color32::from_rgb(0, 0, 0),
    fill: Color32::from_rgb(68, 68, 68),
    tonic: Color32::from_rgb(153, 102, 51),
    fifth_note: Color32::from_rgb(68, 68, 102),
    curve: Color32::from_rgb(255, 255, 255),
};

// Light palette
const LIGHT: Palette = Palette {
    editor_background: Color32::from_rgb(255, 255, 255),
    fill: Color32::from_rgb(236, 236, 236),
    tonic: Color32::from_rgb(204, 170, 136),
    fifth_note: Color32::from_rgb(170, 187, 204),
    curve: Color32::from_rgb(0, 0, 0),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }
}

/// Switch the egui context between light and dark visuals to match `theme`.
pub fn apply(ctx: &egui::Context, theme: Theme) {
    let palette = Palette::for_theme(theme);
    let mut visuals = match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    };
    visuals.extreme_bg_color = palette.editor_background;
    visuals.selection.stroke = egui::Stroke::new(1.0, palette.curve);
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light.editor_background, dark.editor_background);
        assert_eq!(dark.curve, Color32::WHITE);
    }

    #[test]
    fn test_apply_sets_dark_mode() {
        let ctx = egui::Context::default();
        apply(&ctx, Theme::Dark);
        assert!(ctx.style().visuals.dark_mode);
        apply(&ctx, Theme::Light);
        assert!(!ctx.style().visuals.dark_mode);
    }
}

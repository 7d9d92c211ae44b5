//! Theme table.
//!
//! Each theme is plain data: a palette for the UI and a set of effect
//! parameters. Rendering code receives a resolved `&'static Theme`; nothing
//! branches on theme names.

use ratatui::style::Color;

use crate::config::DEFAULT_THEME;

/// Colors used by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent_primary: Color,
    pub accent_secondary: Color,
    pub success: Color,
    pub danger: Color,
    pub warning: Color,
}

/// Decorative effect settings, passed through to rendering untouched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectParameters {
    pub particle_count: u16,
    pub glow_intensity: f32,
    pub animation_speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub key: &'static str,
    pub name: &'static str,
    pub palette: Palette,
    pub effects: EffectParameters,
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

#[allow(clippy::too_many_arguments)]
const fn palette(
    bg_primary: u32,
    bg_secondary: u32,
    text_primary: u32,
    text_secondary: u32,
    accent_primary: u32,
    accent_secondary: u32,
    success: u32,
    danger: u32,
    warning: u32,
) -> Palette {
    Palette {
        bg_primary: rgb(bg_primary),
        bg_secondary: rgb(bg_secondary),
        text_primary: rgb(text_primary),
        text_secondary: rgb(text_secondary),
        accent_primary: rgb(accent_primary),
        accent_secondary: rgb(accent_secondary),
        success: rgb(success),
        danger: rgb(danger),
        warning: rgb(warning),
    }
}

const fn effects(
    particle_count: u16,
    glow_intensity: f32,
    animation_speed: f32,
) -> EffectParameters {
    EffectParameters {
        particle_count,
        glow_intensity,
        animation_speed,
    }
}

/// All themes, in picker order
pub static THEMES: [Theme; 12] = [
    Theme {
        key: "cyber-blue",
        name: "Cyber Blue",
        palette: palette(
            0x0c0c0c, 0x1a1a2e, 0xffffff, 0xe2e8f0, 0x00c8ff, 0x0080ff, 0x00e5ff, 0xff1744,
            0x00bcd4,
        ),
        effects: effects(50, 0.4, 1.0),
    },
    Theme {
        key: "neon-purple",
        name: "Neon Purple",
        palette: palette(
            0x0a0a0f, 0x1a0f2e, 0xffffff, 0xe2e8f0, 0xba55ff, 0x9333ea, 0x00e676, 0xe91e63,
            0xab47bc,
        ),
        effects: effects(60, 0.5, 1.2),
    },
    Theme {
        key: "matrix-green",
        name: "Matrix Green",
        palette: palette(
            0x0a0f0a, 0x0f1f0f, 0x00ff41, 0x00cc33, 0x00ff41, 0x00cc33, 0x76ff03, 0xf44336,
            0xcddc39,
        ),
        effects: effects(75, 0.6, 0.8),
    },
    Theme {
        key: "sunset-orange",
        name: "Sunset Orange",
        palette: palette(
            0x0f0a05, 0x2e1a0f, 0xffffff, 0xf0e6d2, 0xff9500, 0xff6b00, 0x4caf50, 0xf44336,
            0xffa726,
        ),
        effects: effects(40, 0.4, 1.1),
    },
    Theme {
        key: "minimal-dark",
        name: "Minimal Dark",
        palette: palette(
            0x0f172a, 0x1e293b, 0xf8fafc, 0xe2e8f0, 0x60a5fa, 0x3b82f6, 0x10b981, 0xef4444,
            0xeab308,
        ),
        effects: effects(20, 0.2, 1.5),
    },
    Theme {
        key: "light",
        name: "Light",
        palette: palette(
            0xffffff, 0xf8fafc, 0x1e293b, 0x64748b, 0x3b82f6, 0x60a5fa, 0x16a34a, 0xdc2626,
            0xd97706,
        ),
        effects: effects(30, 0.1, 2.0),
    },
    Theme {
        key: "hal-red",
        name: "HAL Red",
        palette: palette(
            0x0a0002, 0x1a0a0a, 0xffffff, 0xffcccc, 0xff0000, 0xcc0000, 0xff3b3b, 0xff1a1a,
            0xf44336,
        ),
        effects: effects(25, 0.5, 1.0),
    },
    Theme {
        key: "tesseract-mode",
        name: "Tesseract Mode",
        palette: palette(
            0x010101, 0x0d1117, 0xc3dafe, 0x94a3b8, 0x00ffe0, 0x60fdfd, 0x38bdf8, 0xef4444,
            0xfacc15,
        ),
        effects: effects(40, 0.6, 1.2),
    },
    Theme {
        key: "stark-hud",
        name: "Stark HUD",
        palette: palette(
            0x061826, 0x0a2a43, 0xffffff, 0xcbd5e1, 0x00ffff, 0x00e0e0, 0x00bcd4, 0xff5252,
            0xffee58,
        ),
        effects: effects(35, 0.5, 1.4),
    },
    Theme {
        key: "vault-tec",
        name: "Vault-Tec",
        palette: palette(
            0x222000, 0x2a2a0a, 0xcfd364, 0xffff99, 0xf3ff0a, 0xe6e600, 0xb2ff59, 0xff7043,
            0xfbc02d,
        ),
        effects: effects(30, 0.3, 0.9),
    },
    Theme {
        key: "monolith-white",
        name: "Monolith White",
        palette: palette(
            0xf4f4f4, 0xffffff, 0x1f2937, 0x4b5563, 0x0099ff, 0x1e40af, 0x10b981, 0xef4444,
            0xfbbf24,
        ),
        effects: effects(15, 0.15, 1.6),
    },
    Theme {
        key: "tron-legacy",
        name: "Tron Legacy",
        palette: palette(
            0x0a0a0a, 0x0d1117, 0x00f9ff, 0x99e9f2, 0x00f9ff, 0x00c0e0, 0x00e5ff, 0xff1744,
            0x00bcd4,
        ),
        effects: effects(55, 0.6, 1.2),
    },
];

fn position(key: &str) -> Option<usize> {
    THEMES.iter().position(|t| t.key == key)
}

fn default_index() -> usize {
    position(DEFAULT_THEME).unwrap_or(0)
}

/// Look up a theme, falling back to the default for unknown keys
pub fn resolve(key: &str) -> &'static Theme {
    &THEMES[position(key).unwrap_or_else(default_index)]
}

/// The theme after `key` in picker order, wrapping around
pub fn next(key: &str) -> &'static Theme {
    let index = position(key).unwrap_or_else(default_index);
    &THEMES[(index + 1) % THEMES.len()]
}

/// The theme before `key` in picker order, wrapping around
pub fn previous(key: &str) -> &'static Theme {
    let index = position(key).unwrap_or_else(default_index);
    &THEMES[(index + THEMES.len() - 1) % THEMES.len()]
}

/// Index of a theme in picker order, for list selection
pub fn index_of(key: &str) -> usize {
    position(key).unwrap_or_else(default_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_theme() {
        let theme = resolve("matrix-green");
        assert_eq!(theme.name, "Matrix Green");
        assert_eq!(theme.effects.particle_count, 75);
        assert_eq!(theme.palette.accent_primary, Color::Rgb(0x00, 0xff, 0x41));
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        assert_eq!(resolve("no-such-theme").key, "cyber-blue");
        assert_eq!(resolve("").key, "cyber-blue");
        assert_eq!(resolve("dark").key, "cyber-blue");
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, theme) in THEMES.iter().enumerate() {
            assert_eq!(position(theme.key), Some(i), "duplicate key {}", theme.key);
        }
    }

    #[test]
    fn test_next_and_previous_wrap() {
        assert_eq!(next("cyber-blue").key, "neon-purple");
        assert_eq!(next("tron-legacy").key, "cyber-blue");
        assert_eq!(previous("cyber-blue").key, "tron-legacy");
        assert_eq!(previous("neon-purple").key, "cyber-blue");
    }

    #[test]
    fn test_cycling_visits_every_theme() {
        let mut key = "cyber-blue";
        for _ in 0..THEMES.len() {
            key = next(key).key;
        }
        assert_eq!(key, "cyber-blue");
    }

    #[test]
    fn test_index_of() {
        assert_eq!(index_of("cyber-blue"), 0);
        assert_eq!(index_of("tron-legacy"), 11);
        assert_eq!(index_of("bogus"), 0);
    }
}

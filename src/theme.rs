use std::sync::LazyLock;

use regex::Regex;

/// Plain sRGB triple. Everything the renderer needs is expressed in these;
/// the terminal layer maps them to `ratatui` colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

pub const WHITE: Rgb = rgb(255, 255, 255);

/// Visual descriptor for one day cell: the outer glow, the hover border,
/// the light-ray tint, the bright interior gradient, the number tint, and
/// the flash color the reveal sequencer floods the screen with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub glow: Rgb,
    pub hover_border: Rgb,
    pub ray: Rgb,
    pub bright_from: Rgb,
    pub bright_to: Rgb,
    pub text: Rgb,
    pub flash: Rgb,
}

/// The closed set of built-in color presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Default,
    Amber,
    Red,
    Green,
    Blue,
    Cyan,
    Purple,
    Pink,
}

pub const PRESET_NAMES: &[&str] = &[
    "default", "amber", "red", "green", "blue", "cyan", "purple", "pink",
];

impl Preset {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::Default),
            "amber" => Some(Self::Amber),
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "blue" => Some(Self::Blue),
            "cyan" => Some(Self::Cyan),
            "purple" => Some(Self::Purple),
            "pink" => Some(Self::Pink),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Amber => "amber",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Purple => "purple",
            Self::Pink => "pink",
        }
    }

    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            Self::Default => Theme {
                glow: WHITE,
                hover_border: rgb(148, 163, 184),
                ray: WHITE,
                bright_from: rgb(241, 245, 249),
                bright_to: rgb(203, 213, 225),
                text: rgb(148, 163, 184),
                flash: rgb(248, 250, 252),
            },
            Self::Amber => Theme {
                glow: rgb(245, 158, 11),
                hover_border: rgb(251, 191, 36),
                ray: rgb(253, 230, 138),
                bright_from: rgb(254, 243, 199),
                bright_to: rgb(252, 211, 77),
                text: rgb(251, 191, 36),
                flash: rgb(252, 211, 77),
            },
            Self::Red => Theme {
                glow: rgb(239, 68, 68),
                hover_border: rgb(248, 113, 113),
                ray: rgb(254, 202, 202),
                bright_from: rgb(254, 226, 226),
                bright_to: rgb(252, 165, 165),
                text: rgb(248, 113, 113),
                flash: rgb(248, 113, 113),
            },
            Self::Green => Theme {
                glow: rgb(16, 185, 129),
                hover_border: rgb(52, 211, 153),
                ray: rgb(167, 243, 208),
                bright_from: rgb(209, 250, 229),
                bright_to: rgb(110, 231, 183),
                text: rgb(52, 211, 153),
                flash: rgb(52, 211, 153),
            },
            Self::Blue => Theme {
                glow: rgb(59, 130, 246),
                hover_border: rgb(96, 165, 250),
                ray: rgb(191, 219, 254),
                bright_from: rgb(219, 234, 254),
                bright_to: rgb(147, 197, 253),
                text: rgb(96, 165, 250),
                flash: rgb(96, 165, 250),
            },
            Self::Cyan => Theme {
                glow: rgb(34, 211, 238),
                hover_border: rgb(34, 211, 238),
                ray: rgb(165, 243, 252),
                bright_from: rgb(207, 250, 254),
                bright_to: rgb(103, 232, 249),
                text: rgb(34, 211, 238),
                flash: rgb(34, 211, 238),
            },
            Self::Purple => Theme {
                glow: rgb(168, 85, 247),
                hover_border: rgb(192, 132, 252),
                ray: rgb(233, 213, 255),
                bright_from: rgb(243, 232, 255),
                bright_to: rgb(216, 180, 254),
                text: rgb(192, 132, 252),
                flash: rgb(192, 132, 252),
            },
            Self::Pink => Theme {
                glow: rgb(236, 72, 153),
                hover_border: rgb(244, 114, 182),
                ray: rgb(251, 207, 232),
                bright_from: rgb(252, 231, 243),
                bright_to: rgb(249, 168, 212),
                text: rgb(244, 114, 182),
                flash: rgb(244, 114, 182),
            },
        }
    }
}

static HEX_SHORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#([0-9a-f])([0-9a-f])([0-9a-f])$").unwrap());
static HEX_FULL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$").unwrap());

/// Parses `#rgb` or `#rrggbb`; shorthand digits are doubled (`#f2a` ->
/// `#ff22aa`). Returns `None` for anything else.
#[must_use]
pub fn parse_hex(spec: &str) -> Option<Rgb> {
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    if let Some(caps) = HEX_SHORT.captures(spec) {
        let double = |s: &str| channel(&format!("{s}{s}"));
        return Some(Rgb {
            r: double(&caps[1])?,
            g: double(&caps[2])?,
            b: double(&caps[3])?,
        });
    }
    let caps = HEX_FULL.captures(spec)?;
    Some(Rgb {
        r: channel(&caps[1])?,
        g: channel(&caps[2])?,
        b: channel(&caps[3])?,
    })
}

/// Interpolates a channel 80% of the way toward 255. Holds for the whole
/// range: 0 -> 204, 255 -> 255.
fn lighten(c: u8) -> u8 {
    (f32::from(c) + (255.0 - f32::from(c)) * 0.8).round() as u8
}

#[must_use]
pub fn lightened(base: Rgb) -> Rgb {
    Rgb {
        r: lighten(base.r),
        g: lighten(base.g),
        b: lighten(base.b),
    }
}

fn hex_theme(base: Rgb) -> Theme {
    let light = lightened(base);
    Theme {
        glow: base,
        hover_border: base,
        ray: light,
        bright_from: light,
        bright_to: WHITE,
        text: light,
        flash: base,
    }
}

fn legacy_fallback(day: u8) -> Preset {
    match day {
        10 => Preset::Red,
        20 => Preset::Purple,
        _ => Preset::Default,
    }
}

/// Resolves a day's theme from its stored color spec.
///
/// Priority: literal hex color, then preset name, then the legacy per-day
/// fallback. A malformed hex string is treated as if no color were set.
#[must_use]
pub fn resolve(day: u8, spec: Option<&str>) -> Theme {
    if let Some(spec) = spec {
        if spec.starts_with('#') {
            if let Some(base) = parse_hex(spec) {
                return hex_theme(base);
            }
        } else if let Some(preset) = Preset::from_name(spec) {
            return preset.theme();
        }
    }
    legacy_fallback(day).theme()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_hex() {
        assert_eq!(parse_hex("#ff0000"), Some(rgb(255, 0, 0)));
        assert_eq!(parse_hex("#1A2b3C"), Some(rgb(26, 43, 60)));
    }

    #[test]
    fn parse_shorthand_doubles_digits() {
        assert_eq!(parse_hex("#f2a"), Some(rgb(255, 34, 170)));
        assert_eq!(parse_hex("#000"), Some(rgb(0, 0, 0)));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(parse_hex("#xyz"), None);
        assert_eq!(parse_hex("#ff00"), None);
        assert_eq!(parse_hex("ff0000"), None);
        assert_eq!(parse_hex("#ff00001"), None);
    }

    #[test]
    fn lighten_holds_at_extremes() {
        let black = resolve(5, Some("#000000"));
        assert_eq!(black.bright_from, rgb(204, 204, 204));
        assert_eq!(black.glow, rgb(0, 0, 0));

        let white = resolve(5, Some("#ffffff"));
        assert_eq!(white.bright_from, WHITE);
        assert_eq!(white.glow, WHITE);
    }

    #[test]
    fn hex_gradient_runs_to_white() {
        let theme = resolve(1, Some("#3b82f6"));
        assert_eq!(theme.bright_to, WHITE);
        assert_eq!(theme.flash, rgb(59, 130, 246));
    }

    #[test]
    fn preset_names_round_trip() {
        for name in PRESET_NAMES {
            assert_eq!(Preset::from_name(name).unwrap().name(), *name);
        }
        assert_eq!(Preset::from_name("mauve"), None);
    }

    #[test]
    fn legacy_fallback_days() {
        assert_eq!(resolve(10, None), Preset::Red.theme());
        assert_eq!(resolve(20, None), Preset::Purple.theme());
        assert_eq!(resolve(3, None), Preset::Default.theme());
    }

    #[test]
    fn malformed_hex_falls_back_like_absent() {
        assert_eq!(resolve(7, Some("#xyz")), resolve(7, None));
        assert_eq!(resolve(10, Some("#12")), Preset::Red.theme());
    }

    #[test]
    fn unknown_preset_name_falls_back() {
        assert_eq!(resolve(20, Some("chartreuse")), Preset::Purple.theme());
    }
}

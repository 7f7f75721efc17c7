// ui/system_theme.rs - System theme detection

use crate::config::ThemeMode;

/// Detected system theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTheme {
    Light,
    Dark,
    Unknown,
}

/// Read `COLORFGBG` ("fg;bg" or "fg;default;bg"); background colors 0-6 and 8 are dark
pub fn parse_colorfgbg(value: &str) -> SystemTheme {
    let Some(bg) = value.rsplit(';').next().and_then(|s| s.trim().parse::<u8>().ok()) else {
        return SystemTheme::Unknown;
    };
    match bg {
        0..=6 | 8 => SystemTheme::Dark,
        7 | 9..=15 => SystemTheme::Light,
        _ => SystemTheme::Unknown,
    }
}

/// Get system theme preference
pub fn detect_system_theme() -> SystemTheme {
    if let Ok(value) = std::env::var("COLORFGBG") {
        let theme = parse_colorfgbg(&value);
        if theme != SystemTheme::Unknown {
            return theme;
        }
    }

    if std::env::var("DARK_MODE").is_ok() {
        return SystemTheme::Dark;
    }

    if let Ok(term) = std::env::var("TERM")
        && (term.contains("dark") || term.contains("night"))
    {
        return SystemTheme::Dark;
    }

    SystemTheme::Unknown
}

/// Whether to start in dark mode; unknown terminals get the light palette
pub fn resolve_dark_mode(mode: ThemeMode, detected: SystemTheme) -> bool {
    match mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::Auto => detected == SystemTheme::Dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_colorfgbg() {
        assert_eq!(parse_colorfgbg("15;0"), SystemTheme::Dark);
        assert_eq!(parse_colorfgbg("0;15"), SystemTheme::Light);
        assert_eq!(parse_colorfgbg("0;default;7"), SystemTheme::Light);
        assert_eq!(parse_colorfgbg("12;8"), SystemTheme::Dark);
        assert_eq!(parse_colorfgbg("garbage"), SystemTheme::Unknown);
        assert_eq!(parse_colorfgbg("0;200"), SystemTheme::Unknown);
    }

    #[test]
    fn test_resolve_dark_mode() {
        assert!(resolve_dark_mode(ThemeMode::Dark, SystemTheme::Light));
        assert!(!resolve_dark_mode(ThemeMode::Light, SystemTheme::Dark));
        assert!(resolve_dark_mode(ThemeMode::Auto, SystemTheme::Dark));
        assert!(!resolve_dark_mode(ThemeMode::Auto, SystemTheme::Unknown));
    }
}

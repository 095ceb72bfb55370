//! Process-wide drawing toggles.
//!
//! The host decides these once at startup (typically from the environment)
//! and installs them before the first paint pass. Every drawing facade reads
//! the installed value when it is constructed; nothing in the painting path
//! writes them afterwards.

use state::InitCell;

static CONFIG: InitCell<DrawConfig> = InitCell::new();

/// Global toggles consulted by every draw call.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DrawConfig {
    /// Skip solid rectangle fills.
    pub no_fill: bool,
    /// Skip rectangle outlines.
    pub no_rects: bool,
    /// Skip text labels.
    pub no_strings: bool,
    /// Draw lines and rectangle outlines as 1px colored line primitives,
    /// ignoring pen width and dash style.
    pub line_primitives: bool,
}

impl DrawConfig {
    /// Reads `BRUSHWORK_NO_FILL`, `BRUSHWORK_NO_RECTS`, `BRUSHWORK_NO_STRINGS`
    /// and `BRUSHWORK_GL_LINES`. Unset or unrecognised values count as `false`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |key: &str| lookup(key).is_some_and(|v| parse_flag(&v));
        Self {
            no_fill: flag("BRUSHWORK_NO_FILL"),
            no_rects: flag("BRUSHWORK_NO_RECTS"),
            no_strings: flag("BRUSHWORK_NO_STRINGS"),
            line_primitives: flag("BRUSHWORK_GL_LINES"),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Installs the process-wide configuration.
///
/// Returns `false` (and leaves the first value in place) if a configuration
/// was already installed.
pub fn install(config: DrawConfig) -> bool {
    let installed = CONFIG.set(config);
    if installed {
        log::debug!("draw config installed: {config:?}");
    } else {
        log::warn!("draw config already installed; ignoring {config:?}");
    }
    installed
}

/// The installed configuration, or the all-off default.
pub fn current() -> DrawConfig {
    CONFIG.try_get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_truthy_spellings() {
        for v in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(parse_flag(v), "{v:?}");
        }
        for v in ["0", "false", "", "nope"] {
            assert!(!parse_flag(v), "{v:?}");
        }
    }

    #[test]
    fn lookup_maps_each_variable_to_its_toggle() {
        let cfg = DrawConfig::from_lookup(|key| match key {
            "BRUSHWORK_NO_RECTS" => Some("1".into()),
            "BRUSHWORK_GL_LINES" => Some("on".into()),
            _ => None,
        });
        assert_eq!(
            cfg,
            DrawConfig { no_fill: false, no_rects: true, no_strings: false, line_primitives: true }
        );
    }

    #[test]
    fn install_is_write_once() {
        // The only test touching the global cell.
        let first = DrawConfig { no_fill: true, ..DrawConfig::default() };
        assert!(install(first));
        assert!(!install(DrawConfig::default()));
        assert_eq!(current(), first);
    }
}

/// Controls when to emphasize labels with terminal escape sequences.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Color {
    /// Emphasis is used if stdout is a terminal.
    Auto,

    /// Emphasis is never used.
    Never,

    /// Emphasis is always used, whatever stdout is connected to.
    #[default]
    Always,
}

impl Color {
    /// Returns true if emphasis should be active based on the configuration.
    pub fn is_active(self) -> bool {
        match self {
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
            Self::Never => false,
            Self::Always => true,
        }
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "never" => Ok(Self::Never),
            "always" => Ok(Self::Always),
            _ => Err(format!("Invalid color option: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_str() {
        assert_eq!("auto".parse::<Color>(), Ok(Color::Auto));
        assert_eq!("NEVER".parse::<Color>(), Ok(Color::Never));
        assert_eq!("always".parse::<Color>(), Ok(Color::Always));
        assert_eq!(
            "sometimes".parse::<Color>(),
            Err("Invalid color option: sometimes".to_string())
        );
    }

    #[test]
    fn test_color_default_is_always() {
        assert_eq!(Color::default(), Color::Always);
        assert!(Color::Always.is_active());
        assert!(!Color::Never.is_active());
    }
}

//! Teletext page configuration

/// Configuration for creating a TeletextPage.
/// Provides a more ergonomic API than the many-parameter constructor.
#[derive(Debug, Clone)]
pub struct TeletextPageConfig {
    pub page_number: u16,
    pub title: String,
    pub subheader: String,
    pub plain: bool,
    pub show_footer: bool,
    pub ignore_height_limit: bool,
}

impl TeletextPageConfig {
    pub fn new(page_number: u16, title: String, subheader: String) -> Self {
        Self {
            page_number,
            title,
            subheader,
            plain: false,
            show_footer: true,
            ignore_height_limit: false,
        }
    }

    /// Settings for one-shot output: every row on a single page, footer
    /// placed right after the content.
    pub fn for_once_mode(mut self, plain: bool) -> Self {
        self.plain = plain;
        self.ignore_height_limit = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TeletextPageConfig::new(100, "IPFL".to_string(), "Главная".to_string());
        assert!(config.show_footer);
        assert!(!config.plain);
        assert!(!config.ignore_height_limit);
    }

    #[test]
    fn test_once_mode() {
        let config =
            TeletextPageConfig::new(201, "IPFL".to_string(), "Live".to_string()).for_once_mode(true);
        assert!(config.plain);
        assert!(config.ignore_height_limit);
        assert!(config.show_footer);
    }
}

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, config: &catpath::config::Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        config: &catpath::config::Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = !config.output.ascii && caps.supports_unicode;
        let color = !json && caps.supports_color && !caps.is_ci;

        Self {
            json,
            verbose,
            caps,
            color,
            unicode,
        }
    }

    /// Whether prompts and raw-mode widgets can run
    pub fn is_interactive(&self) -> bool {
        !self.json && self.caps.is_interactive()
    }

    /// Terminal width in columns
    pub fn width(&self) -> usize {
        usize::from(self.caps.width)
    }
}

use std::path::PathBuf;

/// Options controlling how the Chrome/Chromium instance is launched.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Run without a visible browser window.
    pub headless: bool,

    /// Run Chrome with its sandbox enabled. Disabled on CI runners that
    /// forbid user namespaces.
    pub sandbox: bool,

    /// Browser window width in pixels.
    pub window_width: u32,

    /// Browser window height in pixels.
    pub window_height: u32,

    /// Path to a custom Chrome/Chromium binary.
    pub chrome_path: Option<PathBuf>,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            headless: true,
            sandbox: true,
            window_width: 1920,
            window_height: 1080,
            chrome_path: None,
        }
    }
}

impl LaunchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set headless mode
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Builder method: set sandbox mode
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Builder method: set window size
    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Builder method: set a custom Chrome binary path
    pub fn chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }
}

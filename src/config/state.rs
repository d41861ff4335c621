// src/config/state.rs

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Page shown in the raw-markup preview (1-based)
    pub preview_page: u32,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            preview_page: 1,
            window_w: 1100,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub gui: GuiState,
}

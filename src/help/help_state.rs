use crate::scroll::ScrollState;

pub struct HelpPopupState {
    pub visible: bool,
    pub scroll: ScrollState,
}

impl HelpPopupState {
    pub fn new() -> Self {
        Self {
            visible: false,
            scroll: ScrollState::new(),
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        self.scroll.reset();
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.scroll.reset();
    }
}

impl Default for HelpPopupState {
    fn default() -> Self {
        Self::new()
    }
}

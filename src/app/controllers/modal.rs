use crate::app::domain::ClickTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Open/close lifecycle of the export dialog. Both transitions are
/// idempotent; each returns whether anything changed.
#[derive(Debug, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn open(&mut self) -> bool {
        let changed = self.state == ModalState::Closed;
        self.state = ModalState::Open;
        changed
    }

    pub fn close(&mut self) -> bool {
        let changed = self.state == ModalState::Open;
        self.state = ModalState::Closed;
        changed
    }

    /// Clicks on the overlay outside the dialog content close it.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop => self.close(),
            ClickTarget::Content => false,
        }
    }
}

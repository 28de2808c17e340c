/// Kind of call holding the busy indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusyCall {
    Generate,
    Export,
}

impl BusyCall {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Generate => "Generating...",
            Self::Export => "Exporting...",
        }
    }
}

/// Busy indicator shared by the generate and export calls.
///
/// Keeps every call in flight so a second submission that finishes first does
/// not hide the indicator while the other call is still running. The label
/// follows the most recently started call that is still running.
#[derive(Debug, Default)]
pub struct LoadingIndicator {
    in_flight: Vec<BusyCall>,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, call: BusyCall) {
        self.in_flight.push(call);
    }

    /// Called once per finished call, whatever its outcome.
    pub fn end(&mut self, call: BusyCall) {
        if let Some(pos) = self.in_flight.iter().rposition(|c| *c == call) {
            self.in_flight.remove(pos);
        }
    }

    pub fn is_active(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Text for the indicator, or `None` when nothing is running.
    pub fn label(&self) -> Option<&'static str> {
        self.in_flight.last().map(BusyCall::label)
    }
}

use narration_types::{StateError, VerseItemState};

/// One verse row: its state plus, while another verse holds the floor,
/// the state it had before being greyed out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerseStateContext {
    state: VerseItemState,
    disabled_state: Option<VerseItemState>,
}

impl VerseStateContext {
    pub fn new(state: VerseItemState) -> Self {
        Self {
            state,
            disabled_state: None,
        }
    }

    pub fn state(&self) -> VerseItemState {
        self.state
    }

    pub fn temporarily_disabled_state(&self) -> Option<VerseItemState> {
        self.disabled_state
    }

    /// The state the verse will show once restored.
    pub fn resolved_state(&self) -> VerseItemState {
        self.disabled_state.unwrap_or(self.state)
    }

    pub fn change_state(&mut self, request: VerseItemState) -> Result<(), StateError> {
        self.state = self.state.change_state(request)?;
        self.disabled_state = None;
        Ok(())
    }

    /// Grey the verse out. Only the first call takes a snapshot.
    pub fn disable(&mut self) -> Result<(), StateError> {
        if self.disabled_state.is_some() {
            return Ok(());
        }
        let disabled = self
            .state
            .disabled()
            .ok_or(StateError::CannotDisable(self.state))?;
        self.disabled_state = Some(self.state);
        self.state = disabled;
        Ok(())
    }

    pub fn restore(&mut self) {
        if let Some(state) = self.disabled_state.take() {
            self.state = state;
        }
    }
}

use crate::open_state::{OpenState, WatchId};

/// Imperative `open`/`close` handle given to whoever owns a dialog.
///
/// Forwards straight to the dialog's [`OpenState`]. Clones are equal, and a
/// handle keeps its identity for as long as the state lives. After the
/// controller is unmounted the calls only flip the flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalHandle {
    state: OpenState,
}

impl ModalHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) {
        self.state.open();
    }

    pub fn close(&self) {
        self.state.close();
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Observe open/close transitions, e.g. to mirror them into UI state.
    pub fn watch(&self, f: impl Fn(bool) + 'static) -> WatchId {
        self.state.watch(f)
    }

    pub fn unwatch(&self, id: WatchId) -> bool {
        self.state.unwatch(id)
    }

    pub(crate) fn state(&self) -> &OpenState {
        &self.state
    }
}

impl From<OpenState> for ModalHandle {
    fn from(state: OpenState) -> Self {
        Self { state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwards_to_state() {
        let state = OpenState::new();
        let handle = ModalHandle::from(state.clone());

        handle.open();
        assert!(state.is_open());
        handle.close();
        assert!(!handle.is_open());
    }

    #[test]
    fn test_identity() {
        let handle = ModalHandle::new();
        assert_eq!(handle, handle.clone());
        assert_ne!(handle, ModalHandle::new());
    }
}

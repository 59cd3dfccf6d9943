use slotmap::SlotMap;

use crate::error::{Result, SessionError};
use crate::tessellation::TessellationParams;

use super::{RoiParams, RoiSession};

slotmap::new_key_type! {
    /// Generational handle to one client's session.
    pub struct SessionId;
}

/// Arena of independent sessions, one per client or connection.
///
/// Sessions never share points or ROIs. A server keeps one store and hands
/// each client its [`SessionId`].
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: SlotMap<SessionId, RoiSession>,
}

impl SessionStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session with default parameters and returns its ID.
    pub fn open(&mut self) -> SessionId {
        self.sessions.insert(RoiSession::new())
    }

    /// Opens a session with the given parameters and returns its ID.
    pub fn open_with(&mut self, params: RoiParams, tessellation: TessellationParams) -> SessionId {
        self.sessions
            .insert(RoiSession::with_params(params, tessellation))
    }

    /// Returns a reference to the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFound` if the session was closed or never existed.
    pub fn session(&self, id: SessionId) -> Result<&RoiSession> {
        self.sessions
            .get(id)
            .ok_or_else(|| SessionError::NotFound.into())
    }

    /// Returns a mutable reference to the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFound` if the session was closed or never existed.
    pub fn session_mut(&mut self, id: SessionId) -> Result<&mut RoiSession> {
        self.sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound.into())
    }

    /// Closes the session, returning its final state.
    pub fn close(&mut self, id: SessionId) -> Option<RoiSession> {
        self.sessions.remove(id)
    }

    /// Returns the number of open sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if no sessions are open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

use placement_session::Navigator;
use std::sync::Mutex;

/// Captures the navigation requested while handling one request so it can be
/// turned into a redirect response.
#[derive(Debug, Default)]
pub struct PendingRedirect {
    target: Mutex<Option<String>>,
}

impl PendingRedirect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Option<String> {
        self.target.lock().unwrap_or_else(|e| e.into_inner()).take()
    }
}

impl Navigator for PendingRedirect {
    fn navigate(&self, path: &str) {
        *self.target.lock().unwrap_or_else(|e| e.into_inner()) = Some(path.to_string());
    }
}

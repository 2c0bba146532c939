use crate::session::domain::permission::{PermissionGate, PermissionStatus};

/// Permission gate with a preconfigured answer (tests, headless
/// drivers).
pub struct StaticPermissionGate {
    status: PermissionStatus,
}

impl StaticPermissionGate {
    pub fn new(status: PermissionStatus) -> Self {
        Self { status }
    }
}

impl PermissionGate for StaticPermissionGate {
    fn request(&mut self) -> PermissionStatus {
        self.status
    }
}

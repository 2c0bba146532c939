/// Camera permission state as reported by the platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PermissionStatus {
    #[default]
    Undetermined,
    Granted,
    Denied,
}

/// Platform permission boundary. Resolution blocks capture until it
/// completes; the result is re-checked only on explicit re-trigger.
pub trait PermissionGate {
    fn request(&mut self) -> PermissionStatus;
}

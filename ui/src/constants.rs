/// Query parameter carrying the invite code, e.g. `?inviteCode=ABC123`.
pub const INVITE_CODE_PARAM: &str = "inviteCode";

/// Query parameter that lets the notice be closed right away when set to `false`.
pub const WAIT_FOR_CLOSE_PARAM: &str = "waitForClose";

/// How long a toast stays on screen in milliseconds
pub const TOAST_DURATION_MS: u64 = 4000;

#[cfg(feature = "example-data")]
pub const EXAMPLE_INVITE_CODE: &str = "ABC123";

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::DialogError;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

const ID_WIDTH: usize = 8;

/// Identifier of a dialog's render target.
///
/// Chosen once per controller and kept for its whole lifetime, so every render
/// lands in the same container.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RootId(String);

impl RootId {
    /// Use an explicit identifier, e.g. to get stable ids in tests or SSR output.
    pub fn new(value: impl Into<String>) -> Result<Self, DialogError> {
        let value = value.into();
        let valid = !value.is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self(value))
        } else {
            Err(DialogError::InvalidRootId(value))
        }
    }

    /// Next identifier from the process-wide sequence: 8 base-36 digits.
    pub fn generate() -> Self {
        Self(base36(NEXT_ID.fetch_add(1, Ordering::Relaxed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Element id of the render target, e.g. `modal-root-0000000a`.
    pub fn element_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", self.0)
    }
}

impl fmt::Display for RootId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut out = Vec::with_capacity(ID_WIDTH);
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    while out.len() < ID_WIDTH {
        out.push(b'0');
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

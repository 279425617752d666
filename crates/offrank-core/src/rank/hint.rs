/// Caller-supplied expected byte length of the searched term.
///
/// Zero, negative, or absent means no ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TermLengthHint(u64);

impl TermLengthHint {
    pub const NONE: Self = Self(0);

    pub fn new(len: u64) -> Self {
        Self(len)
    }

    /// Build from a host integer. Non-positive values disable the ceiling.
    pub fn from_raw(raw: i64) -> Self {
        Self(u64::try_from(raw).unwrap_or(0))
    }

    /// The hint as a ceiling, if it imposes one.
    pub fn ceiling(self) -> Option<u64> {
        (self.0 > 0).then_some(self.0)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for TermLengthHint {
    fn from(len: u64) -> Self {
        Self(len)
    }
}

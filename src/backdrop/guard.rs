use crate::foundation::core::BlurConfiguration;

/// Whether `next` differs from `previous`.
///
/// Absence of a previous configuration counts as a change. Floats compare bit-exact, with no
/// tolerance, since both sides are declared values rather than measurements.
pub fn changed(previous: Option<&BlurConfiguration>, next: &BlurConfiguration) -> bool {
    match previous {
        None => true,
        Some(prev) => prev.tag() != next.tag(),
    }
}

/// Remembers the last applied configuration of one surface.
#[derive(Clone, Debug, Default)]
pub struct ParameterDiffGuard {
    last_applied: Option<BlurConfiguration>,
}

impl ParameterDiffGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_applied(&self) -> Option<&BlurConfiguration> {
        self.last_applied.as_ref()
    }

    pub fn changed(&self, next: &BlurConfiguration) -> bool {
        changed(self.last_applied.as_ref(), next)
    }

    pub fn record(&mut self, applied: BlurConfiguration) {
        self.last_applied = Some(applied);
    }

    pub fn reset(&mut self) {
        self.last_applied = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/backdrop/guard.rs"]
mod tests;

use crate::backdrop::surface::BackdropSurface;

/// Keeps a backdrop surface's render scale equal to the display's pixel density.
///
/// A backdrop rendering below native density shows visible pixelation at the unblurred edge
/// of the mask.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplayScaleSync {
    density: Option<f64>,
}

impl DisplayScaleSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Density of the display context currently attached, if any.
    pub fn density(&self) -> Option<f64> {
        self.density
    }

    pub fn is_attached(&self) -> bool {
        self.density.is_some()
    }

    #[tracing::instrument(skip(self, surface))]
    pub fn on_attach(&mut self, surface: &mut BackdropSurface, density: f64) -> bool {
        self.apply(surface, density)
    }

    /// Ignored while detached.
    #[tracing::instrument(skip(self, surface))]
    pub fn on_display_context_change(
        &mut self,
        surface: &mut BackdropSurface,
        density: f64,
    ) -> bool {
        if !self.is_attached() {
            tracing::debug!("display context changed while detached");
            return false;
        }
        self.apply(surface, density)
    }

    pub fn on_detach(&mut self) {
        self.density = None;
    }

    fn apply(&mut self, surface: &mut BackdropSurface, density: f64) -> bool {
        if !density.is_finite() || density <= 0.0 {
            tracing::warn!(density, "ignoring invalid display density");
            return false;
        }
        self.density = Some(density);
        surface.set_scale(density);
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/backdrop/display.rs"]
mod tests;

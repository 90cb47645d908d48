//! Presentational composition of child content beneath a variable-blur backdrop.

use crate::backdrop::controller::{BackdropFilterController, ConfigureOutcome, ControllerStats};
use crate::backdrop::display::DisplayScaleSync;
use crate::backdrop::surface::BackdropSurface;
use crate::capability::{CapabilityProvider, select_provider};
use crate::config::opts::EngineOpts;
use crate::config::props::BlurProps;
use crate::foundation::core::{BlurConfiguration, Frame};
use crate::foundation::error::BlurResult;

/// Content drawn beneath the blur overlay, bottom-up in insertion order.
pub trait HostContent {
    fn draw(&self, frame: &mut Frame);
}

impl<F: Fn(&mut Frame)> HostContent for F {
    fn draw(&self, frame: &mut Frame) {
        self(frame)
    }
}

/// A view stacking children under a backdrop that carries the variable blur.
///
/// Props updates reach the filter controller through its change guard, so re-sending equal
/// props never rebuilds the filter.
pub struct EffectHostView {
    props: BlurProps,
    config: BlurConfiguration,
    children: Vec<Box<dyn HostContent>>,
    surface: BackdropSurface,
    controller: BackdropFilterController,
    display: DisplayScaleSync,
}

impl EffectHostView {
    /// Mount a view, selecting the capability provider from `opts`.
    pub fn new(opts: &EngineOpts, props: BlurProps) -> Self {
        Self::with_provider(select_provider(opts), opts, props)
    }

    pub fn with_provider(
        provider: Box<dyn CapabilityProvider>,
        opts: &EngineOpts,
        props: BlurProps,
    ) -> Self {
        let config = props.to_configuration();
        let mut view = Self {
            props,
            config,
            children: Vec::new(),
            surface: BackdropSurface::new(),
            controller: BackdropFilterController::new(provider, opts),
            display: DisplayScaleSync::new(),
        };
        view.controller.update(&view.config, &mut view.surface);
        view
    }

    pub fn props(&self) -> &BlurProps {
        &self.props
    }

    pub fn configuration(&self) -> &BlurConfiguration {
        &self.config
    }

    pub fn surface(&self) -> &BackdropSurface {
        &self.surface
    }

    pub fn stats(&self) -> ControllerStats {
        self.controller.stats()
    }

    pub fn set_props(&mut self, props: BlurProps) -> ConfigureOutcome {
        self.config = props.to_configuration();
        self.props = props;
        self.controller.update(&self.config, &mut self.surface)
    }

    pub fn set_props_json(&mut self, v: serde_json::Value) -> BlurResult<ConfigureOutcome> {
        Ok(self.set_props(BlurProps::from_json_value(v)?))
    }

    pub fn push_child(&mut self, child: impl HostContent + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn on_attach(&mut self, display_density: f64) {
        self.display.on_attach(&mut self.surface, display_density);
        // Detach released the filter; bring it back for the current props.
        self.controller.update(&self.config, &mut self.surface);
    }

    pub fn on_display_context_change(&mut self, display_density: f64) {
        self.display
            .on_display_context_change(&mut self.surface, display_density);
    }

    pub fn on_detach(&mut self) {
        self.display.on_detach();
        self.controller.release(&mut self.surface);
    }

    /// Draw children only, as captured by the backdrop.
    pub fn render_children(&self, width: u32, height: u32) -> BlurResult<Frame> {
        let mut frame = Frame::new(width, height)?;
        for child in &self.children {
            child.draw(&mut frame);
        }
        Ok(frame)
    }

    /// Draw children and composite the filtered backdrop over them.
    ///
    /// Without an installed filter the children come back unmodified.
    pub fn render(&self, width: u32, height: u32) -> BlurResult<Frame> {
        let children = self.render_children(width, height)?;
        self.surface.composite(&children)
    }
}

impl std::fmt::Debug for EffectHostView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHostView")
            .field("props", &self.props)
            .field("children", &self.children.len())
            .field("surface", &self.surface)
            .field("controller", &self.controller)
            .field("display", &self.display)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/view.rs"]
mod tests;

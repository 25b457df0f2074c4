//! The mounted Region Explorer.
//!
//! Couples the highlight state with the diagram layout. The layout is only
//! recomputed when the canvas size changes; styles follow the effective
//! region immediately.

use bayes_model::Region;

use crate::config::ExplorerConfig;
use crate::controls::FormulaControl;
use crate::layout::{Point2, VennLayout};
use crate::state::RegionExplorer;
use crate::styles::RegionStyles;
use crate::svg::render_venn;

/// Region Explorer state holder.
#[derive(Debug, Clone)]
pub struct ExplorerWidget {
    config: ExplorerConfig,
    /// Outer canvas size the layout was computed for
    size: (f64, f64),
    layout: VennLayout,
    state: RegionExplorer,
}

impl ExplorerWidget {
    /// Creates a widget laid out for the configured canvas.
    pub fn new(config: ExplorerConfig) -> Self {
        let size = (config.canvas.width, config.canvas.height);
        let layout = VennLayout::new(size.0, size.1, config.canvas.margin);
        Self {
            config,
            size,
            layout,
            state: RegionExplorer::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ExplorerConfig::default())
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Re-lays out the diagram for a new outer canvas size.
    ///
    /// Returns whether the layout changed. Highlight state is kept.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        if self.size == (width, height) {
            return false;
        }
        self.size = (width, height);
        self.layout = VennLayout::new(width, height, self.config.canvas.margin);
        tracing::debug!(
            "Venn layout {}x{} radius {:.1}",
            self.layout.width,
            self.layout.height,
            self.layout.radius
        );
        true
    }

    pub fn layout(&self) -> &VennLayout {
        &self.layout
    }

    pub fn state(&self) -> &RegionExplorer {
        &self.state
    }

    pub fn effective(&self) -> Region {
        self.state.effective()
    }

    /// Styles for the current effective region.
    pub fn styles(&self) -> RegionStyles {
        RegionStyles::for_region(self.state.effective())
    }

    pub fn control_entered(&mut self, control: FormulaControl) {
        control.enter(&mut self.state);
    }

    pub fn control_left(&mut self) {
        self.state.pointer_leave();
    }

    /// Returns false for controls that ignore clicks.
    pub fn control_clicked(&mut self, control: FormulaControl) -> bool {
        control.press(&mut self.state)
    }

    pub fn background_clicked(&mut self) {
        self.state.click_background();
    }

    /// Whether `control` is drawn active.
    pub fn is_active(&self, control: FormulaControl) -> bool {
        control.is_active(&self.state)
    }

    /// Lens polygon at the configured resolution.
    pub fn lens_outline(&self) -> Vec<Point2> {
        self.layout.lens_outline(self.config.canvas.lens_segments)
    }

    /// Renders the current frame as SVG.
    pub fn render_svg(&self) -> String {
        render_venn(
            &self.layout,
            &self.styles(),
            &self.config.canvas,
            &self.config.labels,
        )
    }
}

//! Top-level application state: the parsed dataset plus everything derived
//! from it. A frontend owns one `SceneState`, forwards user input to it, and
//! steps it once per frame with its own clock.

use glam::Vec3;
use rand::prelude::*;

use crate::camera::OrbitCamera;
use crate::color::{worth_bucket, worth_color};
use crate::constants::SCATTER_EXTENT;
use crate::data::{Item, WorthRange};
use crate::layout::{Layout, LayoutTargets};
use crate::render::{panel_instance, PanelInstance};
use crate::transition::{PanelState, TransitionEngine};

pub struct SceneState {
    pub items: Vec<Item>,
    pub panels: Vec<PanelState>,
    pub targets: LayoutTargets,
    pub worth_range: WorthRange,
    pub panel_colors: Vec<[f32; 4]>,
    pub camera: OrbitCamera,
    pub current_layout: Layout,
    engine: TransitionEngine,
}

impl SceneState {
    /// Build the scene for a parsed dataset. Layout targets and panel colors
    /// are computed once here; panels start scattered uniformly through a
    /// cube around the origin, reproducibly for a given `seed`.
    pub fn new(items: Vec<Item>, seed: u64, aspect: f32) -> Self {
        let worth_range = WorthRange::of(&items);
        let targets = LayoutTargets::compute(items.len());
        let panel_colors = items
            .iter()
            .map(|item| {
                let [r, g, b] = worth_color(worth_bucket(item.net_worth, worth_range));
                [r, g, b, 1.0]
            })
            .collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut scatter = || rng.gen_range(-SCATTER_EXTENT..SCATTER_EXTENT);
        let panels = (0..items.len())
            .map(|_| PanelState {
                position: Vec3::new(scatter(), scatter(), scatter()),
                rotation: Vec3::ZERO,
            })
            .collect();
        log::info!(
            "[scene] {} panels, net worth {:.0}..{:.0}",
            items.len(),
            worth_range.min,
            worth_range.max
        );
        Self {
            items,
            panels,
            targets,
            worth_range,
            panel_colors,
            camera: OrbitCamera::new(aspect),
            current_layout: Layout::Table,
            engine: TransitionEngine::new(),
        }
    }

    /// Start animating every panel toward `layout`. Replaces any transition
    /// already in flight.
    pub fn show_layout(&mut self, layout: Layout, duration_ms: f64, now_ms: f64) {
        log::info!("[scene] layout -> {}", layout.name());
        self.current_layout = layout;
        self.engine.start(
            &self.panels,
            self.targets.for_layout(layout),
            duration_ms,
            now_ms,
        );
    }

    /// Step the active transition. Returns true while a redraw is needed.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        self.engine.advance(&mut self.panels, now_ms)
    }

    pub fn is_transitioning(&self) -> bool {
        self.engine.is_active()
    }

    /// Per-panel GPU instances, index-aligned with `items`.
    pub fn instances(&self) -> Vec<PanelInstance> {
        self.panels
            .iter()
            .zip(self.panel_colors.iter())
            .map(|(panel, color)| panel_instance(panel, *color))
            .collect()
    }
}

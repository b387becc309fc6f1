//! UI layout: instructions line and shape-selection tabs
//!
//! Pure layout and hit-testing. Text is carried as strings only; rasterizing
//! it is up to whatever backend draws the frame.

use glam::Vec2;

use crate::consts::VIEW_WIDTH;
use crate::sim::SHAPE_OPTIONS;

pub const INSTRUCTIONS: &str = "Aim with mouse, right-click to launch. Click a tab to change shape.";
/// Vertical center of the instructions line
pub const INSTRUCTIONS_Y: f32 = 20.0;

pub const TAB_WIDTH: f32 = 90.0;
pub const TAB_HEIGHT: f32 = 30.0;
pub const TAB_MARGIN: f32 = 9.0;
/// Top of the tab row, just below the instructions
pub const TAB_ROW_Y: f32 = 50.0;

/// A clickable tab selecting a boundary shape
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeTab {
    pub sides: u32,
    pub label: &'static str,
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl ShapeTab {
    /// Half-open containment: the right and bottom borders belong to the next tab
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.min + self.size;
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }
}

/// Lay out one tab per selectable shape, left to right
pub fn layout_tabs() -> Vec<ShapeTab> {
    let mut x = TAB_MARGIN;
    SHAPE_OPTIONS
        .iter()
        .map(|&(sides, label)| {
            let tab = ShapeTab {
                sides,
                label,
                min: Vec2::new(x, TAB_ROW_Y),
                size: Vec2::new(TAB_WIDTH, TAB_HEIGHT),
            };
            x += TAB_WIDTH + TAB_MARGIN;
            tab
        })
        .collect()
}

/// The tab under `point`, if any
pub fn tab_at(tabs: &[ShapeTab], point: Vec2) -> Option<&ShapeTab> {
    tabs.iter().find(|tab| tab.contains(point))
}

/// Where the instructions line is anchored (centered horizontally)
pub fn instructions_anchor() -> Vec2 {
    Vec2::new(VIEW_WIDTH / 2.0, INSTRUCTIONS_Y)
}

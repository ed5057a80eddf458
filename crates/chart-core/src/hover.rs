// File: crates/chart-core/src/hover.rs
// Summary: Per-point hit regions and the single active tooltip of a chart instance.
//
// Regions of different series may overlap (same index, close values). Which one
// wins is not specified: events resolve to whichever region fired, and
// `hit_test` returns the first region in series order. This is not a
// nearest-point search.

use crate::geometry::Point;
use crate::types::{TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y};

/// Identifies one plotted point: series position and point index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HitId {
    pub series: usize,
    pub point: usize,
}

/// Invisible circular target around a marker.
#[derive(Clone, Debug, PartialEq)]
pub struct HitRegion {
    pub id: HitId,
    pub center: Point,
    pub radius: f64,
    pub series_name: String,
    pub label: String,
    pub value: f64,
}

impl HitRegion {
    /// `"{series} - {label}: {value}"`
    pub fn content(&self) -> String {
        tooltip_text(&self.series_name, &self.label, self.value)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.distance_sq(self.center) <= self.radius * self.radius
    }

    /// Tooltip payload for this region. `origin` is the chart's offset inside its
    /// container; the result is in container coordinates.
    pub fn tooltip(&self, origin: Point) -> Tooltip {
        Tooltip {
            id: self.id,
            series_name: self.series_name.clone(),
            label: self.label.clone(),
            value: self.value,
            position: Point::new(
                origin.x + self.center.x + TOOLTIP_OFFSET_X,
                origin.y + self.center.y - TOOLTIP_OFFSET_Y,
            ),
        }
    }
}

/// First region containing `p`, in series then point order.
pub fn hit_test(regions: &[HitRegion], p: Point) -> Option<&HitRegion> {
    if !p.is_finite() {
        return None;
    }
    regions.iter().find(|r| r.contains(p))
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub id: HitId,
    pub series_name: String,
    pub label: String,
    pub value: f64,
    /// Container-relative display position, already offset above the point.
    pub position: Point,
}

impl Tooltip {
    pub fn content(&self) -> String {
        tooltip_text(&self.series_name, &self.label, self.value)
    }
}

fn tooltip_text(series_name: &str, label: &str, value: f64) -> String {
    format!("{series_name} - {label}: {value}")
}

/// What a tooltip display component receives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipView {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub content: String,
}

/// Pointer events delivered by the host UI loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Enter(HitId),
    Leave(HitId),
    /// Raw pointer position in chart pixels; resolved with [`hit_test`].
    Move(Point),
    /// Pointer left the chart entirely.
    Exit,
}

/// Hover state owned by one chart instance. At most one tooltip is active.
#[derive(Clone, Debug, Default)]
pub struct TooltipState {
    origin: Point,
    active: Option<Tooltip>,
}

impl TooltipState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset of the chart surface inside its container.
    pub fn with_origin(origin: Point) -> Self {
        Self { origin, active: None }
    }

    pub fn active(&self) -> Option<&Tooltip> {
        self.active.as_ref()
    }

    /// Pointer entered `region`; replaces whatever was active.
    pub fn enter(&mut self, region: &HitRegion) {
        self.active = Some(region.tooltip(self.origin));
    }

    /// Pointer left `id`. A leave for a region that was already replaced is ignored.
    pub fn leave(&mut self, id: HitId) {
        if self.active.as_ref().is_some_and(|t| t.id == id) {
            self.active = None;
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Apply one event against the chart's regions. Returns true when the active tooltip changed.
    pub fn handle(&mut self, event: PointerEvent, regions: &[HitRegion]) -> bool {
        let before = self.active.as_ref().map(|t| t.id);
        match event {
            PointerEvent::Enter(id) => {
                if let Some(region) = regions.iter().find(|r| r.id == id) {
                    self.enter(region);
                }
            }
            PointerEvent::Leave(id) => self.leave(id),
            PointerEvent::Move(p) => match hit_test(regions, p) {
                Some(region) if before != Some(region.id) => self.enter(region),
                Some(_) => {}
                None => self.clear(),
            },
            PointerEvent::Exit => self.clear(),
        }
        before != self.active.as_ref().map(|t| t.id)
    }

    pub fn view(&self) -> TooltipView {
        match &self.active {
            Some(t) => TooltipView {
                visible: true,
                x: t.position.x,
                y: t.position.y,
                content: t.content(),
            },
            None => TooltipView::default(),
        }
    }
}

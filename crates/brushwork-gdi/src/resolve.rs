//! Local-to-surface coordinate resolution.
//!
//! Widgets paint in their own local space. The surface expects absolute
//! screen coordinates, or coordinates relative to the innermost clip region
//! once one is open. This module turns the former into the latter.

use std::collections::HashMap;

use brushwork_engine::coords::{Rect, Vec2};

/// Opaque handle of a widget known to the host's layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

/// Supplies the absolute screen origin of a widget.
///
/// Implementations account for ancestor offsets and scrolling. They are
/// queried many times per paint pass and must not have side effects.
pub trait PositionProvider {
    fn screen_origin(&self, widget: WidgetId) -> Vec2;
}

/// Flat lookup table; unknown widgets sit at the screen origin.
impl PositionProvider for HashMap<WidgetId, Vec2> {
    fn screen_origin(&self, widget: WidgetId) -> Vec2 {
        match self.get(&widget) {
            Some(origin) => *origin,
            None => {
                log::trace!("no screen origin for {widget:?}, using zero");
                Vec2::zero()
            }
        }
    }
}

/// One open clip group.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClipGroup {
    /// Container widget that opened the group.
    pub owner: WidgetId,
    /// Offset and size relative to the owner's origin.
    pub rect: Rect,
    /// Absolute origin of the clip region (owner origin + `rect.origin`).
    pub screen_origin: Vec2,
}

/// LIFO stack of open clip groups.
#[derive(Debug, Default, Clone)]
pub struct GroupStack {
    groups: Vec<ClipGroup>,
}

impl GroupStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, group: ClipGroup) {
        self.groups.push(group);
    }

    pub fn pop(&mut self) -> Option<ClipGroup> {
        self.groups.pop()
    }

    #[inline]
    pub fn innermost(&self) -> Option<&ClipGroup> {
        self.groups.last()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Origin that surface coordinates are currently relative to.
    #[inline]
    pub fn surface_origin(&self) -> Vec2 {
        self.innermost().map_or(Vec2::zero(), |g| g.screen_origin)
    }

    /// Maps an absolute screen point into the current surface space.
    #[inline]
    pub fn to_surface(&self, absolute: Vec2) -> Vec2 {
        absolute - self.surface_origin()
    }

    /// Resolves `local`, given in the space of a widget whose absolute origin
    /// is `widget_origin`.
    ///
    /// Without groups the result is absolute. With groups it is relative to
    /// the innermost group's screen origin.
    #[inline]
    pub fn resolve(&self, widget_origin: Vec2, local: Vec2) -> Vec2 {
        match self.innermost() {
            None => widget_origin + local,
            Some(group) => widget_origin - group.screen_origin + local,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(owner: u64, origin: Vec2, rect: Rect) -> ClipGroup {
        ClipGroup { owner: WidgetId(owner), rect, screen_origin: origin + rect.origin }
    }

    #[test]
    fn no_group_adds_widget_origin() {
        let stack = GroupStack::new();
        assert_eq!(stack.resolve(Vec2::new(10.0, 20.0), Vec2::new(1.0, 2.0)), Vec2::new(11.0, 22.0));
        assert_eq!(stack.resolve(Vec2::zero(), Vec2::new(1.0, 2.0)), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn innermost_group_wins() {
        let mut stack = GroupStack::new();
        stack.push(group(1, Vec2::new(100.0, 100.0), Rect::new(0.0, 0.0, 50.0, 50.0)));
        stack.push(group(2, Vec2::new(120.0, 130.0), Rect::new(5.0, 5.0, 20.0, 20.0)));
        let p = stack.resolve(Vec2::new(130.0, 140.0), Vec2::new(1.0, 1.0));
        assert_eq!(p, Vec2::new(6.0, 6.0));
        stack.pop();
        let p = stack.resolve(Vec2::new(130.0, 140.0), Vec2::new(1.0, 1.0));
        assert_eq!(p, Vec2::new(31.0, 41.0));
    }

    #[test]
    fn resolve_plus_surface_origin_is_absolute() {
        let mut stack = GroupStack::new();
        stack.push(group(1, Vec2::new(40.0, 8.0), Rect::new(2.0, 3.0, 50.0, 50.0)));
        let widget = Vec2::new(60.0, 20.0);
        let local = Vec2::new(4.0, 4.0);
        assert_eq!(stack.resolve(widget, local) + stack.surface_origin(), widget + local);
        assert_eq!(stack.to_surface(widget), widget - Vec2::new(42.0, 11.0));
    }

    #[test]
    fn unknown_widget_is_at_origin() {
        let mut positions = HashMap::new();
        positions.insert(WidgetId(1), Vec2::new(3.0, 4.0));
        assert_eq!(positions.screen_origin(WidgetId(1)), Vec2::new(3.0, 4.0));
        assert_eq!(positions.screen_origin(WidgetId(9)), Vec2::zero());
    }
}

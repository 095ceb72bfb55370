use brushwork_engine::config::{self, DrawConfig};
use brushwork_engine::coords::{Rect, Vec2};
use brushwork_engine::surface::Surface;
use brushwork_engine::text::FontRegistry;
use brushwork_engine::texture::DefaultAssets;

use crate::error::DrawError;
use crate::resolve::{ClipGroup, GroupStack, PositionProvider, WidgetId};

/// Read-only resources shared by every facade in the process.
#[derive(Debug, Copy, Clone)]
pub struct SharedResources<'a> {
    pub fonts: &'a FontRegistry,
    pub assets: DefaultAssets,
}

/// Immediate-mode drawing facade handed to a widget's paint handler.
///
/// Every call resolves widget-local coordinates through the bound widget and
/// the open clip groups, renders synchronously into the surface and returns.
/// Nothing is deferred.
///
/// Calls never fail. Anything that could not be drawn is logged and, in
/// strict mode, collected as a [`DrawError`].
///
/// Acquire one per paint pass (or [`reset`](Self::reset) it). Groups still
/// open when the facade is dropped are closed on the surface.
pub struct Graphics<'a> {
    pub(crate) surface: &'a mut dyn Surface,
    positions: &'a dyn PositionProvider,
    pub(crate) resources: SharedResources<'a>,
    bound: Option<WidgetId>,
    groups: GroupStack,
    pub(crate) config: DrawConfig,
    strict: bool,
    errors: Vec<DrawError>,
}

impl<'a> Graphics<'a> {
    /// Binds a facade to `surface`. Snapshots the installed [`DrawConfig`].
    pub fn new(
        surface: &'a mut dyn Surface,
        positions: &'a dyn PositionProvider,
        resources: SharedResources<'a>,
        bound: Option<WidgetId>,
    ) -> Self {
        Self {
            surface,
            positions,
            resources,
            bound,
            groups: GroupStack::new(),
            config: config::current(),
            strict: false,
            errors: Vec::new(),
        }
    }

    /// Overrides the process-wide toggles for this facade only.
    pub fn with_config(mut self, config: DrawConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> DrawConfig {
        self.config
    }

    #[inline]
    pub fn bound(&self) -> Option<WidgetId> {
        self.bound
    }

    /// Collect degradations instead of only logging them.
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Drains the degradations collected in strict mode.
    pub fn take_errors(&mut self) -> Vec<DrawError> {
        std::mem::take(&mut self.errors)
    }

    /// Rebinds the facade for a new paint pass.
    pub fn reset(&mut self, bound: Option<WidgetId>) {
        self.close_open_groups();
        self.bound = bound;
    }

    // ── groups ────────────────────────────────────────────────────────────

    /// Opens a clip group for `owner`'s children. `rect` is relative to the
    /// owner's origin. Until the matching [`end_group`](Self::end_group),
    /// resolved coordinates are relative to the group.
    pub fn begin_group(&mut self, owner: WidgetId, rect: Rect) {
        let screen_origin = self.positions.screen_origin(owner) + rect.origin;
        let clip = Rect::from_origin_size(self.groups.to_surface(screen_origin), rect.size);
        self.surface.begin_clip(clip);
        self.groups.push(ClipGroup { owner, rect, screen_origin });
        log::trace!("begin_group {owner:?} at {screen_origin:?} (depth {})", self.groups.depth());
    }

    /// Closes the innermost clip group.
    pub fn end_group(&mut self) {
        match self.groups.pop() {
            Some(group) => {
                self.surface.end_clip();
                log::trace!("end_group {:?} (depth {})", group.owner, self.groups.depth());
            }
            None => self.report(DrawError::UnbalancedGroup),
        }
    }

    /// Runs `f` inside a clip group, closing it on return.
    pub fn with_group<R>(&mut self, owner: WidgetId, rect: Rect, f: impl FnOnce(&mut Self) -> R) -> R {
        self.begin_group(owner, rect);
        let out = f(self);
        self.end_group();
        out
    }

    #[inline]
    pub fn group_depth(&self) -> usize {
        self.groups.depth()
    }

    // ── resolution ────────────────────────────────────────────────────────

    /// Absolute origin of the bound widget; zero when nothing is bound.
    #[inline]
    pub(crate) fn widget_origin(&self) -> Vec2 {
        self.bound.map_or(Vec2::zero(), |w| self.positions.screen_origin(w))
    }

    /// Maps a widget-local point into the surface's current space.
    pub fn resolve(&self, local: Vec2) -> Vec2 {
        self.groups.resolve(self.widget_origin(), local)
    }

    pub fn resolve_rect(&self, local: Rect) -> Rect {
        Rect::from_origin_size(self.resolve(local.origin), local.size)
    }

    // ── diagnostics ───────────────────────────────────────────────────────

    pub(crate) fn report(&mut self, err: DrawError) {
        match &err {
            DrawError::UnbalancedGroup | DrawError::Surface(_) => log::warn!("{err}"),
            _ => log::debug!("{err}"),
        }
        if self.strict {
            self.errors.push(err);
        }
    }

    /// `Unbound` degradation unless a widget is bound.
    pub(crate) fn require_bound(&mut self, op: &'static str) -> bool {
        if self.bound.is_some() {
            return true;
        }
        self.report(DrawError::Unbound { op });
        false
    }

    fn close_open_groups(&mut self) {
        if self.groups.is_empty() {
            return;
        }
        log::warn!("{} clip group(s) left open, closing", self.groups.depth());
        while self.groups.pop().is_some() {
            self.surface.end_clip();
        }
    }
}

impl Drop for Graphics<'_> {
    fn drop(&mut self) {
        self.close_open_groups();
    }
}


#[cfg(test)]
mod tests {
    use brushwork_engine::coords::{Rect, Vec2};
    use brushwork_engine::paint::Color;
    use brushwork_engine::scene::DrawCmd;

    use super::fixture::{Fixture, PANEL, WIDGET};
    use crate::error::DrawError;

    #[test]
    fn unbound_resolution_is_identity() {
        let mut fx = Fixture::new();
        fx.paint(None, |g| {
            assert_eq!(g.resolve(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
        });
    }

    #[test]
    fn bound_resolution_adds_widget_origin() {
        let mut fx = Fixture::new();
        fx.paint(Some(WIDGET), |g| {
            assert_eq!(g.resolve(Vec2::new(3.0, 4.0)), Vec2::new(103.0, 54.0));
        });
    }

    #[test]
    fn group_opens_a_clip_at_owner_plus_offset() {
        let mut fx = Fixture::new();
        fx.paint(Some(WIDGET), |g| {
            g.begin_group(PANEL, Rect::new(10.0, 5.0, 200.0, 100.0));
            assert_eq!(g.group_depth(), 1);
            assert_eq!(g.resolve(Vec2::zero()), Vec2::new(10.0, 5.0));
            g.fill_rectangle(Color::RED, Rect::new(0.0, 0.0, 4.0, 4.0));
            g.end_group();
        });
        let item = &fx.list.items()[0];
        assert_eq!(item.clip_rect, Some(Rect::new(90.0, 45.0, 200.0, 100.0)));
        let DrawCmd::Blit(blit) = &item.cmd else { panic!("expected blit") };
        assert_eq!(blit.rect.origin, Vec2::new(100.0, 50.0));
        assert_eq!(fx.list.clip_depth(), 0);
    }

    #[test]
    fn nested_groups_compose_to_the_same_absolute_position() {
        let mut fx = Fixture::new();
        let local = Rect::new(7.0, 9.0, 3.0, 3.0);
        fx.paint(Some(WIDGET), |g| {
            g.fill_rectangle(Color::RED, local);
            g.with_group(PANEL, Rect::new(5.0, 5.0, 300.0, 300.0), |g| {
                g.with_group(WIDGET, Rect::new(-4.0, 2.0, 100.0, 100.0), |g| {
                    g.fill_rectangle(Color::RED, local);
                });
                g.fill_rectangle(Color::RED, local);
            });
        });
        let origins: Vec<Vec2> = fx.list.blits().map(|b| b.rect.origin).collect();
        assert_eq!(origins, vec![Vec2::new(107.0, 59.0); 3]);
        assert_eq!(fx.list.clip_depth(), 0);
    }

    #[test]
    fn unbalanced_end_group_is_reported() {
        let mut fx = Fixture::new();
        let errors = fx.paint(None, |g| g.end_group());
        assert_eq!(errors, vec![DrawError::UnbalancedGroup]);
    }

    #[test]
    fn dropping_closes_open_groups() {
        let mut fx = Fixture::new();
        fx.paint(Some(WIDGET), |g| {
            g.begin_group(PANEL, Rect::new(0.0, 0.0, 10.0, 10.0));
            g.begin_group(PANEL, Rect::new(0.0, 0.0, 10.0, 10.0));
        });
        assert_eq!(fx.list.clip_depth(), 0);
    }

    #[test]
    fn reset_rebinds_and_closes_groups() {
        let mut fx = Fixture::new();
        fx.paint(Some(WIDGET), |g| {
            g.begin_group(PANEL, Rect::new(0.0, 0.0, 10.0, 10.0));
            g.reset(Some(PANEL));
            assert_eq!(g.group_depth(), 0);
            assert_eq!(g.bound(), Some(PANEL));
            assert_eq!(g.resolve(Vec2::zero()), Vec2::new(80.0, 40.0));
        });
        assert_eq!(fx.list.clip_depth(), 0);
    }
}

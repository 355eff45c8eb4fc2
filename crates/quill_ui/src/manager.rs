//! UI manager
//!
//! Owns the widget trees, the event system, and the frame lifecycle:
//! layout resolution happens before drawing in every frame where anything
//! moved, so render commands and hit tests always see consistent
//! rectangles.
//!
//! Root widgets keep insertion order. Drawing walks them front to back in
//! that order; pointer dispatch walks them in reverse so the visually
//! topmost widget is tested first, and a consumed event stops there.

use std::collections::HashSet;

use crate::events::{EventArg, EventSystem, UiEvent, UiEventType};
use crate::foundation::math::{Rect, Vec4};
use crate::input::PointerButton;
use crate::render::backend::BackendResult;
use crate::render::commands::TextColorMode;
use crate::render::vertex::{QuadVertex, UiVertex};
use crate::render::{RenderBackend, RenderCommand, RenderContext, TextureHandle};
use crate::text::FontCache;
use crate::widgets::{TextField, Widget, WidgetError, WidgetKind};

/// Errors raised by manager operations
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// Invalid widget construction or mutation
    #[error(transparent)]
    Widget(#[from] WidgetError),

    /// No widget with the given id exists in any tree
    #[error("No widget with id '{0}'")]
    WidgetNotFound(String),
}

/// Manager for all UI widgets and their lifecycle
pub struct UiManager {
    widgets: Vec<Widget>,
    /// Every id in every tree, for O(1) duplicate checks at insertion
    ids: HashSet<String>,
    events: EventSystem,
    screen_width: f32,
    screen_height: f32,
    /// Seconds since creation, drives text effects and event timestamps
    time: f64,
    layout_dirty: bool,
}

impl UiManager {
    /// Create an empty manager for the given screen size
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            widgets: Vec::new(),
            ids: HashSet::new(),
            events: EventSystem::new(),
            screen_width,
            screen_height,
            time: 0.0,
            layout_dirty: true,
        }
    }

    /// The screen rectangle root widgets resolve against
    fn screen_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.screen_width, self.screen_height)
    }

    /// Add a root widget
    ///
    /// Every id in the incoming subtree must be unique across all trees.
    pub fn add(&mut self, widget: Widget) -> Result<(), UiError> {
        let mut incoming = Vec::new();
        widget.collect_ids(&mut incoming);
        for id in &incoming {
            if self.ids.contains(id) {
                return Err(WidgetError::DuplicateId(id.clone()).into());
            }
        }
        self.ids.extend(incoming);
        self.widgets.push(widget);
        self.layout_dirty = true;
        Ok(())
    }

    /// Remove a root widget by id, returning it
    pub fn remove(&mut self, id: &str) -> Option<Widget> {
        let index = self.widgets.iter().position(|w| w.base.id == id)?;
        let widget = self.widgets.remove(index);
        let mut removed = Vec::new();
        widget.collect_ids(&mut removed);
        for removed_id in &removed {
            self.ids.remove(removed_id);
        }
        self.layout_dirty = true;
        Some(widget)
    }

    /// Find a widget by id across all trees
    pub fn find(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find_map(|w| w.find(id))
    }

    /// Find a widget by id across all trees, mutably
    ///
    /// Size-affecting mutations require [`Self::mark_dirty`] so the next
    /// frame re-resolves layout; the typed helpers below do this
    /// automatically.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Widget> {
        self.widgets.iter_mut().find_map(|w| w.find_mut(id))
    }

    /// Advance time and clear transient per-frame state
    pub fn update(&mut self, dt: f64) {
        self.time += dt;
        self.events.update_time(self.time);
        for widget in &mut self.widgets {
            widget.clear_transient_state();
        }
    }

    /// Seconds since the manager was created
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Force a layout re-resolution on the next frame
    pub fn mark_dirty(&mut self) {
        self.layout_dirty = true;
    }

    /// Handle a host window resize
    ///
    /// Recomputes the projection and re-resolves every anchor against the
    /// new screen rectangle on the next frame.
    pub fn resize(&mut self, width: f32, height: f32, context: &mut RenderContext) {
        self.screen_width = width;
        self.screen_height = height;
        context.resize(width, height);
        self.layout_dirty = true;
    }

    /// Resolve all widget trees against the screen rectangle
    pub fn resolve(&mut self, fonts: &FontCache) {
        let screen = self.screen_rect();
        for widget in &mut self.widgets {
            widget.resolve(screen, fonts);
        }
        self.layout_dirty = false;
    }

    /// Resolve (if needed) and render all widgets through the backend
    ///
    /// Uploads pending atlases, re-resolves layout when dirty, then batches
    /// render commands without reordering them: consecutive quads share one
    /// buffer, consecutive text runs share one buffer per atlas. Later
    /// commands therefore always draw over earlier ones.
    pub fn render(
        &mut self,
        context: &mut RenderContext,
        backend: &mut dyn RenderBackend,
    ) -> BackendResult<()> {
        context.prepare_atlases(backend)?;

        if self.layout_dirty {
            self.resolve(context.fonts());
        }

        #[allow(clippy::cast_possible_truncation)]
        let elapsed = self.time as f32;
        let mut commands = Vec::new();
        for widget in &self.widgets {
            widget.draw(context.fonts(), elapsed, &mut commands);
        }

        backend.begin_ui_pass(context.projection())?;
        for batch in &batch_commands(&commands) {
            match batch {
                Batch::Quads { vertices, draws } => backend.draw_quad_batch(vertices, draws)?,
                Batch::Text {
                    atlas,
                    vertices,
                    draws,
                } => backend.draw_text_batch(*atlas, vertices, draws)?,
            }
        }
        backend.end_ui_pass()
    }

    /// Route a pointer-down event to the topmost widget under (x, y)
    ///
    /// Any prior text field focus is dropped first; clicking a field gives
    /// it focus back. Returns true if some widget consumed the event, in
    /// which case the host should not treat the press as a world
    /// interaction.
    pub fn pointer_down(&mut self, x: f32, y: f32, button: PointerButton) -> bool {
        for widget in &mut self.widgets {
            widget.clear_focus();
        }

        let timestamp = self.time;
        for widget in self.widgets.iter_mut().rev() {
            if widget.pointer_down(x, y, button, &mut self.events, timestamp) {
                return true;
            }
        }
        false
    }

    /// Forward a typed character to the focused text field
    ///
    /// Fires `TextChanged` when the content changes; a no-op without a
    /// focused field.
    pub fn key_char(&mut self, ch: char) {
        let timestamp = self.time;
        if let Some((id, text)) = self.edit_focused(|field| field.push_char(ch)) {
            self.events.send(
                UiEvent::new(UiEventType::TextChanged, timestamp)
                    .with_arg("widget", EventArg::WidgetId(id))
                    .with_arg("text", EventArg::Text(text)),
            );
        }
    }

    /// Forward a backspace to the focused text field
    pub fn key_backspace(&mut self) {
        let timestamp = self.time;
        if let Some((id, text)) = self.edit_focused(TextField::backspace) {
            self.events.send(
                UiEvent::new(UiEventType::TextChanged, timestamp)
                    .with_arg("widget", EventArg::WidgetId(id))
                    .with_arg("text", EventArg::Text(text)),
            );
        }
    }

    /// Apply an edit to the focused field, returning (id, new text) if the
    /// content changed
    fn edit_focused(&mut self, edit: impl FnOnce(&mut TextField) -> bool) -> Option<(String, String)> {
        let widget = self
            .widgets
            .iter_mut()
            .find_map(|w| find_focused_field(w))?;
        let id = widget.base.id.clone();
        if let WidgetKind::TextField(field) = &mut widget.kind {
            if edit(field) {
                return Some((id, field.text.clone()));
            }
        }
        None
    }

    /// Replace a label's text; its size re-derives on the next resolve
    pub fn set_label_text(&mut self, id: &str, text: impl Into<String>) -> Result<(), UiError> {
        let widget = self
            .find_mut(id)
            .ok_or_else(|| UiError::WidgetNotFound(id.to_string()))?;
        match &mut widget.kind {
            WidgetKind::Label(label) => {
                label.text = text.into();
                self.layout_dirty = true;
                Ok(())
            }
            _ => Err(WidgetError::NotAContainer(id.to_string()).into()),
        }
    }

    /// Set a scale widget's value, firing `ValueChanged` if it changed
    pub fn set_scale_value(&mut self, id: &str, value: f32) -> Result<(), UiError> {
        let timestamp = self.time;
        let widget = self
            .find_mut(id)
            .ok_or_else(|| UiError::WidgetNotFound(id.to_string()))?;
        match &mut widget.kind {
            WidgetKind::Scale(scale) => {
                if scale.set_value(value) {
                    let new_value = scale.value();
                    self.events.send(
                        UiEvent::new(UiEventType::ValueChanged, timestamp)
                            .with_arg("widget", EventArg::WidgetId(id.to_string()))
                            .with_arg("value", EventArg::Value(new_value)),
                    );
                    self.layout_dirty = true;
                }
                Ok(())
            }
            _ => Err(WidgetError::NotAContainer(id.to_string()).into()),
        }
    }

    /// Set a scale widget's range, firing `ValueChanged` if re-clamping
    /// moved the value
    pub fn set_scale_range(&mut self, id: &str, min: f32, max: f32) -> Result<(), UiError> {
        let timestamp = self.time;
        let widget = self
            .find_mut(id)
            .ok_or_else(|| UiError::WidgetNotFound(id.to_string()))?;
        if let Some(new_value) = widget.set_scale_range(min, max)? {
            self.events.send(
                UiEvent::new(UiEventType::ValueChanged, timestamp)
                    .with_arg("widget", EventArg::WidgetId(id.to_string()))
                    .with_arg("value", EventArg::Value(new_value)),
            );
        }
        self.layout_dirty = true;
        Ok(())
    }

    /// The event system, for handler registration
    pub fn events_mut(&mut self) -> &mut EventSystem {
        &mut self.events
    }

    /// Drain pending events for polling-style applications
    pub fn drain_events(&mut self) -> Vec<UiEvent> {
        self.events.drain()
    }

    /// Dispatch pending events to registered handlers
    pub fn dispatch_events(&mut self) {
        self.events.dispatch();
    }

    /// Number of root widgets
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether the manager holds no widgets
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl std::fmt::Debug for UiManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiManager")
            .field("widgets", &self.widgets.len())
            .field("screen", &(self.screen_width, self.screen_height))
            .field("time", &self.time)
            .finish()
    }
}

fn find_focused_field(widget: &mut Widget) -> Option<&mut Widget> {
    if matches!(&widget.kind, WidgetKind::TextField(f) if f.focused) {
        return Some(widget);
    }
    for child in widget.children_mut() {
        if let Some(found) = find_focused_field(child) {
            return Some(found);
        }
    }
    None
}

/// One draw call's worth of consecutive same-kind commands
enum Batch {
    /// Consecutive solid quads in one buffer
    Quads {
        vertices: Vec<QuadVertex>,
        draws: Vec<(usize, usize, Vec4)>,
    },
    /// Consecutive text runs sharing one atlas texture
    Text {
        atlas: TextureHandle,
        vertices: Vec<UiVertex>,
        draws: Vec<(usize, usize, TextColorMode)>,
    },
}

/// Coalesce a command list into draw batches, preserving command order
///
/// A command joins the current batch only while the kind (and, for text,
/// the atlas) stays the same; any change starts a new batch. Emitting the
/// batches in sequence reproduces the exact painter's order of the command
/// list.
fn batch_commands(commands: &[RenderCommand]) -> Vec<Batch> {
    let mut batches: Vec<Batch> = Vec::new();

    for command in commands {
        match command {
            RenderCommand::Quad { vertices, color } => {
                if let Some(Batch::Quads {
                    vertices: buffer,
                    draws,
                }) = batches.last_mut()
                {
                    let start = buffer.len();
                    buffer.extend_from_slice(vertices);
                    draws.push((start, vertices.len(), *color));
                } else {
                    batches.push(Batch::Quads {
                        vertices: vertices.to_vec(),
                        draws: vec![(0, vertices.len(), *color)],
                    });
                }
            }
            RenderCommand::Text {
                atlas,
                vertices,
                colors,
            } => match batches.last_mut() {
                Some(Batch::Text {
                    atlas: current,
                    vertices: buffer,
                    draws,
                }) if *current == *atlas => {
                    let start = buffer.len();
                    buffer.extend_from_slice(vertices);
                    draws.push((start, vertices.len(), colors.clone()));
                }
                _ => batches.push(Batch::Text {
                    atlas: *atlas,
                    vertices: vertices.clone(),
                    draws: vec![(0, vertices.len(), colors.clone())],
                }),
            },
        }
    }

    batches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Mat4;
    use crate::text::font_atlas::{FontAtlas, GlyphMetrics};
    use crate::text::AtlasSettings;
    use crate::widgets::{Anchor, Axis};
    use approx::assert_relative_eq;
    use nalgebra::Vector2;
    use std::collections::HashMap;

    fn test_fonts() -> FontCache {
        let mut glyphs = HashMap::new();
        for (ch, advance) in [('A', 10.0), ('B', 12.0)] {
            glyphs.insert(
                ch,
                GlyphMetrics {
                    uv_min: Vector2::new(0.0, 0.0),
                    uv_max: Vector2::new(0.1, 0.1),
                    size: Vector2::new(advance - 2.0, 14.0),
                    bearing: Vector2::new(1.0, 2.0),
                    advance,
                },
            );
        }
        glyphs.insert(' ', GlyphMetrics::advance_only(6.0));
        let mut fonts = FontCache::new(AtlasSettings::default());
        fonts.insert("test.ttf", 16.0, FontAtlas::from_metrics(glyphs, 16.0, 20.0));
        fonts
    }

    /// Backend that records the calls it receives, in order
    #[derive(Default)]
    struct RecordingBackend {
        begun: usize,
        ended: usize,
        quad_draws: usize,
        text_draws: usize,
        uploads: usize,
        calls: Vec<&'static str>,
    }

    impl RenderBackend for RecordingBackend {
        fn begin_ui_pass(&mut self, _projection: &Mat4) -> BackendResult<()> {
            self.begun += 1;
            Ok(())
        }

        fn upload_atlas(&mut self, _w: u32, _h: u32, _rgba: &[u8]) -> BackendResult<TextureHandle> {
            self.uploads += 1;
            Ok(TextureHandle(self.uploads as u64))
        }

        fn destroy_texture(&mut self, _handle: TextureHandle) -> BackendResult<()> {
            Ok(())
        }

        fn draw_quad_batch(
            &mut self,
            _vertices: &[QuadVertex],
            draws: &[(usize, usize, Vec4)],
        ) -> BackendResult<()> {
            self.quad_draws += draws.len();
            self.calls.push("quads");
            Ok(())
        }

        fn draw_text_batch(
            &mut self,
            _atlas: TextureHandle,
            _vertices: &[UiVertex],
            draws: &[(usize, usize, TextColorMode)],
        ) -> BackendResult<()> {
            self.text_draws += draws.len();
            self.calls.push("text");
            Ok(())
        }

        fn end_ui_pass(&mut self) -> BackendResult<()> {
            self.ended += 1;
            Ok(())
        }
    }

    #[test]
    fn test_duplicate_ids_rejected_across_trees() {
        let mut ui = UiManager::new(800.0, 600.0);
        ui.add(Widget::label("a", "x").unwrap()).unwrap();

        let result = ui.add(Widget::label("a", "y").unwrap());
        assert!(matches!(
            result,
            Err(UiError::Widget(WidgetError::DuplicateId(_)))
        ));

        // Nested duplicates count too
        let mut panel = Widget::panel("p", 100.0, 100.0).unwrap();
        panel.add_child(Widget::label("a2", "z").unwrap()).unwrap();
        ui.add(panel).unwrap();
        assert!(ui.add(Widget::label("a2", "w").unwrap()).is_err());
    }

    #[test]
    fn test_remove_frees_subtree_ids() {
        let mut ui = UiManager::new(800.0, 600.0);
        let mut panel = Widget::panel("p", 100.0, 100.0).unwrap();
        panel.add_child(Widget::label("inner", "x").unwrap()).unwrap();
        ui.add(panel).unwrap();

        assert!(ui.remove("p").is_some());
        assert!(ui.is_empty());
        // Freed ids can be reused
        ui.add(Widget::label("inner", "y").unwrap()).unwrap();
    }

    #[test]
    fn test_pointer_dispatch_topmost_first_consumption_stops() {
        let mut ui = UiManager::new(800.0, 600.0);
        // Three overlapping root buttons at the same spot
        for id in ["w1", "w2", "w3"] {
            ui.add(
                Widget::button(id, "X", 100.0, 100.0)
                    .unwrap()
                    .with_anchor(Anchor::TopLeft, 0.0, 0.0),
            )
            .unwrap();
        }
        ui.resolve(&test_fonts());

        assert!(ui.pointer_down(50.0, 50.0, PointerButton::Left));

        // The last-added (topmost) widget consumed the press; the others
        // never saw it
        let clicked: Vec<_> = ui
            .drain_events()
            .into_iter()
            .filter_map(|e| e.widget_id().map(str::to_string))
            .collect();
        assert_eq!(clicked, vec!["w3".to_string()]);
    }

    #[test]
    fn test_pointer_miss_consumes_nothing() {
        let mut ui = UiManager::new(800.0, 600.0);
        ui.add(Widget::button("b", "X", 50.0, 50.0).unwrap()).unwrap();
        ui.resolve(&test_fonts());

        assert!(!ui.pointer_down(500.0, 500.0, PointerButton::Left));
        assert!(ui.drain_events().is_empty());
    }

    #[test]
    fn test_focus_moves_between_fields() {
        let mut ui = UiManager::new(800.0, 600.0);
        ui.add(
            Widget::text_field("f1", 100.0, 24.0)
                .unwrap()
                .with_anchor(Anchor::TopLeft, 0.0, 0.0),
        )
        .unwrap();
        ui.add(
            Widget::text_field("f2", 100.0, 24.0)
                .unwrap()
                .with_anchor(Anchor::TopLeft, 0.0, 100.0),
        )
        .unwrap();
        ui.resolve(&test_fonts());

        ui.pointer_down(10.0, 10.0, PointerButton::Left);
        ui.key_char('A');
        ui.pointer_down(10.0, 110.0, PointerButton::Left);
        ui.key_char('B');

        let f1 = ui.find("f1").unwrap();
        let f2 = ui.find("f2").unwrap();
        match (&f1.kind, &f2.kind) {
            (WidgetKind::TextField(a), WidgetKind::TextField(b)) => {
                assert_eq!(a.text, "A");
                assert!(!a.focused);
                assert_eq!(b.text, "B");
                assert!(b.focused);
            }
            _ => unreachable!(),
        }

        let text_events = ui
            .drain_events()
            .into_iter()
            .filter(|e| e.event_type == UiEventType::TextChanged)
            .count();
        assert_eq!(text_events, 2);
    }

    #[test]
    fn test_key_input_without_focus_is_noop() {
        let mut ui = UiManager::new(800.0, 600.0);
        ui.add(Widget::text_field("f", 100.0, 24.0).unwrap()).unwrap();

        ui.key_char('A');
        ui.key_backspace();
        assert!(ui.drain_events().is_empty());
    }

    #[test]
    fn test_scale_value_mutation_fires_once() {
        let mut ui = UiManager::new(800.0, 600.0);
        ui.add(Widget::scale("s", Axis::Horizontal, 0.0, 100.0, 50.0, 200.0, 20.0).unwrap())
            .unwrap();

        ui.set_scale_value("s", 75.0).unwrap();
        ui.set_scale_value("s", 75.0).unwrap();

        let fired = ui.drain_events();
        assert_eq!(fired.len(), 1);
        assert_relative_eq!(fired[0].value().unwrap(), 75.0);
    }

    #[test]
    fn test_scale_range_reclamp_notifies() {
        let mut ui = UiManager::new(800.0, 600.0);
        ui.add(Widget::scale("s", Axis::Horizontal, 0.0, 100.0, 80.0, 200.0, 20.0).unwrap())
            .unwrap();

        ui.set_scale_range("s", 0.0, 50.0).unwrap();
        let fired = ui.drain_events();
        assert_eq!(fired.len(), 1);
        assert_relative_eq!(fired[0].value().unwrap(), 50.0);

        assert!(matches!(
            ui.set_scale_range("s", 10.0, 5.0),
            Err(UiError::Widget(WidgetError::InvalidRange { .. }))
        ));
    }

    #[test]
    fn test_label_text_change_marks_layout_dirty() {
        let mut ui = UiManager::new(800.0, 600.0);
        ui.add(Widget::label("l", "A").unwrap()).unwrap();
        ui.resolve(&test_fonts());
        assert!(!ui.layout_dirty);

        ui.set_label_text("l", "AB").unwrap();
        assert!(ui.layout_dirty);

        ui.resolve(&test_fonts());
        assert_relative_eq!(ui.find("l").unwrap().base.width, 22.0);
    }

    #[test]
    fn test_render_resolves_and_batches() {
        let mut ui = UiManager::new(800.0, 600.0);
        ui.add(
            Widget::panel("p", 100.0, 100.0)
                .unwrap()
                .with_background(Vec4::new(0.1, 0.1, 0.1, 1.0)),
        )
        .unwrap();
        ui.add(Widget::label("l", "AB").unwrap()).unwrap();

        let mut context = RenderContext::with_fonts(test_fonts(), 800.0, 600.0);
        let mut backend = RecordingBackend::default();
        ui.render(&mut context, &mut backend).unwrap();

        assert_eq!(backend.begun, 1);
        assert_eq!(backend.ended, 1);
        assert_eq!(backend.quad_draws, 1);
        assert_eq!(backend.text_draws, 1);
        // Layout was resolved before drawing
        assert!(ui.find("l").unwrap().base.width > 0.0);
    }

    #[test]
    fn test_update_clears_pressed_state() {
        let mut ui = UiManager::new(800.0, 600.0);
        ui.add(Widget::button("b", "X", 50.0, 50.0).unwrap()).unwrap();
        ui.resolve(&test_fonts());

        ui.pointer_down(10.0, 10.0, PointerButton::Left);
        match &ui.find("b").unwrap().kind {
            WidgetKind::Button(b) => assert_eq!(b.state, crate::widgets::ButtonState::Pressed),
            _ => unreachable!(),
        }

        ui.update(0.016);
        match &ui.find("b").unwrap().kind {
            WidgetKind::Button(b) => assert_eq!(b.state, crate::widgets::ButtonState::Normal),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_batching_preserves_command_order() {
        let white = TextColorMode::Uniform(Vec4::new(1.0, 1.0, 1.0, 1.0));
        let quad = RenderCommand::Quad {
            vertices: [crate::render::QuadVertex { position: [0.0, 0.0] }; 6],
            color: Vec4::new(1.0, 0.0, 0.0, 1.0),
        };
        let text_a = RenderCommand::Text {
            atlas: TextureHandle(1),
            vertices: vec![UiVertex { position: [0.0, 0.0], uv: [0.0, 0.0] }; 6],
            colors: white.clone(),
        };
        let text_b = RenderCommand::Text {
            atlas: TextureHandle(2),
            vertices: vec![UiVertex { position: [0.0, 0.0], uv: [0.0, 0.0] }; 12],
            colors: white.clone(),
        };

        // Quad, two runs on atlas 1, one on atlas 2, then a quad again
        let batches = batch_commands(&[
            quad.clone(),
            text_a.clone(),
            text_a.clone(),
            text_b,
            quad,
        ]);

        // Consecutive same-atlas runs coalesce; every other boundary splits
        assert_eq!(batches.len(), 4);
        match &batches[1] {
            Batch::Text { atlas, vertices, draws } => {
                assert_eq!(*atlas, TextureHandle(1));
                assert_eq!(vertices.len(), 12);
                assert_eq!(draws, &vec![(0, 6, white.clone()), (6, 6, white)]);
            }
            Batch::Quads { .. } => panic!("expected a text batch"),
        }
        assert!(matches!(&batches[2], Batch::Text { atlas, .. } if *atlas == TextureHandle(2)));
        assert!(matches!(&batches[3], Batch::Quads { draws, .. } if draws.len() == 1));
    }

    #[test]
    fn test_draw_calls_follow_sibling_order() {
        let mut ui = UiManager::new(800.0, 600.0);
        // A text-only sibling first, then an opaque panel over it
        ui.add(Widget::label("l", "AB").unwrap()).unwrap();
        ui.add(
            Widget::panel("p", 100.0, 100.0)
                .unwrap()
                .with_background(Vec4::new(0.1, 0.1, 0.1, 1.0)),
        )
        .unwrap();

        let mut context = RenderContext::with_fonts(test_fonts(), 800.0, 600.0);
        let mut backend = RecordingBackend::default();
        ui.render(&mut context, &mut backend).unwrap();

        // The later sibling's background must draw over the earlier text
        assert_eq!(backend.calls, vec!["text", "quads"]);
    }
}

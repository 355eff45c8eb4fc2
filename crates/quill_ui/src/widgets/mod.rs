//! Widget tree
//!
//! Widgets are a closed sum: a shared [`WidgetBase`] plus a
//! [`WidgetKind`] payload, with resolve/draw/hit-test behavior dispatched
//! by match. Composite kinds (panels, stacking panels, scale widgets)
//! exclusively own their children.

pub mod button;
pub mod checkbox;
pub mod core;
pub mod label;
pub mod layout;
pub mod panel;
pub mod scale;
pub mod text_field;

pub use self::button::{Button, ButtonState};
pub use self::checkbox::Checkbox;
pub use self::core::{Anchor, Axis, WidgetBase, WidgetError};
pub use self::label::Label;
pub use self::panel::{Panel, StackPanel};
pub use self::scale::ScaleWidget;
pub use self::text_field::TextField;

use crate::events::{EventArg, EventSystem, UiEvent, UiEventType};
use crate::foundation::math::{Rect, Vec2, Vec4};
use crate::input::PointerButton;
use crate::render::vertex::quad_vertices;
use crate::render::{RenderCommand, TextureHandle};
use crate::text::{layout_text, measure_width, FontCache, TextEffect};

use self::layout::anchored_position;
use self::scale::ScaleChild;

/// Kind-specific widget payload
#[derive(Debug)]
pub enum WidgetKind {
    /// Text label, sized from its text metrics
    Label(Label),
    /// Clickable button with a text face
    Button(Button),
    /// Toggle box with a label
    Checkbox(Checkbox),
    /// Single-line editable text
    TextField(TextField),
    /// Plain container
    Panel(Panel),
    /// Container stacking children along one axis
    StackPanel(StackPanel),
    /// Slider that proportionally rescales its children
    Scale(ScaleWidget),
}

/// A widget: shared base properties plus a kind payload
#[derive(Debug)]
pub struct Widget {
    /// Shared properties (id, anchor, resolved rectangle, ...)
    pub base: WidgetBase,
    /// Kind payload and children
    pub kind: WidgetKind,
}

impl Widget {
    fn with_kind(id: impl Into<String>, kind: WidgetKind) -> Result<Self, WidgetError> {
        Ok(Self {
            base: WidgetBase::new(id)?,
            kind,
        })
    }

    fn check_size(id: &str, width: f32, height: f32) -> Result<(), WidgetError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(WidgetError::InvalidSize {
                id: id.to_string(),
                width,
                height,
            });
        }
        Ok(())
    }

    /// Create a label; its size is derived from text metrics at resolve time
    pub fn label(id: impl Into<String>, text: impl Into<String>) -> Result<Self, WidgetError> {
        Self::with_kind(id, WidgetKind::Label(Label::new(text)))
    }

    /// Create a button with a fixed size
    pub fn button(
        id: impl Into<String>,
        text: impl Into<String>,
        width: f32,
        height: f32,
    ) -> Result<Self, WidgetError> {
        let id = id.into();
        Self::check_size(&id, width, height)?;
        let mut widget = Self::with_kind(id, WidgetKind::Button(Button::new(text)))?;
        widget.base.width = width;
        widget.base.height = height;
        Ok(widget)
    }

    /// Create a checkbox; its size is derived from box and text metrics
    pub fn checkbox(id: impl Into<String>, text: impl Into<String>) -> Result<Self, WidgetError> {
        Self::with_kind(id, WidgetKind::Checkbox(Checkbox::new(text)))
    }

    /// Create a text field with a fixed size
    pub fn text_field(id: impl Into<String>, width: f32, height: f32) -> Result<Self, WidgetError> {
        let id = id.into();
        Self::check_size(&id, width, height)?;
        let mut widget = Self::with_kind(id, WidgetKind::TextField(TextField::new()))?;
        widget.base.width = width;
        widget.base.height = height;
        Ok(widget)
    }

    /// Create an empty panel with a fixed size
    pub fn panel(id: impl Into<String>, width: f32, height: f32) -> Result<Self, WidgetError> {
        let id = id.into();
        Self::check_size(&id, width, height)?;
        let mut widget = Self::with_kind(id, WidgetKind::Panel(Panel::new()))?;
        widget.base.width = width;
        widget.base.height = height;
        Ok(widget)
    }

    /// Create an empty stacking panel with a fixed size
    pub fn stack_panel(
        id: impl Into<String>,
        axis: Axis,
        spacing: f32,
        width: f32,
        height: f32,
    ) -> Result<Self, WidgetError> {
        let id = id.into();
        Self::check_size(&id, width, height)?;
        let mut widget = Self::with_kind(id, WidgetKind::StackPanel(StackPanel::new(axis, spacing)))?;
        widget.base.width = width;
        widget.base.height = height;
        Ok(widget)
    }

    /// Create a scale widget
    ///
    /// `min > max` is an invariant violation; `value` outside the range is
    /// clamped (documented behavior, not an error).
    pub fn scale(
        id: impl Into<String>,
        axis: Axis,
        min: f32,
        max: f32,
        value: f32,
        width: f32,
        height: f32,
    ) -> Result<Self, WidgetError> {
        let id = id.into();
        Self::check_size(&id, width, height)?;
        if min > max {
            return Err(WidgetError::InvalidRange { id, min, max });
        }
        let mut widget = Self::with_kind(id, WidgetKind::Scale(ScaleWidget::new(axis, min, max, value)))?;
        widget.base.width = width;
        widget.base.height = height;
        Ok(widget)
    }

    /// Set the anchor and pixel offset (builder)
    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor, offset_x: f32, offset_y: f32) -> Self {
        self.base.anchor = anchor;
        self.base.offset_x = offset_x;
        self.base.offset_y = offset_y;
        self
    }

    /// Position manually: raw coordinates relative to the parent's origin,
    /// offsets ignored (builder)
    #[must_use]
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.base.anchor = Anchor::Manual;
        self.base.x = x;
        self.base.y = y;
        self
    }

    /// Set the background color; alpha 0 suppresses the background quad
    /// (builder)
    #[must_use]
    pub fn with_background(mut self, color: Vec4) -> Self {
        self.base.background = color;
        self
    }

    /// Set visibility (builder)
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.base.visible = visible;
        self
    }

    /// Add a child to a composite widget
    ///
    /// Fails on non-container kinds and on ids already present in this
    /// subtree.
    pub fn add_child(&mut self, child: Widget) -> Result<(), WidgetError> {
        let mut existing = Vec::new();
        self.collect_ids(&mut existing);
        let mut incoming = Vec::new();
        child.collect_ids(&mut incoming);
        for id in &incoming {
            if existing.contains(id) {
                return Err(WidgetError::DuplicateId(id.clone()));
            }
        }

        match &mut self.kind {
            WidgetKind::Panel(p) => p.children.push(child),
            WidgetKind::StackPanel(s) => s.children.push(child),
            WidgetKind::Scale(s) => s.add_child(child),
            _ => return Err(WidgetError::NotAContainer(self.base.id.clone())),
        }
        Ok(())
    }

    /// Direct children, in insertion (draw) order
    pub fn children(&self) -> Vec<&Widget> {
        match &self.kind {
            WidgetKind::Panel(p) => p.children.iter().collect(),
            WidgetKind::StackPanel(s) => s.children.iter().collect(),
            WidgetKind::Scale(s) => s.children.iter().map(|c| &c.widget).collect(),
            _ => Vec::new(),
        }
    }

    pub(crate) fn children_mut(&mut self) -> Vec<&mut Widget> {
        match &mut self.kind {
            WidgetKind::Panel(p) => p.children.iter_mut().collect(),
            WidgetKind::StackPanel(s) => s.children.iter_mut().collect(),
            WidgetKind::Scale(s) => s.children.iter_mut().map(|c| &mut c.widget).collect(),
            _ => Vec::new(),
        }
    }

    /// Collect every id in this subtree
    pub(crate) fn collect_ids(&self, out: &mut Vec<String>) {
        out.push(self.base.id.clone());
        for child in self.children() {
            child.collect_ids(out);
        }
    }

    /// Find a widget by id in this subtree
    pub fn find(&self, id: &str) -> Option<&Widget> {
        if self.base.id == id {
            return Some(self);
        }
        for child in self.children() {
            if let Some(found) = child.find(id) {
                return Some(found);
            }
        }
        None
    }

    /// Find a widget by id in this subtree, mutably
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Widget> {
        if self.base.id == id {
            return Some(self);
        }
        for child in self.children_mut() {
            if let Some(found) = child.find_mut(id) {
                return Some(found);
            }
        }
        None
    }

    /// Update this scale widget's range, re-clamping its value
    ///
    /// Returns the new value if re-clamping changed it. Errors on inverted
    /// ranges and on non-scale widgets.
    pub fn set_scale_range(&mut self, min: f32, max: f32) -> Result<Option<f32>, WidgetError> {
        if min > max {
            return Err(WidgetError::InvalidRange {
                id: self.base.id.clone(),
                min,
                max,
            });
        }
        match &mut self.kind {
            WidgetKind::Scale(s) => {
                if s.set_range_unchecked(min, max) {
                    Ok(Some(s.value()))
                } else {
                    Ok(None)
                }
            }
            _ => Err(WidgetError::NotAContainer(self.base.id.clone())),
        }
    }

    /// Recompute sizes derived from text metrics
    pub(crate) fn measure(&mut self, fonts: &FontCache) {
        let derived = match &self.kind {
            WidgetKind::Label(l) => fonts
                .active()
                .map(|atlas| (measure_width(atlas, &l.text), atlas.line_height())),
            WidgetKind::Checkbox(c) => {
                let (text_width, text_height) = fonts
                    .active()
                    .map_or((0.0, 0.0), |atlas| {
                        (measure_width(atlas, &c.text), atlas.line_height())
                    });
                let width = if text_width > 0.0 {
                    c.box_size + c.gap + text_width
                } else {
                    c.box_size
                };
                Some((width, c.box_size.max(text_height)))
            }
            _ => None,
        };

        if let Some((width, height)) = derived {
            self.base.width = width;
            self.base.height = height;
        }
    }

    /// Resolve this widget's actual position within `container`, then
    /// recurse into children with this widget's rectangle as the new
    /// container
    ///
    /// Must be re-run over the whole tree, top-down, after any
    /// size-affecting change or a root resize.
    pub fn resolve(&mut self, container: Rect, fonts: &FontCache) {
        self.resolve_inner(container, fonts, true);
    }

    fn resolve_inner(&mut self, container: Rect, fonts: &FontCache, measure: bool) {
        if measure {
            self.measure(fonts);
        }

        let position = match self.base.anchor {
            Anchor::Manual => Vec2::new(container.x + self.base.x, container.y + self.base.y),
            anchor => anchored_position(
                anchor,
                Vec2::new(self.base.offset_x, self.base.offset_y),
                Vec2::new(self.base.width, self.base.height),
                container,
            ),
        };
        self.base.actual_x = position.x;
        self.base.actual_y = position.y;

        let rect = self.base.rect();
        match &mut self.kind {
            WidgetKind::Panel(p) => {
                for child in &mut p.children {
                    child.resolve_inner(rect, fonts, true);
                }
            }
            WidgetKind::StackPanel(s) => {
                // Assign axis offsets from accumulated child sizes before
                // resolving each child's own anchor
                let mut accumulated = 0.0;
                for child in &mut s.children {
                    child.measure(fonts);
                    match s.axis {
                        Axis::Horizontal => {
                            child.base.offset_x = accumulated;
                            child.base.offset_y = 0.0;
                            accumulated += child.base.width + s.spacing;
                        }
                        Axis::Vertical => {
                            child.base.offset_x = 0.0;
                            child.base.offset_y = accumulated;
                            accumulated += child.base.height + s.spacing;
                        }
                    }
                    child.resolve_inner(rect, fonts, false);
                }
            }
            WidgetKind::Scale(s) => {
                let factor = s.factor();
                let axis = s.axis;
                for ScaleChild { widget, baseline } in &mut s.children {
                    // Always restart from the attach-time baseline so
                    // scaling never compounds
                    widget.base.anchor = baseline.anchor;
                    widget.base.offset_x = baseline.offset_x;
                    widget.base.offset_y = baseline.offset_y;
                    widget.base.width = baseline.width;
                    widget.base.height = baseline.height;
                    match axis {
                        Axis::Horizontal => widget.base.width = baseline.width * factor,
                        Axis::Vertical => widget.base.height = baseline.height * factor,
                    }
                    widget.resolve_inner(rect, fonts, false);
                }
            }
            _ => {}
        }
    }

    /// Emit render commands for this widget and its subtree, in sibling
    /// order
    ///
    /// Assumes the tree has been resolved this frame.
    pub fn draw(&self, fonts: &FontCache, elapsed: f32, out: &mut Vec<RenderCommand>) {
        if !self.base.visible {
            return;
        }
        let rect = self.base.rect();
        let background = self.base.background;

        match &self.kind {
            WidgetKind::Button(b) => {
                out.push(RenderCommand::Quad {
                    vertices: quad_vertices(rect),
                    color: b.current_color(),
                });
                if let Some(atlas) = fonts.active() {
                    let text_width = measure_width(atlas, &b.text);
                    let origin = Vec2::new(
                        rect.x + (rect.width - text_width) / 2.0,
                        rect.y + (rect.height - atlas.line_height()) / 2.0,
                    );
                    emit_text(fonts, &b.text, origin, &TextEffect::None, elapsed, b.text_color, None, out);
                }
            }
            WidgetKind::Label(l) => {
                if background.w > 0.0 {
                    out.push(RenderCommand::Quad {
                        vertices: quad_vertices(rect),
                        color: background,
                    });
                }
                emit_text(
                    fonts,
                    &l.text,
                    Vec2::new(rect.x, rect.y),
                    &l.effect,
                    elapsed,
                    l.color,
                    l.per_char_colors.as_deref(),
                    out,
                );
            }
            WidgetKind::Checkbox(c) => {
                if background.w > 0.0 {
                    out.push(RenderCommand::Quad {
                        vertices: quad_vertices(rect),
                        color: background,
                    });
                }
                let box_rect = Rect::new(
                    rect.x,
                    rect.y + (rect.height - c.box_size) / 2.0,
                    c.box_size,
                    c.box_size,
                );
                out.push(RenderCommand::Quad {
                    vertices: quad_vertices(box_rect),
                    color: c.box_color,
                });
                if c.checked {
                    let inset = 3.0;
                    out.push(RenderCommand::Quad {
                        vertices: quad_vertices(Rect::new(
                            box_rect.x + inset,
                            box_rect.y + inset,
                            box_rect.width - 2.0 * inset,
                            box_rect.height - 2.0 * inset,
                        )),
                        color: c.mark_color,
                    });
                }
                if let Some(atlas) = fonts.active() {
                    let origin = Vec2::new(
                        rect.x + c.box_size + c.gap,
                        rect.y + (rect.height - atlas.line_height()) / 2.0,
                    );
                    emit_text(fonts, &c.text, origin, &TextEffect::None, elapsed, c.text_color, None, out);
                }
            }
            WidgetKind::TextField(t) => {
                if background.w > 0.0 {
                    out.push(RenderCommand::Quad {
                        vertices: quad_vertices(rect),
                        color: background,
                    });
                }
                if let Some(atlas) = fonts.active() {
                    let origin = Vec2::new(
                        rect.x + t.padding,
                        rect.y + (rect.height - atlas.line_height()) / 2.0,
                    );
                    emit_text(fonts, &t.text, origin, &TextEffect::None, elapsed, t.text_color, None, out);
                    if t.focused {
                        let caret_x = origin.x + measure_width(atlas, &t.text);
                        out.push(RenderCommand::Quad {
                            vertices: quad_vertices(Rect::new(
                                caret_x,
                                origin.y,
                                1.0,
                                atlas.line_height(),
                            )),
                            color: t.caret_color,
                        });
                    }
                }
            }
            WidgetKind::Panel(_) | WidgetKind::StackPanel(_) | WidgetKind::Scale(_) => {
                if background.w > 0.0 {
                    out.push(RenderCommand::Quad {
                        vertices: quad_vertices(rect),
                        color: background,
                    });
                }
                for child in self.children() {
                    child.draw(fonts, elapsed, out);
                }
            }
        }
    }

    /// Route a pointer-down event into this subtree
    ///
    /// Children are tested in reverse insertion order (topmost first);
    /// composites fall back to handling the event as their own background.
    /// Returns true if the event was consumed, which stops dispatch.
    pub fn pointer_down(
        &mut self,
        x: f32,
        y: f32,
        button: PointerButton,
        events: &mut EventSystem,
        timestamp: f64,
    ) -> bool {
        if !self.base.visible {
            return false;
        }
        let rect = self.base.rect();
        if !rect.contains(x, y) {
            return false;
        }
        let id = self.base.id.clone();
        let opaque = self.base.background.w > 0.0;

        match &mut self.kind {
            WidgetKind::Label(_) => false,
            WidgetKind::Button(b) => {
                if !b.enabled {
                    return false;
                }
                b.state = ButtonState::Pressed;
                events.send(
                    UiEvent::new(UiEventType::Clicked, timestamp)
                        .with_arg("widget", EventArg::WidgetId(id))
                        .with_arg("position", EventArg::Position(x, y)),
                );
                true
            }
            WidgetKind::Checkbox(c) => {
                c.checked = !c.checked;
                events.send(
                    UiEvent::new(UiEventType::CheckChanged, timestamp)
                        .with_arg("widget", EventArg::WidgetId(id))
                        .with_arg("checked", EventArg::Checked(c.checked)),
                );
                true
            }
            WidgetKind::TextField(t) => {
                t.focused = true;
                true
            }
            WidgetKind::Panel(p) => {
                for child in p.children.iter_mut().rev() {
                    if child.pointer_down(x, y, button, events, timestamp) {
                        return true;
                    }
                }
                opaque
            }
            WidgetKind::StackPanel(s) => {
                for child in s.children.iter_mut().rev() {
                    if child.pointer_down(x, y, button, events, timestamp) {
                        return true;
                    }
                }
                opaque
            }
            WidgetKind::Scale(s) => {
                for child in s.children.iter_mut().rev() {
                    if child.widget.pointer_down(x, y, button, events, timestamp) {
                        return true;
                    }
                }
                let fraction = match s.axis {
                    Axis::Horizontal => (x - rect.x) / rect.width,
                    Axis::Vertical => (y - rect.y) / rect.height,
                };
                let value = s.fraction_to_value(fraction);
                if s.set_value(value) {
                    events.send(
                        UiEvent::new(UiEventType::ValueChanged, timestamp)
                            .with_arg("widget", EventArg::WidgetId(id))
                            .with_arg("value", EventArg::Value(s.value())),
                    );
                }
                true
            }
        }
    }

    /// Clear per-frame transient state (button pressed flash)
    pub(crate) fn clear_transient_state(&mut self) {
        if let WidgetKind::Button(b) = &mut self.kind {
            if b.state == ButtonState::Pressed {
                b.state = ButtonState::Normal;
            }
        }
        for child in self.children_mut() {
            child.clear_transient_state();
        }
    }

    /// Drop focus from every text field in this subtree
    pub(crate) fn clear_focus(&mut self) {
        if let WidgetKind::TextField(t) = &mut self.kind {
            t.focused = false;
        }
        for child in self.children_mut() {
            child.clear_focus();
        }
    }
}

fn emit_text(
    fonts: &FontCache,
    text: &str,
    origin: Vec2,
    effect: &TextEffect,
    elapsed: f32,
    color: Vec4,
    per_char_colors: Option<&[Vec4]>,
    out: &mut Vec<RenderCommand>,
) {
    // No active font: text is silently not drawn
    let Some(atlas) = fonts.active() else {
        return;
    };
    let (vertices, colors) = layout_text(atlas, text, origin, effect, elapsed, color, per_char_colors);
    if vertices.is_empty() {
        return;
    }
    // Headless atlases have no GPU texture; a null handle keeps command
    // generation testable without a backend
    let handle = atlas.texture().unwrap_or(TextureHandle(0));
    out.push(RenderCommand::Text {
        atlas: handle,
        vertices,
        colors,
    });
}

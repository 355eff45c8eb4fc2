//! # Quill UI
//!
//! A retained-mode UI toolkit for real-time rendered applications.
//!
//! ## Features
//!
//! - **Anchored Layout**: widgets position themselves relative to anchor
//!   points within their container, resolved top-down every layout pass
//! - **Glyph Atlas Text**: strings render as textured quads against a
//!   packed font atlas, with optional procedural effects
//! - **Depth-Ordered Input**: pointer events route to the topmost widget
//!   first; consumed events stop propagating
//! - **Backend Agnostic**: rendering goes through a small trait so the
//!   toolkit stays independent of Vulkan/DirectX/OpenGL specifics
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quill_ui::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = UiConfig::default();
//!     let mut context = RenderContext::new(&config)?;
//!     let mut ui = UiManager::new(800.0, 600.0);
//!
//!     let label = Widget::label("title", "Hello")?
//!         .with_anchor(Anchor::TopCenter, 0.0, 16.0);
//!     ui.add(label)?;
//!
//!     // Per frame: ui.update(dt); ui.render(&mut context, backend)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod events;
pub mod foundation;
pub mod input;
pub mod render;
pub mod text;
pub mod widgets;

mod manager;

pub use manager::{UiError, UiManager};

/// Common imports for toolkit users
pub mod prelude {
    pub use crate::{
        config::UiConfig,
        events::{UiEvent, UiEventType},
        foundation::math::{Rect, Vec2, Vec4},
        input::PointerButton,
        render::{RenderBackend, RenderCommand, RenderContext},
        text::{FontAtlas, FontCache, TextEffect},
        widgets::{Anchor, Axis, Widget, WidgetKind},
        UiError, UiManager,
    };
}

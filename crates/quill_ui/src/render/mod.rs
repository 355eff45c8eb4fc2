//! Backend-agnostic rendering infrastructure
//!
//! Widgets emit [`RenderCommand`]s each frame; a [`RenderBackend`]
//! implementation turns them into GPU draws. The [`RenderContext`] owns the
//! shared resources (font cache, projection matrix) with an explicit
//! init/teardown lifecycle instead of process-wide globals.

pub mod backend;
pub mod commands;
pub mod context;
pub mod vertex;

pub use backend::{RenderBackend, TextureHandle};
pub use commands::{RenderCommand, TextColorMode};
pub use context::RenderContext;
pub use vertex::{QuadVertex, UiVertex};

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod renderer;
pub mod document;
pub mod element;
pub mod preview;
pub mod history;
pub mod controller;
pub mod panels;
pub mod input;

pub use app::SketchpadApp;
pub use renderer::Renderer;
pub use document::Document;
pub use element::{Element, Sticker, Stroke};
pub use preview::Preview;
pub use history::StrokeHistory;
pub use controller::{BrushPreset, ToolController};
pub use input::{InputHandler, PointerEvent};

pub mod change;
pub mod document;
pub mod drag;
pub mod editor;
pub mod history;
pub mod host;
pub mod input;
pub mod prefs;
pub mod render;
pub mod theme;
pub mod view;

pub use change::{ChangeEmitter, SpectrumChange};
pub use document::SongDocument;
pub use drag::{fill_segment, DragInterpolator, DragSession, GestureState};
pub use editor::SpectrumEditor;
pub use history::ChangeHistory;
pub use host::SpectrumHost;
pub use input::{GestureStep, PointerEvent, PointerEventKind, PointerInputController};
pub use prefs::{Preferences, Theme};
pub use render::{Gridlines, Layer, PathRenderer, RenderCache, SpectrumGeometry, SpectrumSurface};
pub use theme::Palette;
pub use view::{draw_spectrum_editor, EguiSurface};

use wasm_bindgen::prelude::*;
mod api;
mod canvas;
mod error;
mod interop;

/// Browser handle: the editor plus the canvas it paints on, once attached.
#[wasm_bindgen]
pub struct GraphEditor {
    pub(crate) inner: graphpad::Editor,
    pub(crate) canvas: Option<canvas::CanvasSurface>,
}

impl GraphEditor {
    pub fn rs_new() -> GraphEditor {
        GraphEditor { inner: graphpad::Editor::new(), canvas: None }
    }
    pub fn rs_geom_version(&self) -> u64 {
        self.inner.graph().geom_version()
    }
}

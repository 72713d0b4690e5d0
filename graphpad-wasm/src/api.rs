use crate::canvas::CanvasSurface;
use crate::error;
use crate::GraphEditor;
use graphpad::ViewportConfig;
use log::Level;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Install the console logger and panic hook. Safe to call more than once.
#[wasm_bindgen]
pub fn init() {
    if console_log::init_with_level(Level::Debug).is_ok() {
        log::info!("graphpad logging initialized");
    }
    set_panic_hook();
}

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js<T: Serialize + ?Sized>(v: &T) -> JsValue {
    v.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
impl GraphEditor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GraphEditor {
        crate::GraphEditor::rs_new()
    }
    pub fn geom_version(&self) -> u64 {
        self.rs_geom_version()
    }

    /// Paint on `canvas` from now on. The canvas is sized to the viewport.
    pub fn attach_canvas(&mut self, canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        let cfg = self.inner.config();
        canvas.set_width(cfg.width as u32);
        canvas.set_height(cfg.height as u32);
        self.canvas = Some(CanvasSurface::from_canvas(&canvas)?);
        self.inner.request_redraw();
        Ok(())
    }

    // Configuration
    pub fn get_config(&self) -> JsValue {
        to_js(self.inner.config())
    }
    /// Accepts a partial config; missing fields keep their defaults.
    pub fn set_config_res(&mut self, cfg: JsValue) -> JsValue {
        let cfg: ViewportConfig = match serde_wasm_bindgen::from_value(cfg) {
            Ok(c) => c,
            Err(e) => return error::err("malformed_input", e.to_string(), None),
        };
        match self.inner.set_config(cfg) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::config_error(&e),
        }
    }

    // Pointer and toolbar handlers
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.inner.pointer_down(x, y);
    }
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.inner.pointer_move(x, y);
    }
    pub fn pointer_up(&mut self) {
        self.inner.pointer_up();
    }
    pub fn primary_click(&mut self, x: f32, y: f32) {
        self.inner.primary_click(x, y);
    }
    pub fn secondary_click(&mut self, x: f32, y: f32) {
        self.inner.secondary_click(x, y);
    }
    pub fn identifier_display_toggled(&mut self, show_numbers: bool) {
        self.inner.identifier_display_toggled(show_numbers);
    }
    pub fn edge_direction_mode_toggled(&mut self, on: bool) {
        self.inner.edge_direction_mode_toggled(on);
    }
    pub fn save_requested(&self) -> String {
        self.inner.save_requested()
    }
    /// Load an uploaded file. A refused file keeps the current graph and the
    /// user is told why through `window.alert`.
    pub fn load_requested(&mut self, bytes: &[u8]) -> bool {
        if self.inner.load_requested(bytes).is_ok() {
            return true;
        }
        if let Some(msg) = self.inner.take_notice() {
            if let Some(w) = web_sys::window() {
                let _ = w.alert_with_message(&msg);
            }
        }
        false
    }
    /// Like `load_requested` but reports the failure instead of alerting.
    pub fn load_json_res(&mut self, text: &str) -> JsValue {
        let res = self.inner.load_requested(text.as_bytes());
        let _ = self.inner.take_notice();
        match res {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::load_error(&e),
        }
    }
    /// Load a persisted graph handed over as a plain JS object.
    pub fn load_json_value_res(&mut self, v: JsValue) -> JsValue {
        let val = match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => val,
            Err(e) => return error::err("malformed_input", e.to_string(), None),
        };
        let res = self.inner.load_value(val);
        let _ = self.inner.take_notice();
        match res {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::load_error(&e),
        }
    }
    pub fn clear_requested(&mut self) {
        self.inner.clear_requested();
    }

    // Drawing
    /// Call from `requestAnimationFrame`. Returns whether anything was drawn.
    pub fn frame(&mut self) -> bool {
        match self.canvas.as_mut() {
            Some(surface) => self.inner.frame(surface),
            None => false,
        }
    }
    /// Unconditional redraw onto the attached canvas.
    pub fn render(&mut self) {
        if let Some(surface) = self.canvas.as_mut() {
            self.inner.redraw(surface);
        }
    }
    pub fn needs_redraw(&self) -> bool {
        self.inner.needs_redraw()
    }

    // Queries
    pub fn node_count(&self) -> u32 {
        self.inner.graph().node_count()
    }
    pub fn edge_count(&self) -> u32 {
        self.inner.graph().edge_count()
    }
    pub fn node_at(&self, x: f32, y: f32) -> Option<u32> {
        self.inner.graph().node_at(x, y, self.inner.config())
    }
    pub fn edge_at(&self, x: f32, y: f32) -> Option<u32> {
        self.inner.graph().edge_at(x, y, self.inner.config())
    }
    /// `{kind: 'node'|'edge', id, dist}` or `null`.
    pub fn pick(&self, x: f32, y: f32) -> JsValue {
        match self.inner.graph().pick(x, y, self.inner.config()) {
            Some(p) => to_js(&p),
            None => JsValue::NULL,
        }
    }
    pub fn pick_res(&self, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        error::ok(self.pick(x, y))
    }

    // Direct store edits
    pub fn add_node_res(&mut self, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        error::ok(JsValue::from_f64(self.inner.graph_mut().add_node(x, y) as f64))
    }
    pub fn move_node_res(&mut self, id: u32, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        if self.inner.graph().get_node(id).is_none() {
            return error::invalid_id("node", id);
        }
        error::ok(JsValue::from_bool(self.inner.graph_mut().move_node(id, x, y)))
    }
    pub fn remove_node_res(&mut self, id: u32) -> JsValue {
        if self.inner.graph().get_node(id).is_none() {
            return error::invalid_id("node", id);
        }
        error::ok(JsValue::from_bool(self.inner.graph_mut().remove_node(id)))
    }
    pub fn add_edge_res(&mut self, a: u32, b: u32) -> JsValue {
        for id in [a, b] {
            if self.inner.graph().get_node(id).is_none() {
                return error::invalid_id("node", id);
            }
        }
        match self.inner.graph_mut().add_edge(a, b) {
            Some(eid) => error::ok(JsValue::from_f64(eid as f64)),
            None => error::invalid_id("node", a),
        }
    }
    pub fn remove_edge_res(&mut self, id: u32) -> JsValue {
        if self.inner.graph().get_edge(id).is_none() {
            return error::invalid_id("edge", id);
        }
        error::ok(JsValue::from_bool(self.inner.graph_mut().remove_edge(id)))
    }
    /// Advance an edge's direction; the value is 0 undirected, 1 forward,
    /// 2 reversed.
    pub fn cycle_direction_res(&mut self, id: u32) -> JsValue {
        if self.inner.graph().get_edge(id).is_none() {
            return error::invalid_id("edge", id);
        }
        match self.inner.graph_mut().cycle_direction(id) {
            Some(d) => error::ok(JsValue::from_f64(d.code() as f64)),
            None => error::invalid_id("edge", id),
        }
    }

    // Typed arrays getters
    pub fn get_node_data(&self) -> JsValue {
        let (ids, pos) = self.inner.graph().get_node_arrays();
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(&obj, "ids", &crate::interop::arr_u32(&ids).into());
        crate::interop::set_kv(&obj, "positions", &crate::interop::arr_f32(&pos).into());
        obj.into()
    }
    pub fn get_edge_data(&self) -> JsValue {
        let ea = self.inner.graph().get_edge_arrays();
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(&obj, "ids", &crate::interop::arr_u32(&ea.ids).into());
        crate::interop::set_kv(
            &obj,
            "endpoints",
            &crate::interop::arr_u32(&ea.endpoints).into(),
        );
        crate::interop::set_kv(
            &obj,
            "directions",
            &crate::interop::arr_u8(&ea.directions).into(),
        );
        crate::interop::set_kv(&obj, "offsets", &crate::interop::arr_f32(&ea.offsets).into());
        obj.into()
    }

    /// Persisted form as a plain JS object.
    pub fn to_json(&self) -> JsValue {
        to_js(&self.inner.graph().to_json_value())
    }
}

impl Default for GraphEditor {
    fn default() -> Self {
        Self::new()
    }
}

//! Pointer and toolbar handlers. Each handler runs to completion, mutates
//! the store synchronously and marks the frame dirty when anything visible
//! changed.

use crate::config::ViewportConfig;
use crate::error::{ConfigError, LoadError};
use crate::frame::FrameScheduler;
use crate::model::Vec2;
use crate::render::{render, RenderStyle, Surface};
use crate::Graph;

pub struct Editor {
    graph: Graph,
    config: ViewportConfig,
    style: RenderStyle,
    frames: FrameScheduler,
    notice: Option<String>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Editor {
            graph: Graph::new(),
            config: ViewportConfig::default(),
            style: RenderStyle::default(),
            frames: FrameScheduler::new(),
            notice: None,
        }
    }
    pub fn with_config(config: ViewportConfig) -> Result<Self, ConfigError> {
        let mut ed = Self::new();
        ed.set_config(config)?;
        Ok(ed)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }
    /// Direct store access; marks the frame dirty.
    pub fn graph_mut(&mut self) -> &mut Graph {
        self.frames.mark_dirty();
        &mut self.graph
    }
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }
    pub fn set_config(&mut self, config: ViewportConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.graph.set_base_offset(config.base_offset);
        self.config = config;
        self.frames.mark_dirty();
        Ok(())
    }
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if let Some(id) = self.graph.node_at(x, y, &self.config) {
            self.graph.start_drag(id);
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let sel = self.graph.selection().clone();
        if sel.selected.is_some() {
            self.graph.set_temp_edge(Vec2::new(x, y));
            self.frames.mark_dirty();
        }
        if let Some(id) = sel.dragging {
            self.graph.clear_selected_node();
            self.graph.clear_temp_edge();
            self.graph.set_just_dragged(true);
            self.graph.move_node(id, x, y);
            self.frames.mark_dirty();
        }
    }

    pub fn pointer_up(&mut self) {
        if self.graph.selection().dragging.is_some() {
            self.graph.clear_dragging_node();
            self.frames.mark_dirty();
        }
    }

    /// Left click. Edges under the pointer (and not under a node) cycle
    /// their direction; otherwise the click selects, connects or creates.
    pub fn primary_click(&mut self, x: f32, y: f32) {
        let node = self.graph.node_at(x, y, &self.config);
        if node.is_none() {
            if let Some(eid) = self.graph.edge_at(x, y, &self.config) {
                self.graph.cycle_direction(eid);
                self.frames.mark_dirty();
                return;
            }
        }
        if self.graph.selection().just_dragged {
            self.graph.set_just_dragged(false);
            return;
        }
        let sel = self.graph.selection().clone();
        match (node, sel.selected) {
            (None, _) if sel.temp_edge.is_some() => {
                self.graph.clear_selected_node();
                self.graph.clear_temp_edge();
            }
            (Some(id), None) => {
                self.graph.select_node(id);
            }
            (Some(id), Some(from)) => {
                self.graph.add_edge(from, id);
                self.graph.clear_temp_edge();
            }
            (None, _) => {
                self.graph.add_node(x, y);
                self.graph.clear_selected_node();
            }
        }
        self.frames.mark_dirty();
    }

    /// Right click removes the node under the pointer, else the first edge.
    pub fn secondary_click(&mut self, x: f32, y: f32) {
        if let Some(id) = self.graph.node_at(x, y, &self.config) {
            self.graph.remove_node(id);
            self.frames.mark_dirty();
            return;
        }
        if let Some(eid) = self.graph.edge_at(x, y, &self.config) {
            self.graph.remove_edge(eid);
            self.frames.mark_dirty();
        }
    }

    pub fn identifier_display_toggled(&mut self, show_numbers: bool) {
        self.style.show_numbers = show_numbers;
        self.frames.mark_dirty();
    }

    pub fn edge_direction_mode_toggled(&mut self, on: bool) {
        self.graph.set_all_directed(on);
        self.frames.mark_dirty();
    }

    pub fn save_requested(&self) -> String {
        self.graph.to_json_string()
    }

    /// Replace the graph with the contents of an uploaded file. On failure
    /// the graph is untouched and a notice is queued for the user.
    pub fn load_requested(&mut self, bytes: &[u8]) -> Result<(), LoadError> {
        let res = std::str::from_utf8(bytes)
            .map_err(|e| LoadError::Malformed(e.to_string()))
            .and_then(|text| self.graph.from_json_str(text));
        self.finish_load(res)
    }

    /// Same as [`Editor::load_requested`] for an already parsed document.
    pub fn load_value(&mut self, v: serde_json::Value) -> Result<(), LoadError> {
        let res = self.graph.from_json_value(v);
        self.finish_load(res)
    }

    fn finish_load(&mut self, res: Result<(), LoadError>) -> Result<(), LoadError> {
        match &res {
            Ok(()) => self.frames.mark_dirty(),
            Err(e) => {
                log::warn!("load rejected ({}): {}", e.code(), e);
                self.notice = Some(e.notice().to_string());
            }
        }
        res
    }

    pub fn clear_requested(&mut self) {
        self.graph.clear();
        log::info!("graph cleared");
        self.frames.mark_dirty();
    }

    /// Pending user-facing message, if any.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn request_redraw(&mut self) {
        self.frames.mark_dirty();
    }

    pub fn needs_redraw(&self) -> bool {
        self.frames.is_dirty()
    }

    pub fn redraw<S: Surface + ?Sized>(&self, surface: &mut S) {
        render(&self.graph, &self.config, &self.style, surface);
    }

    /// Called once per host frame; redraws only when something changed.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        let Editor { graph, config, style, frames, .. } = self;
        frames.run_frame(|| render(graph, config, style, surface))
    }
}

use glam::Vec2;
use strum_macros::{Display, EnumIter};

use crate::geometry::{EdgeGeometry, CONTROL_RADIUS, MIN_CONTROL_DISTANCE, NODE_RADIUS};
use crate::model::{EdgeId, Graph, Node, NodeId};

/// Everything the pointer can rest on or drag, in pick priority order.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum ElementRef {
    #[default]
    None,
    Node(NodeId),
    Ctrl1(EdgeId),
    Ctrl2(EdgeId),
    Label(EdgeId),
    /// Pending node placement on the canvas.
    Drawing,
    /// A modal window owns the pointer.
    Window,
}

impl ElementRef {
    pub fn is_none(self) -> bool {
        self == ElementRef::None
    }
    pub fn is_some(self) -> bool {
        self != ElementRef::None
    }
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum Tool {
    #[default]
    Cursor,
    #[strum(serialize = "Add node")]
    AddNode,
    #[strum(serialize = "Remove node")]
    RemoveNode,
    Debug,
}

/// One frame's pointer snapshot in graph coordinates.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub world: Vec2,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
    pub in_canvas: bool,
    pub zoom: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            world: Vec2::ZERO,
            pressed: false,
            down: false,
            released: false,
            in_canvas: false,
            zoom: 1.0,
        }
    }
}

/// Hover, drag and tool state driving the canvas.
///
/// At most one element is active at a time. A press promotes the focused
/// element to active; releasing the button always returns to idle, except
/// for the modal window which is closed by its own buttons.
#[derive(Clone, Copy, Default, Debug)]
pub struct Interaction {
    pub focused: ElementRef,
    pub active: ElementRef,
    pub tool: Tool,
    pub show_control_points: bool,
    grab_offset: Vec2,
    anchor_node: Option<NodeId>,
}

impl Interaction {
    pub fn reset(&mut self) {
        self.focused = ElementRef::None;
        self.active = ElementRef::None;
        self.grab_offset = Vec2::ZERO;
        self.anchor_node = None;
    }

    /// Hands the pointer to a modal window until `reset` is called.
    pub fn open_window(&mut self) {
        self.reset();
        self.active = ElementRef::Window;
    }

    pub fn window_open(&self) -> bool {
        self.active == ElementRef::Window
    }

    /// Advances the state machine by one frame.
    ///
    /// `geometry` is the edge geometry the previous frame rendered with;
    /// picks run against it while node hits use live node positions.
    pub fn frame(&mut self, graph: &mut Graph, geometry: &[EdgeGeometry], pointer: &PointerState) {
        assert_eq!(
            geometry.len(),
            graph.edges().len(),
            "geometry cache must cover every edge"
        );
        assert!(pointer.zoom > 0.0, "pointer zoom must be positive");

        match self.active {
            ElementRef::Window => return,
            ElementRef::None => {}
            ElementRef::Drawing => self.placement_frame(graph, pointer),
            _ => self.drag_frame(graph, pointer),
        }

        if self.active.is_none() {
            self.idle_frame(graph, geometry, pointer);
        }
    }

    fn idle_frame(&mut self, graph: &mut Graph, geometry: &[EdgeGeometry], pointer: &PointerState) {
        self.focused = match self.tool {
            Tool::Cursor => self.pick(graph, geometry, pointer),
            Tool::AddNode => {
                if pointer.in_canvas {
                    ElementRef::Drawing
                } else {
                    ElementRef::None
                }
            }
            // TODO: removal gesture once it is decided whether deleting a
            // node cascades into its edges or refuses while edges remain.
            Tool::RemoveNode => ElementRef::None,
            Tool::Debug => ElementRef::None,
        };

        if pointer.pressed {
            self.press(graph, pointer);
        }
    }

    fn press(&mut self, graph: &Graph, pointer: &PointerState) {
        match self.focused {
            ElementRef::None | ElementRef::Window => {}
            ElementRef::Node(id) => {
                self.active = self.focused;
                self.grab_offset = graph.node(id).pos - pointer.world;
            }
            ElementRef::Label(id) => {
                self.active = self.focused;
                self.grab_offset = graph.edge(id).label_offset - pointer.world;
            }
            ElementRef::Ctrl1(id) => {
                self.active = self.focused;
                self.anchor_node = Some(graph.edge(id).from);
            }
            ElementRef::Ctrl2(id) => {
                self.active = self.focused;
                self.anchor_node = Some(graph.edge(id).to);
            }
            ElementRef::Drawing => {
                self.active = ElementRef::Drawing;
            }
        }
    }

    fn drag_frame(&mut self, graph: &mut Graph, pointer: &PointerState) {
        if pointer.released {
            self.reset();
            return;
        }

        match self.active {
            ElementRef::Node(id) => {
                graph.node_mut(id).pos = pointer.world + self.grab_offset;
            }
            ElementRef::Label(id) => {
                graph.edge_mut(id).label_offset = pointer.world + self.grab_offset;
            }
            ElementRef::Ctrl1(id) => {
                let anchor = self.anchor_pos(graph);
                graph.edge_mut(id).ctrl[0] = clamp_control_offset(pointer.world - anchor);
            }
            ElementRef::Ctrl2(id) => {
                let anchor = self.anchor_pos(graph);
                graph.edge_mut(id).ctrl[1] = clamp_control_offset(pointer.world - anchor);
            }
            ElementRef::None | ElementRef::Drawing | ElementRef::Window => {}
        }
    }

    fn placement_frame(&mut self, graph: &mut Graph, pointer: &PointerState) {
        if !pointer.released {
            return;
        }
        if self.tool == Tool::AddNode && pointer.in_canvas {
            graph.add_node(Node::new(pointer.world));
            log::debug!("node placed at: {}, {}", pointer.world.x, pointer.world.y);
        }
        self.reset();
    }

    fn anchor_pos(&self, graph: &Graph) -> Vec2 {
        let anchor = self
            .anchor_node
            .expect("control drag must hold an anchor node");
        graph.node(anchor).pos
    }

    /// First hit wins: nodes in index order, then per edge its control
    /// handles (when shown) and label.
    fn pick(&self, graph: &Graph, geometry: &[EdgeGeometry], pointer: &PointerState) -> ElementRef {
        if !pointer.in_canvas {
            return ElementRef::None;
        }

        for (index, node) in graph.nodes().iter().enumerate() {
            if node.pos.distance_squared(pointer.world) <= NODE_RADIUS * NODE_RADIUS {
                return ElementRef::Node(NodeId::new(index));
            }
        }

        // control handles keep their on-screen size, so the pick radius
        // grows in graph space as the view zooms out
        let control_radius = CONTROL_RADIUS / pointer.zoom;
        for (index, geo) in geometry.iter().enumerate() {
            let id = EdgeId::new(index);
            if self.show_control_points {
                if geo.ctrl1.distance_squared(pointer.world) <= control_radius * control_radius {
                    return ElementRef::Ctrl1(id);
                }
                if geo.ctrl2.distance_squared(pointer.world) <= control_radius * control_radius {
                    return ElementRef::Ctrl2(id);
                }
            }
            if geo.label_contains(pointer.world) {
                return ElementRef::Label(id);
            }
        }

        ElementRef::None
    }
}

/// Keeps a control point from collapsing into its anchor node.
///
/// Rescaled offsets land within a few ulps of `MIN_CONTROL_DISTANCE`, so
/// lengths inside that tolerance count as already clamped and a second pass
/// returns them unchanged.
pub fn clamp_control_offset(rel: Vec2) -> Vec2 {
    let len = rel.length();
    if len < 0.1 {
        Vec2::new(MIN_CONTROL_DISTANCE, 0.0)
    } else if len < MIN_CONTROL_DISTANCE * (1.0 - 1e-6) {
        rel * (MIN_CONTROL_DISTANCE / len)
    } else {
        rel
    }
}

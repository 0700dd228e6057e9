use glam::Vec2;

use graph::geometry::{self, CONTROL_RADIUS, EdgeGeometry, NODE_RADIUS};
use graph::interaction::{ElementRef, Interaction, PointerState};
use graph::model::{EdgeId, Graph, NodeId};

use crate::gui::camera::Camera;
use crate::gui::style::Style;

/// Runs one frame of the canvas: camera input, element interaction,
/// geometry refresh and drawing, in that order.
pub fn show(
    ui: &mut egui::Ui,
    graph: &mut Graph,
    geometry: &mut Vec<EdgeGeometry>,
    interaction: &mut Interaction,
    camera: &mut Camera,
    style: &Style,
) {
    let rect = ui.available_rect_before_wrap();
    let painter = ui.painter_at(rect);

    camera.update(ui, rect);

    // Picking runs against the cache from the previous frame, then the
    // cache is rebuilt so drawing sees the effect of this frame's input.
    let pointer = pointer_state(ui, rect, camera);
    interaction.frame(graph, geometry, &pointer);

    let font = egui::FontId::proportional(style.font_size);
    geometry::recompute(graph, geometry, |label| {
        let galley = painter.layout_no_wrap(label.to_string(), font.clone(), style.label_color);
        Vec2::new(galley.size().x, galley.size().y)
    });

    let canvas = Canvas {
        painter,
        rect,
        camera,
        style,
    };

    canvas.draw_origin();
    for (index, node) in graph.nodes().iter().enumerate() {
        let highlight = interaction.focused == ElementRef::Node(NodeId::new(index));
        canvas.draw_node(node.pos, highlight);
    }
    for (index, geo) in geometry.iter().enumerate() {
        canvas.draw_edge(interaction, EdgeId::new(index), geo, &graph.edges()[index].label);
    }
    if interaction.focused == ElementRef::Drawing || interaction.active == ElementRef::Drawing {
        canvas.draw_node(pointer.world, false);
    }
}

fn pointer_state(ui: &egui::Ui, rect: egui::Rect, camera: &Camera) -> PointerState {
    let (hover_pos, pressed, down, released) = ui.input(|input| {
        (
            input.pointer.hover_pos(),
            input.pointer.primary_pressed(),
            input.pointer.primary_down(),
            input.pointer.primary_released(),
        )
    });

    let screen = ui
        .ctx()
        .pointer_latest_pos()
        .or(hover_pos)
        .unwrap_or(rect.center());

    PointerState {
        world: camera.screen_to_world(rect.min, screen),
        pressed,
        down,
        released,
        in_canvas: hover_pos.map(|pos| rect.contains(pos)).unwrap_or(false),
        zoom: camera.zoom,
    }
}

struct Canvas<'a> {
    painter: egui::Painter,
    rect: egui::Rect,
    camera: &'a Camera,
    style: &'a Style,
}

impl Canvas<'_> {
    fn to_screen(&self, world: Vec2) -> egui::Pos2 {
        self.camera.world_to_screen(self.rect.min, world)
    }

    // The marker keeps its on-screen size at any zoom.
    fn draw_origin(&self) {
        let origin = self.to_screen(Vec2::ZERO);
        let half = 0.5 * self.style.origin_line_len;
        let stroke = egui::Stroke::new(1.0, self.style.origin_color);

        self.painter.line_segment(
            [origin - egui::vec2(half, 0.0), origin + egui::vec2(half, 0.0)],
            stroke,
        );
        self.painter.line_segment(
            [origin - egui::vec2(0.0, half), origin + egui::vec2(0.0, half)],
            stroke,
        );
        self.painter
            .circle_stroke(origin, self.style.origin_circle_radius, stroke);
    }

    fn draw_node(&self, pos: Vec2, highlight: bool) {
        let center = self.to_screen(pos);
        let zoom = self.camera.zoom;

        if highlight {
            let half = (NODE_RADIUS + self.style.hover_margin) * zoom;
            let backdrop = egui::Rect::from_center_size(center, egui::vec2(2.0 * half, 2.0 * half));
            self.painter
                .rect_filled(backdrop, 0.3 * half, self.style.hover_fill);
        }

        let radius = (NODE_RADIUS + 0.5 * self.style.node_border) * zoom;
        let stroke = egui::Stroke::new(self.style.node_border * zoom, self.style.node_color);
        self.painter.circle_stroke(center, radius, stroke);
    }

    fn draw_edge(&self, interaction: &Interaction, id: EdgeId, geo: &EdgeGeometry, label: &str) {
        let zoom = self.camera.zoom;
        let color = if interaction.active == ElementRef::Label(id) {
            self.style.edge_active_color
        } else {
            self.style.edge_color
        };

        let [p0, p1, p2, p3] = geo.bezier_points();
        let curve = egui::epaint::CubicBezierShape::from_points_stroke(
            [
                self.to_screen(p0),
                self.to_screen(p1),
                self.to_screen(p2),
                self.to_screen(p3),
            ],
            false,
            egui::Color32::TRANSPARENT,
            egui::Stroke::new(self.style.edge_width * zoom, color),
        );
        self.painter.add(curve);

        if interaction.focused == ElementRef::Label(id) {
            let size = egui::vec2(geo.label_size.x, geo.label_size.y) * zoom;
            let backdrop = egui::Rect::from_min_size(self.to_screen(geo.label_pos), size);
            self.painter
                .rect_filled(backdrop, 0.0, self.style.label_backdrop);
        }
        self.painter.text(
            self.to_screen(geo.label_pos),
            egui::Align2::LEFT_TOP,
            label,
            egui::FontId::proportional(self.style.font_size * zoom),
            self.style.label_color,
        );

        self.painter.add(egui::Shape::convex_polygon(
            vec![
                self.to_screen(geo.arrow_tip),
                self.to_screen(geo.arrow_base1),
                self.to_screen(geo.arrow_base2),
            ],
            color,
            egui::Stroke::NONE,
        ));

        if interaction.show_control_points {
            self.draw_control_handles(interaction, id, geo);
        }
    }

    fn draw_control_handles(&self, interaction: &Interaction, id: EdgeId, geo: &EdgeGeometry) {
        self.painter.line_segment(
            [self.to_screen(geo.start), self.to_screen(geo.ctrl1)],
            self.style.control_line,
        );
        self.painter.line_segment(
            [self.to_screen(geo.end), self.to_screen(geo.ctrl2)],
            self.style.control_line,
        );

        let handles = [
            (geo.ctrl1, ElementRef::Ctrl1(id)),
            (geo.ctrl2, ElementRef::Ctrl2(id)),
        ];
        for (pos, element) in handles {
            let color = if interaction.focused == element {
                self.style.control_selected_color
            } else {
                self.style.control_color
            };
            // Handles keep their on-screen size at any zoom.
            self.painter
                .circle_filled(self.to_screen(pos), CONTROL_RADIUS, color);
        }
    }
}

#![allow(dead_code)]

mod config;
mod gui;

use anyhow::Result;
use eframe::{NativeOptions, egui};
use glam::Vec2;
use strum::IntoEnumIterator;

use common::toggle::Toggle;
use graph::geometry::{self, EdgeGeometry};
use graph::interaction::{Interaction, Tool};
use graph::model::{Edge, Graph, Node};

use crate::config::Config;
use crate::gui::camera::Camera;
use crate::gui::node_window::NodeWindow;
use crate::gui::style::Style;

const WINDOW_WIDTH: f32 = 600.0;
const WINDOW_HEIGHT: f32 = 400.0;
const TOOL_PANEL_WIDTH: f32 = 96.0;

fn main() -> Result<()> {
    let log_level = if common::is_debug() { "debug" } else { "info" };
    common::log_setup::setup_logging(log_level);

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_app_id("nodarium"),
        ..Default::default()
    };

    // eframe::Error is not Send + Sync, so it cannot cross into anyhow as-is.
    eframe::run_native(
        "nodarium",
        options,
        Box::new(|cc| {
            configure_visuals(&cc.egui_ctx);
            Ok(Box::new(EditorApp::default()))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}

fn configure_visuals(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals.override_text_color = Some(egui::Color32::from_rgb(200, 200, 200));
    ctx.set_style(style);
}

#[derive(Debug)]
struct EditorApp {
    graph: Graph,
    geometry: Vec<EdgeGeometry>,
    interaction: Interaction,
    camera: Camera,
    style: Style,
    node_window: NodeWindow,
    config: Config,
}

impl Default for EditorApp {
    fn default() -> Self {
        let config = Config::load_or_default();

        let mut result = Self {
            graph: sample_graph(),
            geometry: Vec::new(),
            interaction: Interaction::default(),
            camera: Camera::default(),
            style: Style::new(),
            node_window: NodeWindow::default(),
            config,
        };

        result.interaction.show_control_points = result.config.show_control_points;
        // The first frame picks against this cache before any text is measured.
        geometry::recompute(&result.graph, &mut result.geometry, |_| Vec2::ZERO);

        result
    }
}

impl EditorApp {
    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        if ctx.input(|input| input.key_pressed(egui::Key::Q)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if ctx.input(|input| input.key_pressed(egui::Key::C)) {
            self.interaction.show_control_points.toggle();
            self.sync_show_control_points();
        }
        if ctx.input(|input| input.key_pressed(egui::Key::D)) {
            log::debug!("camera zoom {}", self.camera.zoom);
        }
    }

    fn sync_show_control_points(&mut self) {
        self.config.show_control_points = self.interaction.show_control_points;
        self.config.save();
    }

    fn tool_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);

        if ui
            .checkbox(&mut self.interaction.show_control_points, "Ctrl pts")
            .changed()
        {
            self.sync_show_control_points();
        }

        ui.separator();
        for tool in Tool::iter() {
            ui.selectable_value(&mut self.interaction.tool, tool, tool.to_string());
        }

        ui.separator();
        if ui.button("window").clicked() {
            self.node_window.open(&mut self.interaction);
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::SidePanel::left("tool_panel")
            .resizable(false)
            .exact_width(TOOL_PANEL_WIDTH)
            .show(ctx, |ui| self.tool_panel(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.style.background))
            .show(ctx, |ui| {
                gui::canvas::show(
                    ui,
                    &mut self.graph,
                    &mut self.geometry,
                    &mut self.interaction,
                    &mut self.camera,
                    &self.style,
                );
            });

        self.node_window.show(ctx, &mut self.interaction);
    }
}

fn sample_graph() -> Graph {
    let mut graph = Graph::default();

    let a = graph.add_node(Node::new(Vec2::new(200.0, 200.0)));
    let b = graph.add_node(Node::new(Vec2::new(400.0, 200.0)));
    let c = graph.add_node(Node::new(Vec2::new(300.0, 280.0)));

    let edges = [
        (a, b, Vec2::new(100.0, -5.0), Vec2::new(0.0, -120.0), "hello"),
        (a, c, Vec2::new(0.0, 80.0), Vec2::new(-75.0, 0.0), "world"),
        (b, c, Vec2::new(0.0, 100.0), Vec2::new(70.0, 60.0), "!"),
        (b, b, Vec2::new(90.0, -50.0), Vec2::new(90.0, 50.0), "repeat"),
    ];
    for (from, to, ctrl1, ctrl2, label) in edges {
        graph
            .add_edge(Edge {
                from,
                to,
                ctrl: [ctrl1, ctrl2],
                label_offset: Vec2::ZERO,
                label: label.to_string(),
            })
            .expect("sample graph edges should connect existing nodes");
    }

    graph
}

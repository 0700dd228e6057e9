use egui::{Color32, Stroke};

/// Colors and pen sizes for the canvas. Values follow the classic dark theme.
#[derive(Debug, Clone)]
pub struct Style {
    pub background: Color32,
    pub node_color: Color32,
    pub node_border: f32,
    pub hover_fill: Color32,
    pub hover_margin: f32,
    pub edge_color: Color32,
    pub edge_active_color: Color32,
    pub edge_width: f32,
    pub control_color: Color32,
    pub control_selected_color: Color32,
    pub control_line: Stroke,
    pub label_color: Color32,
    pub label_backdrop: Color32,
    pub origin_color: Color32,
    pub origin_line_len: f32,
    pub origin_circle_radius: f32,
    pub font_size: f32,
}

impl Style {
    pub fn new() -> Self {
        Self {
            background: Color32::from_rgb(20, 20, 20),
            node_color: Color32::WHITE,
            node_border: 4.0,
            hover_fill: Color32::from_rgb(40, 40, 40),
            hover_margin: 10.0,
            edge_color: Color32::from_rgb(0, 121, 241),
            edge_active_color: Color32::from_rgb(230, 41, 55),
            edge_width: 4.0,
            control_color: Color32::from_rgb(255, 203, 0),
            control_selected_color: Color32::from_rgb(0, 228, 48),
            control_line: Stroke::new(1.0, Color32::from_rgb(200, 200, 200)),
            label_color: Color32::from_rgb(200, 200, 200),
            label_backdrop: Color32::from_rgba_unmultiplied(255, 255, 255, 51),
            origin_color: Color32::WHITE,
            origin_line_len: 40.0,
            origin_circle_radius: 15.0,
            font_size: 25.0,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new()
    }
}

use glam::Vec2;

pub const MIN_ZOOM: f32 = 0.05;
const ZOOM_STEP: f32 = 0.05;

/// Screen-space pan plus uniform zoom mapping graph coordinates onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan: egui::Vec2,
    pub zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pan: egui::Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Camera {
    pub fn world_to_screen(&self, origin: egui::Pos2, world: Vec2) -> egui::Pos2 {
        origin + self.pan + egui::vec2(world.x, world.y) * self.zoom
    }

    pub fn screen_to_world(&self, origin: egui::Pos2, screen: egui::Pos2) -> Vec2 {
        let v = (screen - origin - self.pan) / self.zoom;
        Vec2::new(v.x, v.y)
    }

    /// Changes zoom while keeping the graph point under the cursor fixed.
    pub fn zoom_about(&mut self, origin: egui::Pos2, cursor: egui::Pos2, new_zoom: f32) {
        assert!(new_zoom > 0.0, "zoom must stay positive");

        let graph_pos = (cursor - origin - self.pan) / self.zoom;
        self.pan = cursor - origin - graph_pos * new_zoom;
        self.zoom = new_zoom;
    }

    fn stepped_zoom(&self, notches: f32) -> f32 {
        (self.zoom + notches * ZOOM_STEP).max(MIN_ZOOM)
    }

    /// Applies wheel zoom and right-button panning for the canvas at `rect`.
    pub fn update(&mut self, ui: &mut egui::Ui, rect: egui::Rect) {
        let pointer_pos = ui.input(|input| input.pointer.hover_pos());

        if let Some(cursor) = pointer_pos.filter(|pos| rect.contains(*pos)) {
            let notches = ui.input(|input| {
                input.events.iter().fold(0.0, |acc, event| match event {
                    egui::Event::MouseWheel {
                        unit: egui::MouseWheelUnit::Line | egui::MouseWheelUnit::Page,
                        delta,
                        ..
                    } => acc + delta.y,
                    _ => acc,
                })
            });

            if notches != 0.0 {
                self.zoom_about(rect.min, cursor, self.stepped_zoom(notches));
            }
        }

        let pan_id = ui.make_persistent_id("canvas_pan");
        let response = ui.interact(rect, pan_id, egui::Sense::drag());
        if response.dragged_by(egui::PointerButton::Secondary) {
            self.pan += response.drag_delta();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_round_trip_preserves_graph_position() {
        let camera = Camera {
            pan: egui::vec2(30.0, -12.0),
            zoom: 2.5,
        };
        let origin = egui::pos2(96.0, 0.0);
        let world = Vec2::new(123.0, -45.0);

        let screen = camera.world_to_screen(origin, world);
        let back = camera.screen_to_world(origin, screen);

        assert!((back - world).length() < 1e-3);
    }

    #[test]
    fn default_camera_maps_graph_origin_to_panel_corner() {
        let camera = Camera::default();
        let origin = egui::pos2(96.0, 0.0);

        assert_eq!(camera.world_to_screen(origin, Vec2::ZERO), origin);
    }

    #[test]
    fn zoom_about_keeps_cursor_point_fixed() {
        let mut camera = Camera {
            pan: egui::vec2(10.0, 20.0),
            zoom: 1.0,
        };
        let origin = egui::pos2(96.0, 0.0);
        let cursor = egui::pos2(300.0, 200.0);
        let before = camera.screen_to_world(origin, cursor);

        camera.zoom_about(origin, cursor, 1.6);
        let after = camera.screen_to_world(origin, cursor);

        assert!((after - before).length() < 1e-3);
        assert_eq!(camera.zoom, 1.6);
    }

    #[test]
    fn wheel_steps_change_zoom_linearly() {
        let camera = Camera {
            pan: egui::Vec2::ZERO,
            zoom: 1.0,
        };

        assert!((camera.stepped_zoom(2.0) - 1.1).abs() < 1e-6);
        assert!((camera.stepped_zoom(-3.0) - 0.85).abs() < 1e-6);
    }

    #[test]
    fn zoom_out_never_collapses_below_the_floor() {
        let camera = Camera {
            pan: egui::Vec2::ZERO,
            zoom: 0.1,
        };

        assert_eq!(camera.stepped_zoom(-10.0), MIN_ZOOM);
    }
}

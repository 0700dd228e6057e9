use glam::Vec2;

use crate::math::{cubic_bezier_point, normalize_or, perpendicular_ccw};
use crate::model::{Edge, Graph};

pub const NODE_RADIUS: f32 = 40.0;
pub const ARROW_LEN: f32 = 20.0;
pub const ARROW_HALF_BASE: f32 = 8.0;
pub const MIN_CONTROL_DISTANCE: f32 = 60.0;
pub const CONTROL_RADIUS: f32 = 6.0;

/// Derived world-space shape of one edge, recomputed every frame.
///
/// `start`..`end` are the four cubic bezier points. The curve stops
/// `ARROW_LEN` short of the target circle so the arrowhead can fill the
/// remaining gap, with its tip resting on the circle itself.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct EdgeGeometry {
    pub start: Vec2,
    pub ctrl1: Vec2,
    pub ctrl2: Vec2,
    pub end: Vec2,
    pub arrow_tip: Vec2,
    pub arrow_base1: Vec2,
    pub arrow_base2: Vec2,
    pub label_pos: Vec2,
    pub label_size: Vec2,
}

impl EdgeGeometry {
    pub fn compute(from: Vec2, to: Vec2, edge: &Edge, label_size: Vec2) -> Self {
        let start_dir = normalize_or(edge.ctrl[0], Vec2::X);
        let end_dir = normalize_or(edge.ctrl[1], Vec2::X);

        let start = from + start_dir * NODE_RADIUS;
        let end = to + end_dir * (NODE_RADIUS + ARROW_LEN);
        let ctrl1 = from + edge.ctrl[0];
        let ctrl2 = to + edge.ctrl[1];

        let label_pos = cubic_bezier_point(start, ctrl1, ctrl2, end, 0.5) + edge.label_offset;

        let half_base = perpendicular_ccw(end_dir) * ARROW_HALF_BASE;
        let arrow_tip = to + end_dir * NODE_RADIUS;
        let arrow_base1 = end + half_base;
        let arrow_base2 = end - half_base;

        Self {
            start,
            ctrl1,
            ctrl2,
            end,
            arrow_tip,
            arrow_base1,
            arrow_base2,
            label_pos,
            label_size,
        }
    }

    pub fn bezier_points(&self) -> [Vec2; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    /// Label hit area, anchored at its top-left corner like the drawn text.
    pub fn label_contains(&self, p: Vec2) -> bool {
        p.x >= self.label_pos.x
            && p.x <= self.label_pos.x + self.label_size.x
            && p.y >= self.label_pos.y
            && p.y <= self.label_pos.y + self.label_size.y
    }
}

/// Rebuilds the per-edge geometry cache from current node positions.
/// Text measurement stays with the caller since it needs a font.
pub fn recompute(
    graph: &Graph,
    cache: &mut Vec<EdgeGeometry>,
    mut measure_label: impl FnMut(&str) -> Vec2,
) {
    cache.clear();
    cache.extend(graph.edges().iter().map(|edge| {
        EdgeGeometry::compute(
            graph.node(edge.from).pos,
            graph.node(edge.to).pos,
            edge,
            measure_label(&edge.label),
        )
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeId;

    fn edge(ctrl1: Vec2, ctrl2: Vec2) -> Edge {
        Edge {
            from: NodeId::new(0),
            to: NodeId::new(1),
            ctrl: [ctrl1, ctrl2],
            label_offset: Vec2::ZERO,
            label: "hello".to_string(),
        }
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn curve_start_lies_on_source_circle() {
        let from = Vec2::new(200.0, 200.0);
        let to = Vec2::new(400.0, 200.0);
        let geo = EdgeGeometry::compute(
            from,
            to,
            &edge(Vec2::new(100.0, -5.0), Vec2::new(0.0, -120.0)),
            Vec2::ZERO,
        );

        assert!(close(geo.start.distance(from), NODE_RADIUS));
    }

    #[test]
    fn arrow_tip_rests_on_target_circle() {
        let from = Vec2::new(200.0, 200.0);
        let to = Vec2::new(400.0, 200.0);
        let geo = EdgeGeometry::compute(
            from,
            to,
            &edge(Vec2::new(100.0, -5.0), Vec2::new(0.0, -120.0)),
            Vec2::ZERO,
        );

        assert!(close(geo.arrow_tip.distance(to), NODE_RADIUS));
        assert!(close(geo.end.distance(to), NODE_RADIUS + ARROW_LEN));
    }

    #[test]
    fn arrow_base_is_symmetric_about_curve_end() {
        let geo = EdgeGeometry::compute(
            Vec2::new(200.0, 200.0),
            Vec2::new(400.0, 200.0),
            &edge(Vec2::new(100.0, -5.0), Vec2::new(-70.0, 30.0)),
            Vec2::ZERO,
        );

        let mid = (geo.arrow_base1 + geo.arrow_base2) * 0.5;
        assert!(close(mid.distance(geo.end), 0.0));
        assert!(close(
            geo.arrow_base1.distance(geo.arrow_base2),
            2.0 * ARROW_HALF_BASE
        ));
        // base runs perpendicular to the arrival direction
        let end_dir = (geo.end - Vec2::new(400.0, 200.0)).normalize();
        let base = geo.arrow_base1 - geo.arrow_base2;
        assert!(close(base.dot(end_dir), 0.0));
    }

    #[test]
    fn label_sits_at_curve_midpoint_plus_offset() {
        let from = Vec2::new(200.0, 200.0);
        let to = Vec2::new(400.0, 200.0);
        let mut e = edge(Vec2::new(0.0, 80.0), Vec2::new(-75.0, 0.0));

        let at_rest = EdgeGeometry::compute(from, to, &e, Vec2::ZERO);
        let anchor = cubic_bezier_point(at_rest.start, at_rest.ctrl1, at_rest.ctrl2, at_rest.end, 0.5);
        assert!(close(at_rest.label_pos.distance(anchor), 0.0));

        e.label_offset = Vec2::new(12.0, -30.0);
        let offset = EdgeGeometry::compute(from, to, &e, Vec2::ZERO);
        assert!(close(offset.label_pos.distance(anchor + e.label_offset), 0.0));
    }

    #[test]
    fn zero_control_vector_degrades_to_unit_x() {
        let from = Vec2::new(100.0, 100.0);
        let to = Vec2::new(100.0, 100.0);
        let geo = EdgeGeometry::compute(from, to, &edge(Vec2::ZERO, Vec2::ZERO), Vec2::ZERO);

        assert_eq!(geo.start, from + Vec2::X * NODE_RADIUS);
        assert_eq!(geo.end, to + Vec2::X * (NODE_RADIUS + ARROW_LEN));
        for p in [
            geo.start,
            geo.ctrl1,
            geo.ctrl2,
            geo.end,
            geo.arrow_tip,
            geo.arrow_base1,
            geo.arrow_base2,
            geo.label_pos,
        ] {
            assert!(p.is_finite(), "geometry must stay finite on degenerate input");
        }
    }

    #[test]
    fn self_loop_keeps_distinct_attach_points() {
        let at = Vec2::new(400.0, 200.0);
        let geo = EdgeGeometry::compute(
            at,
            at,
            &edge(Vec2::new(90.0, -50.0), Vec2::new(90.0, 50.0)),
            Vec2::ZERO,
        );

        assert!(geo.start.distance(geo.arrow_tip) > 1.0);
        assert!(close(geo.start.distance(at), NODE_RADIUS));
        assert!(close(geo.arrow_tip.distance(at), NODE_RADIUS));
    }

    #[test]
    fn recompute_tracks_node_positions() {
        use crate::model::{Graph, Node};

        let mut graph = Graph::default();
        let a = graph.add_node(Node::new(Vec2::new(200.0, 200.0)));
        let b = graph.add_node(Node::new(Vec2::new(400.0, 200.0)));
        graph
            .add_edge(Edge {
                from: a,
                to: b,
                ctrl: [Vec2::new(100.0, -5.0), Vec2::new(0.0, -120.0)],
                label_offset: Vec2::ZERO,
                label: "hello".to_string(),
            })
            .expect("endpoints exist");

        let mut cache = Vec::new();
        recompute(&graph, &mut cache, |_| Vec2::new(50.0, 25.0));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache[0].label_size, Vec2::new(50.0, 25.0));

        graph.node_mut(b).pos = Vec2::new(500.0, 300.0);
        recompute(&graph, &mut cache, |_| Vec2::new(50.0, 25.0));
        assert!(close(
            cache[0].arrow_tip.distance(Vec2::new(500.0, 300.0)),
            NODE_RADIUS
        ));
        // the control offset is relative, so its absolute point rides along
        assert_eq!(cache[0].ctrl2, Vec2::new(500.0, 180.0));
    }

    #[test]
    fn label_hit_area_matches_text_box() {
        let geo = EdgeGeometry {
            label_pos: Vec2::new(10.0, 20.0),
            label_size: Vec2::new(60.0, 25.0),
            ..Default::default()
        };

        assert!(geo.label_contains(Vec2::new(10.0, 20.0)));
        assert!(geo.label_contains(Vec2::new(70.0, 45.0)));
        assert!(geo.label_contains(Vec2::new(40.0, 30.0)));
        assert!(!geo.label_contains(Vec2::new(9.0, 30.0)));
        assert!(!geo.label_contains(Vec2::new(40.0, 46.0)));
    }
}

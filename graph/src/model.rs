use glam::Vec2;

use common::index_id;

index_id!(NodeId);
index_id!(EdgeId);

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Node {
    pub pos: Vec2,
}

impl Node {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    // control points relative to the endpoint node they belong to
    pub ctrl: [Vec2; 2],
    pub label_offset: Vec2,
    pub label: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("edge endpoint {0} is not a node in this graph")]
    InvalidEndpoint(NodeId),
}

#[derive(Clone, Default, Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn nodes(&self) -> &[Node] {
        self.nodes.as_slice()
    }
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        self.nodes.as_mut_slice()
    }
    pub fn edges(&self) -> &[Edge] {
        self.edges.as_slice()
    }
    pub fn edges_mut(&mut self) -> &mut [Edge] {
        self.edges.as_mut_slice()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }
    pub fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        &mut self.edges[id.index()]
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn add_node(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId::new(self.nodes.len() - 1)
    }

    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeId, GraphError> {
        if !self.contains_node(edge.from) {
            return Err(GraphError::InvalidEndpoint(edge.from));
        }
        if !self.contains_node(edge.to) {
            return Err(GraphError::InvalidEndpoint(edge.to));
        }
        self.edges.push(edge);
        Ok(EdgeId::new(self.edges.len() - 1))
    }
}

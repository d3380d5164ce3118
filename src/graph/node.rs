use crate::{node_id::NodeIDMap, Cost, Point};

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub name: String,
    pub pos: Point,
    pub edges: NodeIDMap<Cost>,
}

impl Node {
    pub fn new(name: String, pos: Point) -> Node {
        Node {
            name,
            pos,
            edges: NodeIDMap::default(),
        }
    }

    pub fn distance_to(&self, other: &Node) -> Cost {
        let (dx, dy) = (other.pos.0 - self.pos.0, other.pos.1 - self.pos.1);
        dx.hypot(dy)
    }
}

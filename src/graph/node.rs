use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    id: NodeId,
    /// power > 0.0
    power: f64,
}

impl Node {
    pub const DEFAULT_POWER: f64 = 1.0;

    pub fn new(id: NodeId, power: f64) -> Self {
        Self { id, power }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn power(&self) -> f64 {
        self.power
    }
}

/// Where in the descriptor graph a node sits, expressed in terms of the
/// generated container that would have held it (`eventProperties0[2]`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct NodePosition {
    /// The container (generated list name or descriptor section).
    pub container: String,
    /// Zero-based index of the node inside the container.
    pub index: usize,
}

impl NodePosition {
    /// Creates a new `NodePosition`.
    pub fn new(container: impl Into<String>, index: usize) -> Self {
        Self { container: container.into(), index }
    }
}

impl std::fmt::Display for NodePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.container, self.index)
    }
}

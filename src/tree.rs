use std::collections::VecDeque;

use log::debug;

use crate::Error;

pub type NodeId = usize;

pub const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
pub struct Tree {
    tokens: Vec<i64>,
    children: Vec<Vec<NodeId>>, // children[parent] = children of parent, in edge order.
}

impl Tree {
    /// Build a tree rooted at node 0 from token values and 0-based (parent, child) edges.
    ///
    /// Fails unless the edges form a single rooted tree covering every node.
    pub fn new(tokens: Vec<i64>, edges: &[(NodeId, NodeId)]) -> Result<Self, Error> {
        let node_count = tokens.len();
        if node_count == 0 {
            return Err(Error::EmptyTree);
        }

        if edges.len() != node_count - 1 {
            return Err(Error::EdgeCountMismatch {
                expect: node_count - 1,
                found: edges.len(),
            });
        }

        let mut children = vec![Vec::new(); node_count];
        let mut has_parent = vec![false; node_count];
        for &(parent, child) in edges {
            for id in [parent, child] {
                if id >= node_count {
                    return Err(Error::NodeOutOfRange { id, node_count });
                }
            }

            if child == ROOT {
                return Err(Error::RootAsChild);
            }

            if has_parent[child] {
                return Err(Error::MultipleParents(child));
            }

            has_parent[child] = true;
            children[parent].push(child);
        }

        // With one parent per non-root node, anything not reachable from root sits on a cycle.
        let mut reached = vec![false; node_count];
        let mut search_ids = VecDeque::from([ROOT]);
        while let Some(id) = search_ids.pop_front() {
            reached[id] = true;
            search_ids.extend(children[id].iter().copied());
        }
        if let Some(id) = reached.iter().position(|r| !r) {
            return Err(Error::UnreachableNode(id));
        }

        debug!("Built tree with {} node(s).", node_count);
        Ok(Self { tokens, children })
    }

    pub fn node_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn token(&self, node: NodeId) -> i64 {
        self.tokens[node]
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.children[node]
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.children[node].is_empty()
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut search_nodes = vec![(ROOT, 0)];
        while let Some((node, depth)) = search_nodes.pop() {
            height = height.max(depth);
            search_nodes.extend(self.children[node].iter().map(|&c| (c, depth + 1)));
        }

        height
    }
}

use log::{debug, trace};

use crate::tree::{NodeId, Tree};

/// Lazily computed subtree sums, each node's sum filled in at most once.
#[derive(Debug)]
pub struct SubtreeSums<'a> {
    tree: &'a Tree,
    sums: Vec<Option<i128>>,
}

impl<'a> SubtreeSums<'a> {
    pub fn new(tree: &'a Tree) -> Self {
        Self {
            tree,
            sums: vec![None; tree.node_count()],
        }
    }

    pub fn tree(&self) -> &'a Tree {
        self.tree
    }

    pub fn subtree_sum(&mut self, node: NodeId) -> i128 {
        if let Some(sum) = self.sums[node] {
            return sum;
        }

        // Post-order on an explicit stack.
        let tree = self.tree;
        let mut search_nodes = vec![(node, false)];
        while let Some((id, children_done)) = search_nodes.pop() {
            if self.sums[id].is_some() {
                continue;
            }

            let children = tree.children(id);
            if children_done {
                let sum = i128::from(tree.token(id))
                    + children
                        .iter()
                        .filter_map(|&c| self.sums[c])
                        .sum::<i128>();
                trace!("Subtree sum of node {} is {}.", id, sum);
                self.sums[id] = Some(sum);
            } else {
                search_nodes.push((id, true));
                search_nodes.extend(
                    children
                        .iter()
                        .filter(|&&c| self.sums[c].is_none())
                        .map(|&c| (c, false)),
                );
            }
        }

        self.sums[node].unwrap_or_default()
    }

    /// Count of nodes whose sum has been computed so far.
    pub fn cached_count(&self) -> usize {
        self.sums.iter().filter(|s| s.is_some()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descent {
    score: i128,
    path: Vec<NodeId>,
    stop_node: NodeId,
}

impl Descent {
    pub fn score(&self) -> i128 {
        self.score
    }

    /// Visited nodes, starting node first.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    pub fn stop_node(&self) -> NodeId {
        self.stop_node
    }
}

#[derive(Debug)]
pub struct GreedyDescender<'a> {
    sums: SubtreeSums<'a>,
}

impl<'a> GreedyDescender<'a> {
    pub fn new(tree: &'a Tree) -> Self {
        Self {
            sums: SubtreeSums::new(tree),
        }
    }

    pub fn sums(&self) -> &SubtreeSums<'a> {
        &self.sums
    }

    pub fn subtree_sum(&mut self, node: NodeId) -> i128 {
        self.sums.subtree_sum(node)
    }

    /// The first child with the strictly largest positive subtree sum, as (child, sum).
    ///
    /// Scanning starts from weight 0, so children weighing 0 or less are never chosen.
    pub fn heaviest_branch(&mut self, node: NodeId) -> Option<(NodeId, i128)> {
        let tree = self.sums.tree();
        let mut heaviest: Option<(NodeId, i128)> = None;
        for &child in tree.children(node) {
            let sum = self.sums.subtree_sum(child);
            if sum > heaviest.map_or(0, |(_, max_sum)| max_sum) {
                heaviest = Some((child, sum));
            }
        }

        heaviest
    }

    pub fn max_score(&mut self, node: NodeId, score_so_far: i128) -> i128 {
        self.descend(node, score_so_far).score()
    }

    /// Peel off everything but the heaviest branch, moving into it while it holds
    /// a strict majority of the available weight.
    pub fn descend(&mut self, node: NodeId, score_so_far: i128) -> Descent {
        let mut path = vec![node];
        let mut node = node;
        let mut score = score_so_far;
        loop {
            let available = self.sums.subtree_sum(node) + score;
            match self.heaviest_branch(node) {
                Some((branch, branch_sum)) if branch_sum > available - branch_sum => {
                    score = available - branch_sum;
                    debug!(
                        "Node {}: branch {} holds {} of {}, descend with score {}.",
                        node, branch, branch_sum, available, score
                    );
                    node = branch;
                    path.push(node);
                }
                heaviest => {
                    let score = available - heaviest.map_or(0, |(_, branch_sum)| branch_sum);
                    debug!(
                        "Node {}: no dominating branch in {}, stop with score {}.",
                        node, available, score
                    );
                    return Descent {
                        score,
                        path,
                        stop_node: node,
                    };
                }
            }
        }
    }
}

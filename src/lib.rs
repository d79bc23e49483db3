use std::{
    error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

mod peel;
mod tree;

pub use peel::{Descent, GreedyDescender, SubtreeSums};
pub use tree::{NodeId, Tree, ROOT};

#[derive(Debug)]
pub enum Error {
    EmptyTree,
    MissingLine(&'static str),
    InvalidNodeCount(String),
    InvalidTokenText(String),
    TokenCountMismatch { expect: usize, found: usize },
    InvalidEdgeText(String),
    EdgeCountMismatch { expect: usize, found: usize },
    NodeOutOfRange { id: NodeId, node_count: usize },
    RootAsChild,
    MultipleParents(NodeId),
    UnreachableNode(NodeId),
}

// Node ids are shown 1-based, the way they are written in the input.
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyTree => write!(f, "Tree has no node, expect at least the root."),
            Error::MissingLine(what) => write!(f, "Input ended before the line for {}.", what),
            Error::InvalidNodeCount(s) => {
                write!(f, "Invalid text({}) for node count, expect a positive integer.", s)
            }
            Error::InvalidTokenText(s) => write!(f, "Invalid text({}) for token value.", s),
            Error::TokenCountMismatch { expect, found } => write!(
                f,
                "Expect {} token value(s), found {}.",
                expect, found
            ),
            Error::InvalidEdgeText(s) => write!(
                f,
                "Invalid text({}) for an edge, expect two positive node ids.",
                s
            ),
            Error::EdgeCountMismatch { expect, found } => {
                write!(f, "Expect {} edge(s), found {}.", expect, found)
            }
            Error::NodeOutOfRange { id, node_count } => write!(
                f,
                "Node {} is out of range, there are only {} node(s).",
                id + 1,
                node_count
            ),
            Error::RootAsChild => write!(f, "Root node 1 can't be the child in an edge."),
            Error::MultipleParents(id) => write!(f, "Node {} has more than one parent.", id + 1),
            Error::UnreachableNode(id) => write!(
                f,
                "Node {} is unreachable from root node 1, edges don't form a tree.",
                id + 1
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    /// Read the tree from this file instead of stdin.
    pub input_path: Option<PathBuf>,
}

/// Score of the greedy peeling started at the root with nothing collected yet.
pub fn max_score(tree: &Tree) -> i128 {
    GreedyDescender::new(tree).max_score(ROOT, 0)
}

pub fn read_tree_from<P: AsRef<Path>>(path: P) -> Result<Tree> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    read_tree(BufReader::new(file))
        .with_context(|| format!("Failed to read tree in given file({}).", path.as_ref().display()))
}

pub fn read_tree_from_stdin() -> Result<Tree> {
    read_tree(io::stdin().lock()).context("Failed to read tree from stdin.")
}

/// Read node count, token values and 1-based `parent child` edge lines.
pub fn read_tree<R: BufRead>(reader: R) -> Result<Tree> {
    let mut lines = reader
        .lines()
        .enumerate()
        .filter(|(_, line)| line.as_ref().is_ok_and(|s| !s.trim().is_empty()) || line.is_err());
    let mut next_line = |what: &'static str| -> Result<String> {
        let (ind, line) = lines.next().ok_or(Error::MissingLine(what))?;
        line.with_context(|| format!("Failed to read line {}.", ind + 1))
    };

    let count_text = next_line("node count")?;
    let node_count = count_text
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or(Error::InvalidNodeCount(count_text.clone()))?;

    let tokens = next_line("token values")?
        .split_whitespace()
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| Error::InvalidTokenText(s.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if tokens.len() != node_count {
        return Err(Error::TokenCountMismatch {
            expect: node_count,
            found: tokens.len(),
        }
        .into());
    }

    let edge_count = node_count - 1;
    let edges = (0..edge_count)
        .map(|_| next_line("an edge").and_then(|s| Ok(parse_edge(&s)?)))
        .collect::<Result<Vec<_>>>()?;
    let extra_count = lines.count();
    if extra_count > 0 {
        return Err(Error::EdgeCountMismatch {
            expect: edge_count,
            found: edge_count + extra_count,
        }
        .into());
    }

    Ok(Tree::new(tokens, &edges)?)
}

fn parse_edge(text: &str) -> Result<(NodeId, NodeId), Error> {
    let ids = text
        .split_whitespace()
        .map(|s| s.parse::<NodeId>().ok().and_then(|id| id.checked_sub(1)))
        .collect::<Option<Vec<_>>>()
        .ok_or(Error::InvalidEdgeText(text.to_string()))?;
    match ids[..] {
        [parent, child] => Ok((parent, child)),
        _ => Err(Error::InvalidEdgeText(text.to_string())),
    }
}

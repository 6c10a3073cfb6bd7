use std::fs;

use anyhow::{Context, Result};
use camino::Utf8Path;
use tracing::warn;

/// Declarative description of a directory tree.
///
/// Entries keep their insertion order. Each maps a path segment to either a
/// list of file names or a nested subtree. Specs are built once by the
/// blueprint functions and never mutated afterwards; no two entries may
/// produce the same path.
#[derive(Debug, Clone, Default)]
pub struct TreeSpec {
    entries: Vec<(&'static str, Node)>,
}

#[derive(Debug, Clone)]
pub enum Node {
    /// File names to create inside the directory named by the segment.
    /// An empty list still creates the directory.
    Files(Vec<&'static str>),
    /// A nested subtree rooted at the segment.
    Dir(TreeSpec),
}

impl TreeSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files<I>(mut self, segment: &'static str, names: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        self.entries
            .push((segment, Node::Files(names.into_iter().collect())));
        self
    }

    pub fn dir(mut self, segment: &'static str, subtree: TreeSpec) -> Self {
        self.entries.push((segment, Node::Dir(subtree)));
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &Node)> {
        self.entries.iter().map(|(segment, node)| (*segment, node))
    }
}

/// Create the directories and empty files described by `spec` under `base`.
///
/// Directory creation is idempotent. File creation is not: every listed
/// file is written empty, truncating whatever was there before, so
/// re-running against an existing tree erases the contents of listed
/// files. Each truncation of a pre-existing file is logged as a warning so
/// the data loss is at least visible.
pub fn materialize(base: &Utf8Path, spec: &TreeSpec) -> Result<()> {
    for (segment, node) in spec.entries() {
        let path = base.join(segment);
        match node {
            Node::Files(names) => {
                fs::create_dir_all(&path)
                    .with_context(|| format!("creating directory {}", path))?;
                for name in names {
                    let file = path.join(name);
                    if file.exists() {
                        warn!("truncating existing file {}", file);
                    }
                    fs::write(&file, "").with_context(|| format!("writing {}", file))?;
                }
            }
            Node::Dir(subtree) => {
                fs::create_dir_all(&path)
                    .with_context(|| format!("creating directory {}", path))?;
                materialize(&path, subtree)?;
            }
        }
    }
    Ok(())
}

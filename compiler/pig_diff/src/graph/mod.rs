//! Transform graph cycle detection.
//!
//! Transform requests form a directed graph from source to destination
//! domain. A chain that leads back to a domain already on the current path
//! would make that domain its own ancestor. A request from a domain to
//! itself is the shortest such chain.

use pig_diagnostic::CompileError;
use pig_ir::TransformRequest;
use rustc_hash::{FxHashMap, FxHashSet};

/// Reject transform requests whose graph contains a cycle.
///
/// Traversal starts from sources in request order, so the reported chain is
/// deterministic.
pub fn check_acyclic(requests: &[TransformRequest]) -> Result<(), CompileError> {
    let mut edges: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    for req in requests {
        edges
            .entry(req.source.as_str())
            .or_default()
            .push(req.destination.as_str());
    }

    let mut walk = Walk {
        edges: &edges,
        path: Vec::new(),
        on_path: FxHashSet::default(),
        done: FxHashSet::default(),
    };
    for req in requests {
        walk.visit(req.source.as_str())?;
    }
    Ok(())
}

/// Depth-first traversal state. The traversal keeps its own stack, so
/// arbitrarily long transform chains are walked without recursion.
struct Walk<'a> {
    edges: &'a FxHashMap<&'a str, Vec<&'a str>>,
    /// Domain tags currently being followed, outermost first, each with the
    /// index of its next outgoing edge to follow.
    path: Vec<(&'a str, usize)>,
    on_path: FxHashSet<&'a str>,
    done: FxHashSet<&'a str>,
}

impl<'a> Walk<'a> {
    fn visit(&mut self, root: &'a str) -> Result<(), CompileError> {
        if self.done.contains(root) {
            return Ok(());
        }
        self.enter(root);

        let edges = self.edges;
        while let Some((tag, next)) = self.path.last_mut() {
            let tag = *tag;
            let Some(&dest) = edges.get(tag).and_then(|out| out.get(*next)) else {
                self.path.pop();
                self.on_path.remove(tag);
                self.done.insert(tag);
                continue;
            };
            *next += 1;

            if self.done.contains(dest) {
                continue;
            }
            if self.on_path.contains(dest) {
                return Err(self.cycle(dest));
            }
            self.enter(dest);
        }
        Ok(())
    }

    fn enter(&mut self, tag: &'a str) {
        self.path.push((tag, 0));
        self.on_path.insert(tag);
    }

    /// The chain from the first visit of `tag` back to `tag`.
    fn cycle(&self, tag: &str) -> CompileError {
        let start = self.path.iter().position(|(t, _)| *t == tag).unwrap_or(0);
        let mut chain: Vec<String> = self.path[start..]
            .iter()
            .map(|(t, _)| (*t).to_owned())
            .collect();
        chain.push(tag.to_owned());
        CompileError::CyclicTransform { chain }
    }
}

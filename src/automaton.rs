//! Failure/output link construction and the matching scan.
//!
//! [`build_links`] turns the trie into an Aho-Corasick automaton by wiring
//! failure and output links breadth-first; [`scan`] then walks an input in a
//! single pass, emitting one raw hit per keyword occurrence. Both run in time
//! linear in their input (total keyword scalars, text scalars + hits).

use std::collections::VecDeque;

use crate::fold;
use crate::trie::{Trie, ROOT};

/// An unfiltered match: the terminal node that fired plus the byte span of
/// the occurrence in the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawHit {
    pub node: usize,
    pub start: usize,
    pub end: usize,
}

/// Recompute failure and output links for every node.
///
/// Idempotent: running it twice on an unchanged trie yields the same links.
/// Must be re-run after any insert or remove before the next [`scan`].
pub(crate) fn build_links(trie: &mut Trie) {
    let mut queue = VecDeque::new();

    let direct: Vec<usize> = trie.node(ROOT).children.values().copied().collect();
    for id in direct {
        let node = trie.node_mut(id);
        node.fail = ROOT;
        node.output = None;
        queue.push_back(id);
    }

    while let Some(u) = queue.pop_front() {
        let transitions: Vec<(char, usize)> =
            trie.node(u).children.iter().map(|(&c, &v)| (c, v)).collect();
        for (c, v) in transitions {
            // Deepest proper suffix of v's path that exists in the trie:
            // follow u's failure chain until some node can consume `c`.
            let mut f = trie.node(u).fail;
            while f != ROOT && !trie.node(f).children.contains_key(&c) {
                f = trie.node(f).fail;
            }
            let fail = match trie.node(f).children.get(&c).copied() {
                Some(w) if w != v => w,
                _ => ROOT,
            };

            let output = if trie.node(fail).is_terminal() {
                Some(fail)
            } else {
                trie.node(fail).output
            };

            let node = trie.node_mut(v);
            node.fail = fail;
            node.output = output;
            queue.push_back(v);
        }
    }
}

/// Scan `text` and emit every keyword occurrence as a raw hit.
///
/// Hits come out ordered by increasing end byte; for hits ending on the same
/// scalar, the deepest (longest) keyword is emitted first, following the
/// output chain outward. No filtering or reordering happens here.
///
/// Links must be current (see [`build_links`]) before calling.
pub(crate) fn scan(trie: &Trie, text: &str, fold_scalars: bool) -> Vec<RawHit> {
    let window = trie.max_depth();
    if window == 0 {
        return Vec::new();
    }

    // Start offsets of the most recent `window` scalars. A keyword of k
    // scalars ending at scalar index i began at ring[(i + 1 - k) % window];
    // k never exceeds `window`, so the slot has not been overwritten yet.
    let mut ring = vec![0usize; window];
    let mut hits = Vec::new();
    let mut state = ROOT;

    for (i, scalar) in fold::scalars(text, fold_scalars).enumerate() {
        ring[i % window] = scalar.start;
        state = next_state(trie, state, scalar.ch);

        let mut terminal = if trie.node(state).is_terminal() {
            Some(state)
        } else {
            trie.node(state).output
        };
        while let Some(t) = terminal {
            let k = trie.node(t).depth;
            hits.push(RawHit {
                node: t,
                start: ring[(i + 1 - k) % window],
                end: scalar.end,
            });
            terminal = trie.node(t).output;
        }
    }

    hits
}

fn next_state(trie: &Trie, mut state: usize, c: char) -> usize {
    loop {
        if let Some(&next) = trie.node(state).children.get(&c) {
            return next;
        }
        if state == ROOT {
            return ROOT;
        }
        state = trie.node(state).fail;
    }
}

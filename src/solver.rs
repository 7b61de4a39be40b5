use log::trace;

use crate::network::FlowNetwork;
use crate::node::{DieIndex, Node};
use crate::search::shortest_augmenting_path;

/// Which die, if any, currently supplies each letter position.
pub type Assignment = Vec<Option<DieIndex>>;

/// What the max-flow computation converged to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlowOutcome {
    /// Total units of flow pushed from source to sink.
    pub flow: u32,
    /// The die bound to each letter position by the last augmentation that touched it.
    pub assignment: Assignment,
}

/// The Edmonds-Karp maximum flow algorithm over a [`FlowNetwork`].
///
/// Each phase pushes flow along a shortest augmenting path and records which die now supplies which letter. A later
/// phase may reroute an earlier binding through a reverse arc; the assignment then holds the newer die for that position.
pub struct EdmondsKarp<'a> {
    network: FlowNetwork<'a>,
    flow: u32,
    assignment: Assignment,
}

impl<'a> From<FlowNetwork<'a>> for EdmondsKarp<'a> {
    fn from(network: FlowNetwork<'a>) -> Self {
        let assignment = vec![None; network.word_len()];
        Self {
            network,
            flow: 0,
            assignment,
        }
    }
}

impl<'a> EdmondsKarp<'a> {
    /// The residual network in its current state.
    pub fn network(&self) -> &FlowNetwork<'a> {
        &self.network
    }

    /// Flow pushed so far.
    pub fn flow(&self) -> u32 {
        self.flow
    }

    /// Run a single phase. Returns `false`, changing nothing, if no augmenting path remains.
    pub fn augment(&mut self) -> bool {
        let Some(path) = shortest_augmenting_path(&self.network) else {
            return false;
        };

        // always 1 on unit-capacity networks
        let bottleneck = path.arcs()
            .map(|(from, to)| self.network.residual(from, to))
            .min()
            .unwrap_or(0);
        debug_assert!(bottleneck > 0, "search returned a saturated path {:?}", path.nodes());

        for (from, to) in path.arcs() {
            // reverse letter -> die arcs need no bookkeeping: the forward arc into that letter, earlier on this path,
            // has already rebound it
            if let (Node::Die(die), Node::Letter(pos)) = (from, to) {
                if self.network.is_forward(from, to) {
                    self.assignment[pos] = Some(die);
                }
            }

            self.network.push(from, to, bottleneck);
        }

        self.flow += bottleneck;
        trace!("augmented by {} along {:?}, flow now {}", bottleneck, path.nodes(), self.flow);
        true
    }

    /// Augment until no path remains and return the converged flow and assignment.
    pub fn run(mut self) -> FlowOutcome {
        while self.augment() {}

        FlowOutcome {
            flow: self.flow,
            assignment: self.assignment,
        }
    }
}

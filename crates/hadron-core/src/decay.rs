//! Decay channel and branch descriptions returned by channel sources.

use serde::{Deserialize, Serialize};

use crate::particle::PdgCode;

/// Classification of a decay channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DecayKind {
    /// Strong decay into hadrons.
    #[default]
    Hadronic,
    /// Electromagnetic decay into a lepton pair (plus spectators).
    Dilepton,
}

/// Final state reachable from a parent species.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecayChannel {
    /// Daughter species in definition order.
    pub products: Vec<PdgCode>,
    /// Relative orbital angular momentum of the daughters.
    #[serde(default)]
    pub angular_momentum: u8,
    /// Whether the channel is hadronic.
    #[serde(default)]
    pub kind: DecayKind,
}

/// A decay channel weighted with its partial width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayBranch {
    /// Final state of the branch.
    pub channel: DecayChannel,
    /// Partial width in GeV at the queried mass.
    pub width: f64,
}

/// Ordered channel list for one particle at one mass.
pub type DecayBranchList = Vec<DecayBranch>;

/// Sum of the partial widths of `branches`.
pub fn total_width(branches: &[DecayBranch]) -> f64 {
    branches.iter().map(|branch| branch.width).sum()
}

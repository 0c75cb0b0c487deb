#![deny(missing_docs)]

//! Decay action discovery for a discrete-time hadron transport loop.
//!
//! Every timestep the transport loop hands its particles to
//! [`ActionFinder::find_actions_in_cell`]; unstable particles whose
//! sampled decay time falls within the step, and which are already formed
//! at that instant, come back as [`DecayAction`]s carrying their open
//! channels. When the run ends, [`ActionFinder::find_final_actions`] decays
//! whatever is left so that only stable species reach the output.

pub mod action;
pub mod finder;
pub mod gate;
pub mod sampler;

pub use action::{ActionList, DecayAction, DecayActionBuilder};
pub use finder::{ActionFinder, DecayActionsFinder};
pub use gate::FormationGate;
pub use sampler::{decay_probability, decay_rate, DecayTimeSampler, ExponentialDecayTime};

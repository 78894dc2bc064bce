//! Version-to-version code resolution
//!
//! A source code is first mapped directly through the history, precursor and
//! revocation relations. When nothing maps, the search widens to the code's
//! relatives and the closest common ancestor of whatever they map to. The
//! result is classified by how confidently it can be used.

pub mod classify;
pub mod direct;
pub mod log;
pub mod neighborhood;
pub mod translate;

pub use classify::{classify, Classifier, OutcomeClass, Resolution};
pub use direct::{resolve_direct_candidates, Combine, Strategy, StrategyChain};
pub use log::{LogEntry, ResolutionLog};
pub use neighborhood::expand_neighborhood;
pub use translate::{TranslatedCode, Translator};

//! `rstest-bdd` behavioural suite for `provider_outcome`.
//!
//! [`fixtures`] holds the shared scenario state, [`steps`] registers the step
//! implementations and [`scenarios`] binds the `.feature` files under
//! `tests/features` to them.

mod fixtures;
mod scenarios;
mod steps;

//! Binds the behavioural feature files to the step registry.

use crate::fixtures::{RailwayContext, railway_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/railway.feature",
    fixtures = [railway_context: RailwayContext]
);
scenarios!(
    "tests/features/void_outcome.feature",
    fixtures = [railway_context: RailwayContext]
);

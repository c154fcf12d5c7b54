//! Test suites for routing and the session loop.

mod run_unit;

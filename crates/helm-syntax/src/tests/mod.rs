//! Test suites for the line parser.

mod unit;

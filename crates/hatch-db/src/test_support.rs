//! Shared test utilities for hatch-db unit tests.

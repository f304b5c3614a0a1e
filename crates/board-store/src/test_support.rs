//! Shared test utilities for board-store unit tests.

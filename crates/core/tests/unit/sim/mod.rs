//! Unit tests for simulation utilities.

//! Property-based tests for argument-translation guarantees

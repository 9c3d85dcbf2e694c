//! Integration tests for the rlc CLI
//!
//! These tests spawn the actual binary and test end-to-end behavior.
//! They never need a running launcher: every request either fails
//! validation first or targets an address nothing listens on.

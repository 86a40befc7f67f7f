//! Scene-level integration tests

//! Integration tests for the CertHub identity platform.
//!
//! Each suite drives the full wiring — router, extractors, identity core,
//! in-memory store — through `tower::ServiceExt::oneshot`.

mod helpers;

mod auth_flow_test;
mod permission_test;
mod session_test;

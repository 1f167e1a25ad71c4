//! Shared infrastructure for `PostgreSQL`-backed service tests.

mod db;

pub(crate) use context::TestContext;

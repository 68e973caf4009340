//! Wire contracts shared between the dashboard and the analytics backend.

pub mod dashboards;
pub mod shared;

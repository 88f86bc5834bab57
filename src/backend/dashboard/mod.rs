//! Role dashboards and student settings
//!
//! Dashboards only identify the caller and their section; there is no
//! aggregation behind them.

pub mod handlers;

pub use handlers::{
    admin_dashboard, coach_dashboard, get_settings, student_dashboard, update_settings,
    DashboardResponse,
};

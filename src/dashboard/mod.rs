//! Sidebar navigation and dashboard overview
//!
//! Both are static: the links are fixed and the metrics are example values.
//! Nothing here reads from storage.

use crate::core::auth::CurrentUser;
use axum::{Json, Router, routing::get};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

const SIDEBAR_LINKS: &[NavLink] = &[
    NavLink {
        label: "Dashboard",
        path: "/dashboard",
    },
    NavLink {
        label: "Members",
        path: "/members",
    },
    NavLink {
        label: "Bills",
        path: "/bills",
    },
    NavLink {
        label: "Payments",
        path: "/payments",
    },
    NavLink {
        label: "Notifications",
        path: "/notifications",
    },
    NavLink {
        label: "Profile",
        path: "/profile",
    },
];

/// Sidebar entries in display order
pub fn sidebar_links() -> &'static [NavLink] {
    SIDEBAR_LINKS
}

/// Overview figures shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_members: u32,
    pub pending_bills: u32,
    pub collected_this_month: f64,
    pub open_complaints: u32,
}

impl DashboardStats {
    /// Hardcoded example figures
    pub fn example() -> Self {
        Self {
            total_members: 120,
            pending_bills: 18,
            collected_this_month: 245_000.0,
            open_complaints: 4,
        }
    }
}

/// GET /api/navigation
pub async fn navigation(CurrentUser(_): CurrentUser) -> Json<&'static [NavLink]> {
    Json(sidebar_links())
}

/// GET /api/dashboard
pub async fn overview(CurrentUser(_): CurrentUser) -> Json<DashboardStats> {
    Json(DashboardStats::example())
}

/// Routes for the static navigation and overview
pub fn routes() -> Router {
    Router::new()
        .route("/navigation", get(navigation))
        .route("/dashboard", get(overview))
}

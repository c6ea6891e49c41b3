use anyhow::{Context, Result};
use portal_application::{GuardView, PortalContext};
use portal_core::auth::RequiredRole;

pub async fn run(context: &PortalContext, role: &str) -> Result<()> {
    let required: RequiredRole = role.parse().context("Invalid role")?;
    let guard = context.route_guard();

    println!("{}", GuardView::Loading);
    guard.enter(required).await;

    let view = guard.view().await;
    println!("{}", view);
    if view == GuardView::AccessDenied {
        println!("Run `portal logout` to sign in with a different account.");
    }
    Ok(())
}

use anyhow::Result;
use portal_application::PortalContext;
use std::time::Duration;

pub fn login(context: &PortalContext, token: &str) -> Result<()> {
    context.session_usecase().login(token)?;
    println!("Logged in.");
    Ok(())
}

pub async fn logout(context: &PortalContext) -> Result<()> {
    let notice = context.session_usecase().logout();

    // Give the backend notification a chance before the process exits.
    let timeout = Duration::from_secs(context.config().api.timeout_secs);
    if !notice.settle(timeout).await {
        tracing::warn!("[Logout] Backend notification still pending; giving up");
    }

    println!(
        "Logged out. Redirected to {}.",
        context.config().navigation.landing_route
    );
    Ok(())
}

pub fn status(context: &PortalContext) -> Result<()> {
    let session = context.session_usecase().status()?;
    println!("logged in: {}", session.is_logged_in);
    println!(
        "token:     {}",
        if session.access_token.is_some() {
            "present"
        } else {
            "absent"
        }
    );
    println!("theme:     {}", session.theme);
    Ok(())
}

pub fn theme(context: &PortalContext, name: &str) -> Result<()> {
    context.session_usecase().set_theme(name)?;
    println!("Theme set to {}.", name);
    Ok(())
}

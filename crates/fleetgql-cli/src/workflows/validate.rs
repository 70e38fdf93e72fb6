use fleetgql_core::ApiClient;

use crate::report::Report;

pub async fn run(client: &ApiClient, report: &mut Report) {
    report.section("validateAuthn");
    if let Some(status) = report.expect_data("validateAuthn", client.validate_authn().await) {
        let user = status
            .user
            .map(|user| user.to_string())
            .unwrap_or_else(|| "unknown user".to_string());
        println!(
            "   {} ({})",
            status.message.as_deref().unwrap_or("no message"),
            user
        );
        report.check("validateAuthn success flag", status.success, "server reported success=false");
    }
}

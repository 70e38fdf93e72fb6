//! Unit workflow: list, create, read back, update, delete, confirm gone.

use fleetgql_core::models::{CreateUnitInput, ListUnitsInput, UpdateUnitInput};
use fleetgql_core::ApiClient;
use tracing::info;

use crate::report::Report;

const UPDATED_MODEL_YEAR: &str = "2023";

fn sample_unit(account_id: &str) -> CreateUnitInput {
    CreateUnitInput {
        account_id: account_id.to_string(),
        suggested_vin: Some("1HGBH41JXMN109186".into()),
        make: Some("Honda".into()),
        manufacturer_name: Some("Honda Motor Co.".into()),
        model: Some("Civic".into()),
        model_year: Some("2021".into()),
        series: Some("Sport".into()),
        vehicle_type: Some("Passenger Car".into()),
    }
}

pub async fn run(client: &ApiClient, account_id: &str, report: &mut Report) {
    report.section("Units");

    let list = ListUnitsInput::new(account_id, Some(10));
    if let Some(page) = report.expect_data("listUnits", client.list_units(&list).await) {
        println!("   {} unit(s) in account {}", page.count, account_id);
    }

    let input = sample_unit(account_id);
    let Some(created) = report.expect_data("createUnit", client.create_unit(&input).await) else {
        report.skip("getUnit, updateUnit, deleteUnit", "createUnit failed");
        return;
    };
    info!(unit_id = %created.id, "Created unit");
    println!("   created {} ({})", created.id, created.display_name());

    if let Some(fetched) =
        report.expect_data("getUnit", client.get_unit(&created.id, account_id).await)
    {
        report.check(
            "getUnit matches createUnit input",
            input.matches(&fetched),
            format!("{:?}", fetched),
        );
    }

    let mut update = UpdateUnitInput::new(&created.id, account_id);
    update.model_year = Some(UPDATED_MODEL_YEAR.to_string());
    if let Some(updated) = report.expect_data("updateUnit", client.update_unit(&update).await) {
        report.check(
            "updateUnit applied modelYear",
            updated.model_year.as_deref() == Some(UPDATED_MODEL_YEAR),
            format!("modelYear is {:?}", updated.model_year),
        );
    }

    if let Some(fetched) = report.expect_data(
        "getUnit after update",
        client.get_unit(&created.id, account_id).await,
    ) {
        report.check(
            "getUnit reflects updated modelYear",
            fetched.model_year.as_deref() == Some(UPDATED_MODEL_YEAR),
            format!("modelYear is {:?}", fetched.model_year),
        );
    }

    if let Some(deleted) =
        report.expect_data("deleteUnit", client.delete_unit(&created.id, account_id).await)
    {
        report.check("deleteUnit returned true", deleted, "server returned false");
    }

    report.expect_absent(
        "getUnit after delete",
        client.get_unit(&created.id, account_id).await,
    );
}

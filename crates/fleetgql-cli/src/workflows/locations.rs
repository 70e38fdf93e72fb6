//! Location workflow covering both address and coordinate locations.

use fleetgql_core::models::{
    Address, AddressLocationInput, Coordinates, CoordinatesLocationInput, ListLocationsInput,
};
use fleetgql_core::ApiClient;
use tracing::info;

use crate::report::Report;

const MISSING_LOCATION_ID: &str = "non-existent-location-id";

fn main_street(account_id: &str) -> AddressLocationInput {
    AddressLocationInput {
        account_id: account_id.to_string(),
        address: Address {
            street_address: Some("123 Main St".into()),
            city: Some("San Francisco".into()),
            state_province: Some("CA".into()),
            postal_code: Some("94105".into()),
            country: Some("US".into()),
        },
    }
}

fn oak_avenue(account_id: &str) -> AddressLocationInput {
    AddressLocationInput {
        account_id: account_id.to_string(),
        address: Address {
            street_address: Some("456 Oak Ave".into()),
            city: Some("New York".into()),
            state_province: Some("NY".into()),
            postal_code: Some("10001".into()),
            country: Some("US".into()),
        },
    }
}

fn coordinates(
    account_id: &str,
    latitude: f64,
    longitude: f64,
    accuracy: f64,
) -> CoordinatesLocationInput {
    CoordinatesLocationInput {
        account_id: account_id.to_string(),
        coordinates: Coordinates {
            latitude,
            longitude,
            altitude: None,
            accuracy: Some(accuracy),
        },
    }
}

pub async fn run(client: &ApiClient, account_id: &str, report: &mut Report) {
    report.section("Locations");

    report.expect_absent(
        "getLocation for unknown id",
        client.get_location(account_id, MISSING_LOCATION_ID).await,
    );

    let options = ListLocationsInput::with_limit(10);
    if let Some(page) = report.expect_data(
        "listLocations",
        client.list_locations(account_id, Some(&options)).await,
    ) {
        println!("   {} location(s) on the first page", page.locations.len());
    }

    address_round_trip(client, account_id, report).await;
    coordinates_lifecycle(client, account_id, report).await;
    address_update(client, account_id, report).await;
}

async fn address_round_trip(client: &ApiClient, account_id: &str, report: &mut Report) {
    let input = main_street(account_id);
    let Some(id) = report.expect_data(
        "createAddressLocation",
        client.create_address_location(&input).await,
    ) else {
        report.skip("getLocation (address)", "createAddressLocation failed");
        return;
    };
    info!(location_id = %id, "Created address location");

    if let Some(location) = report.expect_data(
        "getLocation (address)",
        client.get_location(account_id, &id).await,
    ) {
        report.check(
            "address location matches input",
            location.address() == Some(&input.address),
            format!("{:?}", location),
        );
    }
}

async fn coordinates_lifecycle(client: &ApiClient, account_id: &str, report: &mut Report) {
    let input = coordinates(account_id, 37.7749, -122.4194, 10.0);
    let Some(id) = report.expect_data(
        "createCoordinatesLocation",
        client.create_coordinates_location(&input).await,
    ) else {
        report.skip(
            "getLocation, updateCoordinatesLocation, deleteLocation",
            "createCoordinatesLocation failed",
        );
        return;
    };
    info!(location_id = %id, "Created coordinates location");

    if let Some(location) = report.expect_data(
        "getLocation (coordinates)",
        client.get_location(account_id, &id).await,
    ) {
        report.check(
            "coordinates location matches input",
            location.coordinates() == Some(&input.coordinates),
            format!("{:?}", location),
        );
    }

    let moved = coordinates(account_id, 40.7128, -74.0060, 5.0);
    report.expect_data(
        "updateCoordinatesLocation",
        client.update_coordinates_location(&id, &moved).await,
    );

    report.expect_data(
        "deleteLocation (coordinates)",
        client.delete_location(account_id, &id).await,
    );

    report.expect_absent(
        "getLocation after delete",
        client.get_location(account_id, &id).await,
    );
}

async fn address_update(client: &ApiClient, account_id: &str, report: &mut Report) {
    let Some(id) = report.expect_data(
        "createAddressLocation (for update)",
        client.create_address_location(&main_street(account_id)).await,
    ) else {
        report.skip("updateAddressLocation", "createAddressLocation failed");
        return;
    };

    report.expect_data(
        "updateAddressLocation",
        client.update_address_location(&id, &oak_avenue(account_id)).await,
    );

    report.expect_data(
        "deleteLocation (address)",
        client.delete_location(account_id, &id).await,
    );
}

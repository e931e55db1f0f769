use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::aircraft::list_aircraft,
        super::api::aircraft::closest_aircraft,
    ),
    info(
        title = "Planespotter API",
        description = "Aircraft near a location, ranked by distance",
        version = "0.1.0"
    ),
    tags(
        (name = "aircraft", description = "Nearby aircraft")
    )
)]
pub struct ApiDoc;

//! Hotel handlers - the resourceful hotel controller.
//!
//! Lookups that find nothing answer `200` with `data: {}` rather than `404`.
//! Clients of this API branch on `data`, not on the status code.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use hotel_core::Hotel;

use crate::dto::{Envelope, HotelData, parse_input};
use crate::error::HttpError;
use crate::state::AppState;

/// Parse a path segment into a hotel ID.
///
/// Segments that are not integers cannot name a stored hotel and are
/// answered through the not-found path.
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// List all hotels.
pub async fn index(State(state): State<AppState>) -> Result<Json<Envelope<Vec<Hotel>>>, HttpError> {
    let hotels = state.hotels.list().await?;
    Ok(Json(Envelope::new("Hotel has been listed successfully", hotels)))
}

/// Create a new hotel from the merged query and body fields.
pub async fn store(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Envelope<Hotel>>), HttpError> {
    let body = parse_input(&headers, query.as_deref(), &body)?;
    let hotel = state.hotels.create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new("Hotel has been created successfully", hotel)),
    ))
}

/// Show a single hotel.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<HotelData>>, HttpError> {
    let hotel = match parse_id(&id) {
        Some(hotel_id) => state.hotels.get(hotel_id).await?,
        None => None,
    };

    let envelope = match hotel {
        Some(hotel) => Envelope::new("Hotel been fetched successfully.", HotelData::Hotel(hotel)),
        None => Envelope::new(format!("Hotel with id {id} is not found"), HotelData::missing()),
    };
    Ok(Json(envelope))
}

/// Overwrite a hotel's name and address.
///
/// The body is validated before the lookup, so an invalid body is a `400`
/// whether or not the hotel exists.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Envelope<HotelData>>, HttpError> {
    let body = parse_input(&headers, query.as_deref(), &body)?;

    let hotel = match parse_id(&id) {
        Some(hotel_id) => state.hotels.update(hotel_id, &body).await?,
        None => {
            // Nothing to look up, but the body still has to pass validation
            state.hotels.validate(&body)?;
            None
        }
    };

    let envelope = match hotel {
        Some(hotel) => Envelope::new(
            "Hotel has been fetched successfully.",
            HotelData::Hotel(hotel),
        ),
        None => Envelope::new(
            format!("Hotel with id {id} is not found or has not been created"),
            HotelData::missing(),
        ),
    };
    Ok(Json(envelope))
}

/// Delete a hotel, echoing its last known values.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<HotelData>>, HttpError> {
    let hotel = match parse_id(&id) {
        Some(hotel_id) => state.hotels.delete(hotel_id).await?,
        None => None,
    };

    let envelope = match hotel {
        Some(hotel) => Envelope::new(
            format!("Hotel with id {id} has been deleted successfully."),
            HotelData::Hotel(hotel),
        ),
        None => Envelope::new(format!("Hotel with id {id} is not found"), HotelData::missing()),
    };
    Ok(Json(envelope))
}

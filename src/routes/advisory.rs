// src/routes/advisory.rs
use axum::{Json, extract::rejection::JsonRejection};
use tracing::{info, warn};

use crate::{
    error::AppError,
    message::{LocationInput, RiskQuery, RiskResponse, RouteQuery, RoutesResponse},
    services::advisory,
};

const LOCATION_REQUIRED: &str = "Location is required";

pub async fn risk_assessment_handler(
    payload: Result<Json<RiskQuery>, JsonRejection>,
) -> Result<Json<RiskResponse>, AppError> {
    let Json(query) = payload.map_err(|rejection| {
        warn!(error = %rejection, "rejected risk assessment body");
        AppError::Validation(rejection.body_text())
    })?;
    let location = query
        .location
        .and_then(LocationInput::complete)
        .ok_or_else(|| AppError::Validation(LOCATION_REQUIRED.to_string()))?;

    let risk_assessment = advisory::assess_risk(&location);
    info!(latitude = location.latitude, longitude = location.longitude, ?risk_assessment, "risk assessed");

    Ok(Json(RiskResponse {
        success: true,
        risk_assessment,
        recommendations: advisory::recommendations(),
    }))
}

pub async fn evacuation_routes_handler(
    payload: Result<Json<RouteQuery>, JsonRejection>,
) -> Result<Json<RoutesResponse>, AppError> {
    let Json(query) = payload.map_err(|rejection| {
        warn!(error = %rejection, "rejected evacuation routes body");
        AppError::Validation(rejection.body_text())
    })?;
    let location = query
        .location
        .and_then(LocationInput::complete)
        .ok_or_else(|| AppError::Validation(LOCATION_REQUIRED.to_string()))?;

    info!(
        latitude = location.latitude,
        longitude = location.longitude,
        disaster_type = query.disaster_type.as_deref().unwrap_or("unspecified"),
        "evacuation routes requested"
    );

    Ok(Json(RoutesResponse {
        success: true,
        routes: advisory::evacuation_routes(&location, query.disaster_type.as_deref()),
        nearest_shelters: advisory::nearest_shelters(&location),
    }))
}

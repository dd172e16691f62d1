use axum::{extract::Query, Json};
use serde::Serialize;

use crate::directory::{colleges, facets, College, CollegeFilter, Facets};

#[derive(Debug, Serialize)]
pub struct CollegeListResponse {
    pub colleges: Vec<&'static College>,
    pub total: usize,
}

/// GET /api/v1/colleges?search=&course=&location=
pub async fn handle_list_colleges(
    Query(filter): Query<CollegeFilter>,
) -> Json<CollegeListResponse> {
    let colleges = filter.apply(colleges());
    tracing::debug!(matches = colleges.len(), "college filter applied");
    Json(CollegeListResponse {
        total: colleges.len(),
        colleges,
    })
}

/// GET /api/v1/colleges/facets
pub async fn handle_facets() -> Json<Facets> {
    Json(facets(colleges()))
}

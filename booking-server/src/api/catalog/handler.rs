//! Catalog API Handlers (公共浏览)

use axum::{Json, extract::State};

use shared::AppResult;
use shared::models::{BranchTableTypeDetail, BranchWithBrand, Brand};

use crate::core::ServerState;
use crate::db::repository::{branch, branch_table_type, brand};

#[derive(serde::Serialize)]
pub struct BrandsResponse {
    pub brands: Vec<Brand>,
}

#[derive(serde::Serialize)]
pub struct BranchesResponse {
    pub branches: Vec<BranchWithBrand>,
}

#[derive(serde::Serialize)]
pub struct BranchTableTypesResponse {
    pub items: Vec<BranchTableTypeDetail>,
}

/// GET /api/catalog/brands - 品牌列表
pub async fn brands(State(state): State<ServerState>) -> AppResult<Json<BrandsResponse>> {
    let brands = brand::find_all(&state.pool).await?;
    Ok(Json(BrandsResponse { brands }))
}

/// GET /api/catalog/branches - 分店列表 (含品牌名)
pub async fn branches(State(state): State<ServerState>) -> AppResult<Json<BranchesResponse>> {
    let branches = branch::find_all_with_brand(&state.pool).await?;
    Ok(Json(BranchesResponse { branches }))
}

/// GET /api/catalog/branch-table-types - 各分店配置的桌型
pub async fn branch_table_types(
    State(state): State<ServerState>,
) -> AppResult<Json<BranchTableTypesResponse>> {
    let items = branch_table_type::find_all_details(&state.pool).await?;
    Ok(Json(BranchTableTypesResponse { items }))
}

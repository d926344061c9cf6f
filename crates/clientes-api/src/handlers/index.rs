use axum::{extract::State, Json};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::state::AppState;

#[derive(Serialize)]
pub struct IndexResponse {
    message: String,
    version: &'static str,
    endpoints: BTreeMap<&'static str, &'static str>,
}

/// Public API version, independent of the crate version.
const API_VERSION: &str = "1.0.0";

const ENDPOINTS: [(&str, &str); 8] = [
    ("GET /", "Informações da API"),
    ("GET /health", "Verificar se a API está funcionando"),
    ("GET /clientes", "Listar todos os clientes"),
    ("GET /clientes/{id}", "Buscar cliente por ID"),
    ("GET /clientes/buscar/email/{email}", "Buscar cliente por email"),
    ("POST /clientes", "Criar novo cliente"),
    ("PUT /clientes/{id}", "Atualizar cliente"),
    ("DELETE /clientes/{id}", "Deletar cliente"),
];

/// Service metadata and endpoint directory - GET /
pub async fn index(State(state): State<AppState>) -> Json<IndexResponse> {
    Json(IndexResponse {
        message: state.config.app.name.clone(),
        version: API_VERSION,
        endpoints: ENDPOINTS.into_iter().collect(),
    })
}

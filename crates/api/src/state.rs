use marquee_db::catalog::Catalog;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the catalog wraps a pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Query handle over the database pool.
    pub catalog: Catalog,
}

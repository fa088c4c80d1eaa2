use serde::Deserialize;
use utoipa::ToSchema;

/// Offset/limit paging for the product listing. Values are taken as-is:
/// the listing contract does no bounds validation.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct Paginacion {
    pub desde: Option<u64>,
    pub limite: Option<u64>,
}

impl Paginacion {
    pub fn resolver(&self) -> (u64, u64) {
        let desde = self.desde.unwrap_or(0);
        let limite = self.limite.unwrap_or(5);
        (desde, limite)
    }
}

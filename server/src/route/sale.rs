use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::response::SaleResponse;
use application::service::GetSaleService;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

pub trait SaleRouter {
    fn route_sale(self) -> Self;
}

impl SaleRouter for Router<AppModule> {
    fn route_sale(self) -> Self {
        self.route(
            "/ventas",
            get(|State(module): State<AppModule>| async move {
                module
                    .pgpool()
                    .get_all_sales()
                    .await
                    .map(|sales| {
                        Json(sales.into_iter().map(SaleResponse::from).collect::<Vec<_>>())
                    })
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}

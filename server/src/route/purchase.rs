use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::PurchaseRequest;
use crate::response::PurchaseResponse;
use application::service::PurchaseBookService;
use application::transfer::PurchaseDto;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;

pub trait PurchaseRouter {
    fn route_purchase(self) -> Self;
}

impl PurchaseRouter for Router<AppModule> {
    fn route_purchase(self) -> Self {
        self.route(
            "/comprar",
            post(
                |State(module): State<AppModule>,
                 WithRejection(Json(req), _): WithRejection<Json<PurchaseRequest>, ErrorStatus>| async move {
                    module
                        .pgpool()
                        .purchase_book(PurchaseDto::from(req))
                        .await
                        .map(PurchaseResponse::from)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}

use crate::handler::AppModule;
use crate::response::StatusResponse;
use axum::routing::get;
use axum::Router;

pub trait StatusRouter {
    fn route_status(self) -> Self;
}

impl StatusRouter for Router<AppModule> {
    fn route_status(self) -> Self {
        self.route("/status", get(|| async { StatusResponse::online() }))
    }
}

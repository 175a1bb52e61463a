use crate::error::{ErrorResponse, ErrorStatus};
use crate::handler::AppModule;
use crate::request::{CreateBookRequest, UpdateBookRequest};
use crate::response::{BookMutationResponse, BookResponse, CreatedBookResponse};
use application::service::{
    CreateBookService, DeleteBookService, GetBookService, UpdateBookService,
};
use application::transfer::{CreateBookDto, DeleteBookDto, GetBookDto};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/libros",
            get(|State(module): State<AppModule>| async move {
                module
                    .pgpool()
                    .get_all_books()
                    .await
                    .map(|books| {
                        Json(books.into_iter().map(BookResponse::from).collect::<Vec<_>>())
                    })
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 WithRejection(Json(req), _): WithRejection<Json<CreateBookRequest>, ErrorStatus>| async move {
                    let dto = CreateBookDto::from(req);
                    let echo = dto.clone();
                    module
                        .pgpool()
                        .create_book(dto)
                        .await
                        .map(|id| CreatedBookResponse::from((id, echo)))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/libros/:id",
            get(
                |State(module): State<AppModule>,
                 WithRejection(Path(id), _): WithRejection<Path<i64>, ErrorStatus>| async move {
                    module
                        .pgpool()
                        .get_book(GetBookDto { id })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|found| {
                            found
                                .map(|book| BookResponse::from(book).into_response())
                                .unwrap_or_else(|| {
                                    (
                                        StatusCode::NOT_FOUND,
                                        Json(ErrorResponse::new("No encontrado")),
                                    )
                                        .into_response()
                                })
                        })
                },
            )
            .put(
                |State(module): State<AppModule>,
                 WithRejection(Path(id), _): WithRejection<Path<i64>, ErrorStatus>,
                 WithRejection(Json(req), _): WithRejection<Json<UpdateBookRequest>, ErrorStatus>| async move {
                    module
                        .pgpool()
                        .update_book(req.into_dto(id))
                        .await
                        .map(|()| BookMutationResponse::updated(id))
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>,
                 WithRejection(Path(id), _): WithRejection<Path<i64>, ErrorStatus>| async move {
                    module
                        .pgpool()
                        .delete_book(DeleteBookDto { id })
                        .await
                        .map(|()| BookMutationResponse::deleted(id))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}

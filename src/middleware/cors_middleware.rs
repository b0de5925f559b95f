// src/middleware/cors_middleware.rs

use actix_web::{http::header, middleware::DefaultHeaders};

/// Cabeçalhos CORS abertos para qualquer origem.
///
/// Aplicado no `App`, cobre todas as respostas (sucesso, erro 500 e 404):
/// `Access-Control-Allow-Origin: *`, `Access-Control-Allow-Methods: GET`
/// e `Access-Control-Allow-Headers: Content-Type`.
pub fn open_cors() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, "GET"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    #[actix_web::test]
    async fn headers_on_success_error_and_not_found() {
        let app = test::init_service(
            App::new()
                .wrap(open_cors())
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() }))
                .route(
                    "/boom",
                    web::get().to(|| async { HttpResponse::InternalServerError().finish() }),
                ),
        )
        .await;

        for path in ["/ping", "/boom", "/missing"] {
            let res = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
            let headers = res.headers();
            assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
            assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(), "GET");
            assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(), "Content-Type");
        }
    }
}

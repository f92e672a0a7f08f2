use actix_cors::Cors;
use actix_web::http::header;

/// Cross-origin policy for the API.
///
/// The quiz frontend is served from another origin, so browsers preflight
/// every POST. Only origins on the configured allow-list get the CORS
/// headers; requests from anywhere else fail the preflight. Credentials
/// are allowed because the session token travels with the request body.
pub fn cors_middleware(origins: &[String]) -> Cors {
  let mut cors = Cors::default()
    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
    .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
    .supports_credentials();

  for origin in origins {
    cors = cors.allowed_origin(origin);
  }

  cors
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::http::Method;
  use actix_web::{App, HttpResponse, test, web};

  fn origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
  }

  #[actix_web::test]
  async fn preflight_allows_listed_origins() {
    let app = test::init_service(
      App::new()
        .wrap(cors_middleware(&origins()))
        .route("/api/login", web::post().to(|| async { HttpResponse::Ok().finish() })),
    )
    .await;

    let req = test::TestRequest::with_uri("/api/login")
      .method(Method::OPTIONS)
      .insert_header((header::ORIGIN, "http://localhost:3000"))
      .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(
      resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .unwrap(),
      "http://localhost:3000"
    );
    assert_eq!(
      resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
        .unwrap(),
      "true"
    );
  }

  #[actix_web::test]
  async fn preflight_rejects_unlisted_origins() {
    let app = test::init_service(
      App::new()
        .wrap(cors_middleware(&origins()))
        .route("/api/login", web::post().to(|| async { HttpResponse::Ok().finish() })),
    )
    .await;

    let req = test::TestRequest::with_uri("/api/login")
      .method(Method::OPTIONS)
      .insert_header((header::ORIGIN, "http://elsewhere.example"))
      .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_client_error());
    assert!(
      resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none()
    );
  }

  #[actix_web::test]
  async fn plain_request_from_listed_origin_gets_the_headers() {
    let app = test::init_service(
      App::new()
        .wrap(cors_middleware(&origins()))
        .route("/api/login", web::post().to(|| async { HttpResponse::Ok().finish() })),
    )
    .await;

    let req = test::TestRequest::post()
      .uri("/api/login")
      .insert_header((header::ORIGIN, "http://localhost:3000"))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(
      resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .unwrap(),
      "http://localhost:3000"
    );
  }
}

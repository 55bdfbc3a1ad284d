//! In-process stand-in for the admin backend.

use std::sync::{Arc, Mutex};

use actix_web::cookie::Cookie;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde::Deserialize;
use serde_json::json;

pub const PASSWORD: &str = "secret";
const SESSION_COOKIE: &str = "session";

/// Query strings received by the find endpoints, in arrival order.
#[derive(Clone, Default)]
pub struct Received(Arc<Mutex<Vec<String>>>);

impl Received {
    pub fn queries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn record(&self, req: &HttpRequest) {
        self.0.lock().unwrap().push(req.query_string().to_string());
    }
}

#[derive(Deserialize)]
struct Credentials {
    username: String,
    password: String,
}

fn signed_in(req: &HttpRequest) -> bool {
    req.cookie(SESSION_COOKIE)
        .is_some_and(|cookie| cookie.value() == "ok")
}

async fn login(credentials: web::Json<Credentials>) -> HttpResponse {
    if credentials.username != "admin" || credentials.password != PASSWORD {
        return HttpResponse::Unauthorized().finish();
    }
    HttpResponse::Ok()
        .cookie(Cookie::build(SESSION_COOKIE, "ok").path("/").finish())
        .finish()
}

async fn logout() -> HttpResponse {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    HttpResponse::Ok().cookie(cookie).finish()
}

async fn verify_auth(req: HttpRequest) -> HttpResponse {
    if signed_in(&req) {
        HttpResponse::Ok().finish()
    } else {
        HttpResponse::Unauthorized().finish()
    }
}

async fn find_clients(req: HttpRequest, received: web::Data<Received>) -> HttpResponse {
    if !signed_in(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    received.record(&req);

    let clients = [
        json!({ "client_id": "abc123", "first_name": "John", "last_name": "Doe" }),
        json!({ "client_id": "def456", "first_name": "Mary Ann", "last_name": "O'Neil" }),
    ];
    let last_name = web::Query::<std::collections::HashMap<String, String>>::from_query(
        req.query_string(),
    )
    .ok()
    .and_then(|query| query.get("last_name").cloned());
    let found: Vec<_> = clients
        .into_iter()
        .filter(|client| match &last_name {
            Some(last_name) => client["last_name"] == last_name.as_str(),
            None => true,
        })
        .collect();
    HttpResponse::Ok().json(found)
}

async fn find_bookings(req: HttpRequest, received: web::Data<Received>) -> HttpResponse {
    received.record(&req);
    HttpResponse::Ok().json(json!({ "message": "not a list" }))
}

async fn find_invoices(req: HttpRequest, received: web::Data<Received>) -> HttpResponse {
    received.record(&req);
    HttpResponse::InternalServerError().finish()
}

/// Starts the fake backend on an ephemeral port and returns its base URL.
pub fn spawn_backend() -> std::io::Result<(String, Received)> {
    let received = Received::default();
    let data = web::Data::new(received.clone());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/login", web::post().to(login))
            .route("/logout", web::post().to(logout))
            .route("/verify_auth", web::get().to(verify_auth))
            .route("/clientele/find", web::get().to(find_clients))
            .route("/booking/find", web::get().to(find_bookings))
            .route("/invoicing/find", web::get().to(find_invoices))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    Ok((format!("http://{addr}"), received))
}

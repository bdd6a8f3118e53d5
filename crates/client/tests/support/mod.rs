//! In-process stand-ins for the booking API and the storefront API

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Form, Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};

use storefront_qa_common::{AuthCredentials, Booking, BookingPatch};

pub const TOKEN: &str = "stub-token";

#[derive(Default)]
pub struct StubState {
    next_id: u64,
    pub bookings: BTreeMap<u64, Booking>,
    pub accounts: HashMap<String, HashMap<String, String>>,
    /// Answer every full update with a 500
    pub fail_updates: bool,
}

pub type Shared = Arc<Mutex<StubState>>;

/// Serve `router` on an ephemeral port and return its base URL
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn booking_api(state: Shared) -> Router {
    Router::new()
        .route("/auth", post(create_token))
        .route("/booking", get(list_bookings).post(create_booking))
        .route(
            "/booking/:id",
            get(get_booking)
                .put(update_booking)
                .patch(patch_booking)
                .delete(delete_booking),
        )
        .with_state(state)
}

/// Storefront API mounted under `/api` like the real site
pub fn storefront_api(state: Shared) -> Router {
    let api = Router::new()
        .route("/createAccount", post(create_account))
        .route("/updateAccount", put(update_account))
        .route("/verifyLogin", post(verify_login))
        .route("/getUserDetailByEmail", get(user_detail))
        .route("/deleteAccount", axum::routing::delete(delete_account))
        .route("/productsList", get(products))
        .route("/searchProduct", post(search_product))
        .route("/brandsList", get(brands))
        .with_state(state);
    Router::new().nest("/api", api)
}

async fn create_token(Json(credentials): Json<AuthCredentials>) -> Json<Value> {
    if credentials.username == "admin" && credentials.password == "password123" {
        Json(json!({ "token": TOKEN }))
    } else {
        Json(json!({ "reason": "Bad credentials" }))
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("token={}", TOKEN))
        .unwrap_or(false)
}

async fn list_bookings(
    State(state): State<Shared>,
    Query(filter): Query<HashMap<String, String>>,
) -> Json<Value> {
    let state = state.lock();
    let ids: Vec<Value> = state
        .bookings
        .iter()
        .filter(|(_, b)| filter.get("firstname").map_or(true, |f| &b.firstname == f))
        .filter(|(_, b)| filter.get("lastname").map_or(true, |l| &b.lastname == l))
        .map(|(id, _)| json!({ "bookingid": id }))
        .collect();
    Json(Value::Array(ids))
}

async fn create_booking(State(state): State<Shared>, Json(booking): Json<Booking>) -> Json<Value> {
    let mut state = state.lock();
    state.next_id += 1;
    let id = state.next_id;
    state.bookings.insert(id, booking.clone());
    Json(json!({ "bookingid": id, "booking": booking }))
}

async fn get_booking(State(state): State<Shared>, Path(id): Path<u64>) -> Response {
    match state.lock().bookings.get(&id) {
        Some(booking) => Json(booking.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

async fn update_booking(
    State(state): State<Shared>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(booking): Json<Booking>,
) -> Response {
    if !authorized(&headers) {
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    }
    let mut state = state.lock();
    if state.fail_updates {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
    }
    match state.bookings.get_mut(&id) {
        Some(existing) => {
            *existing = booking.clone();
            Json(booking).into_response()
        }
        None => (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response(),
    }
}

async fn patch_booking(
    State(state): State<Shared>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(patch): Json<BookingPatch>,
) -> Response {
    if !authorized(&headers) {
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    }
    let mut state = state.lock();
    match state.bookings.get_mut(&id) {
        Some(existing) => {
            *existing = patch.apply_to(existing);
            Json(existing.clone()).into_response()
        }
        None => (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response(),
    }
}

async fn delete_booking(State(state): State<Shared>, Path(id): Path<u64>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    }
    match state.lock().bookings.remove(&id) {
        Some(_) => (StatusCode::CREATED, "Created").into_response(),
        None => (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response(),
    }
}

fn message(code: u16, text: &str) -> Json<Value> {
    Json(json!({ "responseCode": code, "message": text }))
}

async fn create_account(
    State(state): State<Shared>,
    Form(form): Form<HashMap<String, String>>,
) -> Json<Value> {
    let Some(email) = form.get("email").cloned() else {
        return message(400, "Bad request, email parameter is missing in POST request.");
    };
    let mut state = state.lock();
    if state.accounts.contains_key(&email) {
        return message(400, "Email already exists!");
    }
    state.accounts.insert(email, form);
    message(201, "User created!")
}

async fn update_account(
    State(state): State<Shared>,
    Form(form): Form<HashMap<String, String>>,
) -> Json<Value> {
    let email = form.get("email").cloned().unwrap_or_default();
    let mut state = state.lock();
    match state.accounts.get_mut(&email) {
        Some(existing) if existing.get("password") == form.get("password") => {
            *existing = form;
            message(200, "User updated!")
        }
        _ => message(404, "Account not found!"),
    }
}

fn credentials_match(state: &StubState, form: &HashMap<String, String>) -> bool {
    form.get("email")
        .and_then(|email| state.accounts.get(email))
        .map_or(false, |account| account.get("password") == form.get("password"))
}

async fn verify_login(
    State(state): State<Shared>,
    Form(form): Form<HashMap<String, String>>,
) -> Json<Value> {
    if credentials_match(&state.lock(), &form) {
        message(200, "User exists!")
    } else {
        message(404, "User not found!")
    }
}

async fn user_detail(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let state = state.lock();
    let account = query.get("email").and_then(|email| state.accounts.get(email));
    match account {
        Some(account) => {
            let field = |key: &str| account.get(key).cloned().unwrap_or_default();
            Json(json!({
                "responseCode": 200,
                "user": {
                    "id": 1,
                    "name": field("name"),
                    "email": field("email"),
                    "title": field("title"),
                    "birth_day": field("birth_date"),
                    "birth_month": field("birth_month"),
                    "birth_year": field("birth_year"),
                    "first_name": field("firstname"),
                    "last_name": field("lastname"),
                    "company": field("company"),
                    "address1": field("address1"),
                    "address2": field("address2"),
                    "country": field("country"),
                    "state": field("state"),
                    "city": field("city"),
                    "zipcode": field("zipcode"),
                }
            }))
        }
        None => message(404, "Account not found with this email, try another email!"),
    }
}

async fn delete_account(
    State(state): State<Shared>,
    Form(form): Form<HashMap<String, String>>,
) -> Json<Value> {
    let mut state = state.lock();
    if credentials_match(&state, &form) {
        if let Some(email) = form.get("email") {
            state.accounts.remove(email);
        }
        message(200, "Account deleted!")
    } else {
        message(404, "Account not found!")
    }
}

fn catalogue() -> Vec<Value> {
    vec![
        json!({"id": 1, "name": "Blue Top", "price": "Rs. 500", "brand": "Polo",
               "category": {"usertype": {"usertype": "Women"}, "category": "Tops"}}),
        json!({"id": 2, "name": "Men Tshirt", "price": "Rs. 400", "brand": "H&M",
               "category": {"usertype": {"usertype": "Men"}, "category": "Tshirts"}}),
        json!({"id": 3, "name": "Sleeveless Dress", "price": "Rs. 1000", "brand": "Madame",
               "category": {"usertype": {"usertype": "Women"}, "category": "Dress"}}),
    ]
}

async fn products() -> Json<Value> {
    Json(json!({ "responseCode": 200, "products": catalogue() }))
}

async fn search_product(Form(form): Form<HashMap<String, String>>) -> Json<Value> {
    let Some(term) = form.get("search_product").map(|t| t.to_lowercase()) else {
        return message(400, "Bad request, search_product parameter is missing in POST request.");
    };
    let found: Vec<Value> = catalogue()
        .into_iter()
        .filter(|p| {
            p["name"]
                .as_str()
                .map_or(false, |name| name.to_lowercase().contains(&term))
        })
        .collect();
    Json(json!({ "responseCode": 200, "products": found }))
}

async fn brands() -> Json<Value> {
    Json(json!({
        "responseCode": 200,
        "brands": [{"id": 1, "brand": "Polo"}, {"id": 2, "brand": "H&M"}, {"id": 3, "brand": "Madame"}]
    }))
}

use actix_web::{
    body::BoxBody,
    error, get,
    http::{header::ContentType, StatusCode},
    middleware::Logger,
    post, web, App, HttpResponse, HttpServer,
};
use blackjack_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// A struct for handling the configuration of a new game. Meant to be deserialized
/// from JSON.
#[derive(Debug, Deserialize)]
struct GameConfig {
    num_decks: u32,
}

/// A struct for deserializing the player a request acts on.
#[derive(Debug, Deserialize)]
struct PlayerRef {
    player: String,
}

/// An enum that will handle user facing errors
#[derive(Debug)]
enum UserError {
    InternalError,
    GameNotCreated,
    BadRequest(String),
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserError::InternalError => write!(f, "{}", "an internal error occured"),
            UserError::GameNotCreated => write!(
                f,
                "{}",
                "unable to serve the request, a game has not been created"
            ),
            UserError::BadRequest(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for UserError {}

impl error::ResponseError for UserError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            UserError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            UserError::GameNotCreated => StatusCode::BAD_REQUEST,
            UserError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// A hand as the caller sees it: the card names plus their best blackjack total.
#[derive(Serialize)]
struct HandView {
    cards: Vec<String>,
    total: u32,
}

impl HandView {
    fn new(hand: &[Card]) -> HandView {
        HandView {
            cards: hand.iter().map(|card| card.to_string()).collect(),
            total: hand_value(hand),
        }
    }
}

#[derive(Serialize)]
struct DealResponse {
    player: String,
    hand: HandView,
    house_up_card: String,
    card_count: i32,
    advice: String,
}

#[derive(Serialize)]
struct HitResponse {
    player: String,
    hand: HandView,
    busted: bool,
}

#[derive(Serialize)]
struct RevealResponse {
    outcome: String,
    player: HandView,
    house: HandView,
    card_count: i32,
    advice: String,
}

#[derive(Serialize)]
struct AdviceResponse {
    card_count: i32,
    advice: String,
}

/// A handler that creates a new game with the given number of decks, replacing any
/// game already in progress.
#[post("/new-game")]
async fn new_game(
    params: web::Json<GameConfig>,
    app_game: web::Data<Mutex<Option<Game>>>,
) -> Result<HttpResponse, UserError> {
    let mut guard = if let Ok(g) = app_game.lock() {
        g
    } else {
        return Err(UserError::InternalError);
    };

    match Game::new(params.num_decks) {
        Ok(game) => {
            *guard = Some(game);
            Ok(HttpResponse::Ok().body("game created successfully"))
        }
        Err(e) => Err(UserError::BadRequest(e.to_string())),
    }
}

/// A handler that deals a fresh round for the named player.
#[post("/deal")]
async fn deal(
    params: web::Json<PlayerRef>,
    app_game: web::Data<Mutex<Option<Game>>>,
) -> Result<HttpResponse, UserError> {
    let mut guard = if let Ok(g) = app_game.lock() {
        g
    } else {
        return Err(UserError::InternalError);
    };

    if let Some(game) = guard.as_mut() {
        if let Err(e) = game.deal(&params.player) {
            return Err(UserError::BadRequest(e.to_string()));
        }
        let hand = &game.active_hands()[params.player.as_str()];
        let response = DealResponse {
            player: params.player.clone(),
            hand: HandView::new(hand),
            house_up_card: game
                .house_hand()
                .first()
                .map(|card| card.to_string())
                .unwrap_or_default(),
            card_count: game.card_count(),
            advice: game.advice().to_string(),
        };
        return Ok(HttpResponse::Ok().json(response));
    }

    Err(UserError::GameNotCreated)
}

/// A handler that draws one more card for the named player.
#[post("/hit")]
async fn hit(
    params: web::Json<PlayerRef>,
    app_game: web::Data<Mutex<Option<Game>>>,
) -> Result<HttpResponse, UserError> {
    let mut guard = if let Ok(g) = app_game.lock() {
        g
    } else {
        return Err(UserError::InternalError);
    };

    if let Some(game) = guard.as_mut() {
        if let Err(e) = game.hit(&params.player) {
            return Err(UserError::BadRequest(e.to_string()));
        }
        let hand = &game.active_hands()[params.player.as_str()];
        let response = HitResponse {
            player: params.player.clone(),
            hand: HandView::new(hand),
            busted: hand_value(hand) > 21,
        };
        return Ok(HttpResponse::Ok().json(response));
    }

    Err(UserError::GameNotCreated)
}

/// A handler that resolves the round for the named player against the house.
#[post("/reveal")]
async fn reveal(
    params: web::Json<PlayerRef>,
    app_game: web::Data<Mutex<Option<Game>>>,
) -> Result<HttpResponse, UserError> {
    let mut guard = if let Ok(g) = app_game.lock() {
        g
    } else {
        return Err(UserError::InternalError);
    };

    if let Some(game) = guard.as_mut() {
        let outcome = match game.reveal(&params.player) {
            Ok(outcome) => outcome,
            Err(e) => return Err(UserError::BadRequest(e.to_string())),
        };
        let player_hand = &game.active_hands()[params.player.as_str()];
        let response = RevealResponse {
            outcome: outcome.to_string(),
            player: HandView::new(player_hand),
            house: HandView::new(game.house_hand()),
            card_count: game.card_count(),
            advice: game.advice().to_string(),
        };
        return Ok(HttpResponse::Ok().json(response));
    }

    Err(UserError::GameNotCreated)
}

/// A handler that clears the table, zeroes the count and refills the shoe.
#[post("/reset")]
async fn reset(app_game: web::Data<Mutex<Option<Game>>>) -> Result<HttpResponse, UserError> {
    let mut guard = if let Ok(g) = app_game.lock() {
        g
    } else {
        return Err(UserError::InternalError);
    };

    if let Some(game) = guard.as_mut() {
        let message = game.reset();
        return Ok(HttpResponse::Ok().body(message));
    }

    Err(UserError::GameNotCreated)
}

/// A handler that reports the running count and the betting advice it implies.
#[get("/advice")]
async fn advice(app_game: web::Data<Mutex<Option<Game>>>) -> Result<HttpResponse, UserError> {
    let guard = if let Ok(g) = app_game.lock() {
        g
    } else {
        return Err(UserError::InternalError);
    };

    if let Some(game) = guard.as_ref() {
        let response = AdviceResponse {
            card_count: game.card_count(),
            advice: game.advice().to_string(),
        };
        return Ok(HttpResponse::Ok().json(response));
    }

    Err(UserError::GameNotCreated)
}

/// A handler that reports the session tally of revealed rounds.
#[get("/stats")]
async fn stats(app_game: web::Data<Mutex<Option<Game>>>) -> Result<HttpResponse, UserError> {
    let guard = if let Ok(g) = app_game.lock() {
        g
    } else {
        return Err(UserError::InternalError);
    };

    if let Some(game) = guard.as_ref() {
        return Ok(HttpResponse::Ok().json(game.stats()));
    }

    Err(UserError::GameNotCreated)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let address = "127.0.0.1";
    let port = 8080;
    log::info!("listening at {}:{}...", address, port);

    let app_game: web::Data<Mutex<Option<Game>>> = web::Data::new(Mutex::new(None));

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_game.clone())
            .service(new_game)
            .service(deal)
            .service(hit)
            .service(reveal)
            .service(reset)
            .service(advice)
            .service(stats)
    })
    .bind((address, port))?
    .run()
    .await
}

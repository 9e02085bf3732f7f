// Rocket routes for the four Battlesnake endpoints
//
// Each route parses the request body into `GameState`, hands it to the shared
// `Bot`, and turns the answer back into an HTTP response. No game logic lives here.

use rocket::http::Status;
use rocket::serde::json::Json;
use serde_json::Value;

use hunter_snake::bot::Bot;
use hunter_snake::types::GameState;

/// GET /: appearance and API version from `[appearance]` in Snake.toml
#[get("/")]
pub fn index(bot: &rocket::State<Bot>) -> Json<Value> {
    Json(bot.info())
}

/// POST /start: logged only, Hunter keeps no state between turns
#[post("/start", format = "json", data = "<start_req>")]
pub fn start(bot: &rocket::State<Bot>, start_req: Json<GameState>) -> Status {
    let state = start_req.into_inner();
    bot.start(&state.game, &state.turn, &state.board, &state.you);

    Status::Ok
}

/// POST /move: answers `{"move": "up" | "down" | "left" | "right"}`
#[post("/move", format = "json", data = "<move_req>")]
pub async fn get_move(bot: &rocket::State<Bot>, move_req: Json<GameState>) -> Json<Value> {
    let state = move_req.into_inner();

    Json(bot.get_move(&state.game, &state.turn, &state.board, &state.you))
}

/// POST /end: logs the final snake length
#[post("/end", format = "json", data = "<end_req>")]
pub fn end(bot: &rocket::State<Bot>, end_req: Json<GameState>) -> Status {
    let state = end_req.into_inner();
    bot.end(&state.game, &state.turn, &state.board, &state.you);

    Status::Ok
}

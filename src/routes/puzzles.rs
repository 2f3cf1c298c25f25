use std::sync::Arc;

use axum::{extract::State, Json};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{
    error::PuzzleError,
    game::{cells_on_line, resolve_selection, solution_overlay, HighlightCell, PuzzleBuilder},
    models::{Locale, Position, Puzzle},
    utils::letters::MIN_WORD_LEN,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub words: Vec<String>,
    #[serde(default)]
    pub locale: Locale,
    /// Overrides the configured grid size
    pub size: Option<usize>,
    /// Fixed seed for reproducible puzzles
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub puzzle: Puzzle,
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionResponse {
    /// `None` when the gesture is not a straight line
    pub cells: Option<Vec<Position>>,
    pub word: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SolutionRequest {
    pub puzzle: Puzzle,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SolutionResponse {
    pub cells: Vec<HighlightCell>,
}

/// Generate a new puzzle from a word list
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<Puzzle>, PuzzleError> {
    let game = &state.config.game;

    if payload.words.len() > game.max_words {
        return Err(PuzzleError::TooManyWords {
            count: payload.words.len(),
            max: game.max_words,
        });
    }

    let builder = match payload.size {
        Some(size) if size > game.max_grid_size => {
            return Err(PuzzleError::InvalidGridSize {
                size,
                min: MIN_WORD_LEN,
                max: game.max_grid_size,
            });
        }
        Some(size) => PuzzleBuilder::new(size)?.with_max_attempts(game.placement_attempts),
        None => state.builder.clone(),
    };

    let puzzle = match payload.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            builder.generate(payload.words.as_slice(), payload.locale, &mut rng)
        }
        None => builder.generate_with_entropy(payload.words.as_slice(), payload.locale),
    };

    tracing::info!(
        "Generated {}x{} {} puzzle with {}/{} words",
        puzzle.size,
        puzzle.size,
        payload.locale.tag(),
        puzzle.words.len(),
        payload.words.len()
    );

    Ok(Json(puzzle))
}

/// Evaluate a drag gesture against a puzzle
pub async fn select(Json(payload): Json<SelectionRequest>) -> Result<Json<SelectionResponse>, PuzzleError> {
    let SelectionRequest { puzzle, start, end } = payload;

    validate_puzzle(&puzzle)?;
    for pos in [start, end] {
        if !puzzle.in_bounds(pos) {
            return Err(PuzzleError::InvalidRequest(format!(
                "cell ({}, {}) is outside the {}x{} grid",
                pos.row, pos.col, puzzle.size, puzzle.size
            )));
        }
    }

    let cells = cells_on_line(start, end);
    let word = cells
        .as_deref()
        .and_then(|cells| resolve_selection(&puzzle, cells))
        .map(str::to_string);

    Ok(Json(SelectionResponse { cells, word }))
}

/// Cells to highlight when the solution is shown
pub async fn solution(Json(payload): Json<SolutionRequest>) -> Result<Json<SolutionResponse>, PuzzleError> {
    validate_puzzle(&payload.puzzle)?;

    Ok(Json(SolutionResponse {
        cells: solution_overlay(&payload.puzzle),
    }))
}

/// Client-supplied puzzles must be square and match their declared size
fn validate_puzzle(puzzle: &Puzzle) -> Result<(), PuzzleError> {
    let square = puzzle.grid.len() == puzzle.size
        && puzzle.grid.iter().all(|row| row.len() == puzzle.size);
    if !square {
        return Err(PuzzleError::InvalidRequest(format!(
            "grid is not {}x{}",
            puzzle.size, puzzle.size
        )));
    }

    let placements_fit = puzzle
        .placements
        .iter()
        .all(|placement| placement.checked_end(puzzle.size).is_some());
    if !placements_fit {
        return Err(PuzzleError::InvalidRequest(
            "placement runs off the grid".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, config::GameConfig, config::ServerConfig, routes::create_routes};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            game: GameConfig::default(),
        };
        let state = Arc::new(AppState::new(config).unwrap());
        create_routes().with_state(state)
    }

    async fn post(app: Router, uri: &str, body: Value) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    async fn read_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generate_puzzle_endpoint() {
        let response = post(
            app(),
            "/api/puzzles",
            json!({ "words": ["whale", "coral", "a"], "locale": "en", "size": 10, "seed": 99 }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["size"], 10);
        assert_eq!(body["grid"].as_array().unwrap().len(), 10);
        assert_eq!(body["words"], json!(["WHALE", "CORAL"]));
        assert!(body["placements"][0]["startRow"].is_u64());
    }

    #[tokio::test]
    async fn test_generate_is_reproducible_with_seed() {
        let request = json!({ "words": ["planet", "comet"], "seed": 5 });
        let first = read_json(post(app(), "/api/puzzles", request.clone()).await).await;
        let second = read_json(post(app(), "/api/puzzles", request).await).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_generate_rejects_oversized_grid() {
        let response = post(app(), "/api/puzzles", json!({ "words": ["cat"], "size": 500 })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = read_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("500"));
    }

    #[tokio::test]
    async fn test_generate_rejects_too_many_words() {
        let words: Vec<String> = (0..51).map(|i| format!("WORD{}", i)).collect();
        let response = post(app(), "/api/puzzles", json!({ "words": words })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    fn sample_puzzle() -> Value {
        json!({
            "grid": [["C", "A", "T"], ["X", "Y", "Z"], ["Q", "R", "S"]],
            "words": ["CAT"],
            "placements": [{ "word": "CAT", "startRow": 0, "startCol": 0, "direction": "horizontal" }],
            "size": 3
        })
    }

    #[tokio::test]
    async fn test_selection_endpoint_matches_reverse_drag() {
        let response = post(
            app(),
            "/api/puzzles/selection",
            json!({ "puzzle": sample_puzzle(), "start": { "row": 0, "col": 2 }, "end": { "row": 0, "col": 0 } }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["word"], "CAT");
        assert_eq!(body["cells"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_selection_endpoint_invalid_line() {
        let response = post(
            app(),
            "/api/puzzles/selection",
            json!({ "puzzle": sample_puzzle(), "start": { "row": 0, "col": 0 }, "end": { "row": 1, "col": 2 } }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert!(body["cells"].is_null());
        assert!(body["word"].is_null());
    }

    #[tokio::test]
    async fn test_selection_endpoint_rejects_out_of_bounds() {
        let response = post(
            app(),
            "/api/puzzles/selection",
            json!({ "puzzle": sample_puzzle(), "start": { "row": 0, "col": 0 }, "end": { "row": 0, "col": 3 } }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_solution_endpoint() {
        let response = post(app(), "/api/puzzles/solution", json!({ "puzzle": sample_puzzle() })).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        let cells = body["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[2]["position"], json!({ "row": 0, "col": 2 }));
        assert_eq!(cells[2]["word"], "CAT");
    }

    #[tokio::test]
    async fn test_solution_endpoint_rejects_overflowing_placement() {
        let puzzle = json!({
            "grid": [["C", "A"], ["X", "Y"]],
            "words": ["CA"],
            "placements": [{ "word": "CA", "startRow": u64::MAX, "startCol": 0, "direction": "vertical" }],
            "size": 2
        });

        let response = post(app(), "/api/puzzles/solution", json!({ "puzzle": puzzle.clone() })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = post(
            app(),
            "/api/puzzles/selection",
            json!({ "puzzle": puzzle, "start": { "row": 0, "col": 0 }, "end": { "row": 0, "col": 1 } }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_check() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["status"], "ok");
    }
}

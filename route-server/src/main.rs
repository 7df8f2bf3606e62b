use std::net::SocketAddr;

use route_server::gemini::{GeminiClient, GeminiConfig, MockRouteClient, RouteSource};
use route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // The key is re-read from the environment on every request, so this is
    // only a startup hint, not a gate.
    let key_missing = std::env::var("GEMINI_API_KEY")
        .map(|v| v.trim().is_empty())
        .unwrap_or(true);
    if key_missing {
        eprintln!("Warning: GEMINI_API_KEY not set. Route searches will fail until it is.");
    }

    // Route backend: live Gemini, or a canned fixture for keyless development
    let source = match std::env::var("MOCK_ROUTES") {
        Ok(path) => {
            println!("Serving mock routes from {path}");
            let mock = MockRouteClient::from_file(&path).expect("Failed to load mock routes");
            RouteSource::Mock(mock)
        }
        Err(_) => {
            let client =
                GeminiClient::new(GeminiConfig::new()).expect("Failed to create Gemini client");
            RouteSource::Live(client)
        }
    };

    let state = AppState::new(source);

    let static_dir =
        std::env::var("STATIC_DIR").unwrap_or_else(|_| "route-server/static".to_string());
    let app = create_router(state, &static_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("香港搭車通 listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the mobile shell.");
    println!();
    println!("Endpoints:");
    println!("  GET  /            - Single-page shell");
    println!("  GET  /health      - Health check");
    println!("  GET  /about       - About page");
    println!("  GET  /api/routes  - Route search (origin, destination)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

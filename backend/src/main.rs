use backend::{
    build_rocket,
    config::ServerConfig,
    purge_idle_sessions,
    routes::AppState,
    store::SessionStore,
    utils::load_results,
};
use rocket::fs::NamedFile;
use std::sync::Arc;
use tokio::time::{interval, Duration};
use tracing::{info, error};
use include_dir::{include_dir, Dir};
use uuid::Uuid;

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

async fn run_cleanup_task(sessions: Arc<SessionStore>) {
    let mut interval = interval(Duration::from_secs(60));
    info!("🧹 Session cleanup service started");

    loop {
        interval.tick().await;
        purge_idle_sessions(&sessions);
    }
}

#[rocket::get("/<path..>", rank = 20)]
async fn spa_handler(path: std::path::PathBuf, temp_dir: &rocket::State<std::path::PathBuf>) -> Option<NamedFile> {
    let file_path = temp_dir.join(&path);
    if file_path.exists() && file_path.is_file() {
        NamedFile::open(&file_path).await.ok()
    } else {
        NamedFile::open(temp_dir.join("index.html")).await.ok()
    }
}

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting AgileAI feedback server");

    let config = ServerConfig::from_secrets(&secret_store);
    let results = match load_results(config.results_path.as_deref()) {
        Ok(doc) => {
            let stats = doc.stats();
            info!("📋 Results loaded: {} features, {} stories", stats.features, stats.stories);
            Some(doc)
        }
        Err(e) => {
            error!("Results document unavailable: {}", e);
            None
        }
    };

    let temp_dir = std::env::temp_dir().join(format!("agileai_static_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&temp_dir).expect("Failed to create temp directory");
    STATIC_DIR.extract(&temp_dir).expect("Failed to extract static files");

    let state = AppState::new(results, config.session_idle_minutes);
    tokio::spawn(run_cleanup_task(state.sessions.clone()));

    let rocket = build_rocket(state)
        .manage(temp_dir)
        .mount("/", rocket::routes![spa_handler]);

    Ok(rocket.into())
}

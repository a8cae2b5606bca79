// Streamlit Desktop: Tauri shell
// The window shows the Streamlit app served by the companion process.
// The companion is started elsewhere; the shell only signals it to stop
// when the application exits.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use tauri::RunEvent;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Bound to the front-end as `shutdown_streamlit`.
#[tauri::command]
fn shutdown_streamlit() -> String {
    shutdown_signal::request_shutdown()
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = match tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![shutdown_streamlit])
        .build(tauri::generate_context!())
    {
        Ok(app) => app,
        Err(err) => {
            error!(%err, "error while building tauri application");
            std::process::exit(1);
        }
    };

    app.run(|_app, event| {
        if let RunEvent::Exit = event {
            info!("application exiting, stopping Streamlit");
            let _ = shutdown_streamlit();
        }
    });
}

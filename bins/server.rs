use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

const SERVICE: &str = "service_desk";

fn init_logging() {
    // 提前加载 .env，使得 RUST_LOG / LOG_FORMAT 生效
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = SERVICE, event = "logger_init", "tracing subscriber initialized");
}

fn install_panic_hook(instance_id: Uuid) {
    let pid = std::process::id();
    std::panic::set_hook(Box::new(move |info| {
        error!(service = SERVICE, event = "panic", %instance_id, pid, message = %info, "unhandled panic occurred");
    }));
}

/// Worker threads from config.toml, else from the environment.
fn worker_threads() -> Option<usize> {
    configs::AppConfig::load_and_validate()
        .or_else(|_| configs::AppConfig::from_env())
        .ok()
        .and_then(|cfg| cfg.server.worker_threads)
}

/// Run the HTTP server until it exits on its own or Ctrl+C arrives.
async fn serve_until_ctrl_c(instance_id: Uuid) -> ExitCode {
    let server_task = tokio::spawn(server::run());

    tokio::select! {
        res = server_task => match res {
            Ok(Ok(())) => {
                info!(service = SERVICE, event = "stop", %instance_id, "server stopped normally");
                ExitCode::SUCCESS
            }
            Ok(Err(e)) => {
                error!(service = SERVICE, event = "run_failed", error = %e, "server::run returned error");
                ExitCode::FAILURE
            }
            Err(e) => {
                error!(service = SERVICE, event = "task_join_error", error = %e, "server task join error");
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            // 每个请求都是无状态的，直接退出即可；进行中的请求随运行时一起丢弃
            info!(service = SERVICE, event = "shutdown_signal", %instance_id, "received Ctrl+C, shutting down");
            ExitCode::SUCCESS
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    let instance_id = Uuid::new_v4();
    install_panic_hook(instance_id);

    let threads = worker_threads();
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = SERVICE, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = SERVICE,
        event = "start",
        %instance_id,
        pid = std::process::id(),
        version = env!("CARGO_PKG_VERSION"),
        threads = threads.unwrap_or_default(),
        "service desk starting"
    );

    rt.block_on(serve_until_ctrl_c(instance_id))
}

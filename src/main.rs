use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match symptom_checker_lib::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Startup failed: {e}");
            eprintln!("symptom-checker: {e}");
            ExitCode::FAILURE
        }
    }
}

pub mod api;
pub mod config;
pub mod knowledge;
pub mod triage;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{ApiContext, ServerError};
use crate::config::{AppConfig, ConfigError};
use crate::knowledge::{KnowledgeBase, KnowledgeError};
use crate::triage::TriageEngine;

/// Errors that stop the service before or while it runs.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),
    #[error(transparent)]
    Server(#[from] ServerError),
    #[error("Failed to listen for shutdown signal: {0}")]
    Signal(std::io::Error),
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}

/// Pick the knowledge base named by the config, or the built-in table.
pub fn load_knowledge(config: &AppConfig) -> Result<KnowledgeBase, KnowledgeError> {
    match &config.knowledge_base_path {
        Some(path) => KnowledgeBase::load(path),
        None => {
            tracing::info!("Using built-in knowledge base");
            Ok(KnowledgeBase::builtin())
        }
    }
}

/// Run the service until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = AppConfig::from_env()?;
    let knowledge = Arc::new(load_knowledge(&config)?);
    let ctx = ApiContext::new(TriageEngine::new(knowledge), config.max_message_chars);

    let mut server = api::start_server(ctx, config.bind_addr).await?;
    tracing::info!(addr = %server.session.server_addr, "Listening");

    tokio::signal::ctrl_c().await.map_err(StartupError::Signal)?;

    server.shutdown();
    server.stopped().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_knowledge_defaults_to_builtin() {
        let config = AppConfig::default();
        let kb = load_knowledge(&config).unwrap();
        assert_eq!(kb, KnowledgeBase::builtin());
    }

    #[test]
    fn load_knowledge_reads_configured_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"conditions":[{{"name":"tinnitus","symptoms":["ringing ears"],"info":"i","recommendations":"r","severity":"mild"}}],"emergency_phrases":[]}}"#
        )
        .unwrap();

        let config = AppConfig {
            knowledge_base_path: Some(file.path().to_path_buf()),
            ..AppConfig::default()
        };
        let kb = load_knowledge(&config).unwrap();
        assert_eq!(kb.len(), 1);
        assert!(kb.emergency_phrases().is_empty());
    }

    #[test]
    fn load_knowledge_surfaces_errors() {
        let config = AppConfig {
            knowledge_base_path: Some("/definitely/not/here.json".into()),
            ..AppConfig::default()
        };
        let err: StartupError = load_knowledge(&config).unwrap_err().into();
        assert!(matches!(err, StartupError::Knowledge(KnowledgeError::Read(_, _))));
    }
}

use std::path::Path;

use crate::{
    domain::channel_state::ChannelSeed,
    infra::{
        self,
        channel_store::TomlChannelStore,
        config::{self, AppConfig},
        contracts::ChannelStore,
        error::AppError,
        id_generator::UuidChannelIdGenerator,
        locale::LocaleCatalog,
        opener::SystemOpener,
        storage_layout::StorageLayout,
        stubs::MemoryChannelStore,
    },
    ui::CrosstermEventSource,
    usecases::{
        channels::load_channels,
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        shell::DefaultShellOrchestrator,
    },
};

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

pub fn bootstrap(
    config_path: Option<&Path>,
    locale_override: Option<&str>,
) -> Result<AppContext, AppError> {
    let config = config::load(config_path)?;
    let layout = StorageLayout::resolve()?;
    layout.ensure_dirs()?;
    infra::logging::init(&config.logging, &layout.log_dir)?;

    build_context(config, layout, locale_override)
}

fn build_context(
    config: AppConfig,
    layout: StorageLayout,
    locale_override: Option<&str>,
) -> Result<AppContext, AppError> {
    let locale = locale_override.unwrap_or(&config.locale.default);
    let messages = LocaleCatalog::new(config.locale.dir.as_deref()).resolve(locale)?;
    tracing::info!(
        locale = messages.locale(),
        entries = messages.len(),
        "locale bundle loaded"
    );

    Ok(AppContext::new(config, layout, messages))
}

pub fn compose_shell(context: &AppContext) -> Result<ShellComposition, AppError> {
    let seed = context
        .config
        .channels
        .channel_seed()
        .map_err(AppError::InvalidSeed)?;
    let about_url = context.config.ui.about_url.clone();

    let orchestrator: Box<dyn ShellOrchestrator> = if context.config.channels.persist {
        let store = TomlChannelStore::open(
            context.layout.channels_file(),
            &context.layout.channels_lock_file(),
        )?;
        tracing::info!(path = %store.path().display(), "channel store opened");
        Box::new(build_orchestrator(store, seed, about_url)?)
    } else {
        tracing::info!("channel persistence disabled");
        Box::new(build_orchestrator(
            MemoryChannelStore::default(),
            seed,
            about_url,
        )?)
    };

    Ok(ShellComposition {
        event_source: Box::new(CrosstermEventSource),
        orchestrator,
    })
}

fn build_orchestrator<S: ChannelStore>(
    store: S,
    seed: ChannelSeed,
    about_url: Option<String>,
) -> Result<DefaultShellOrchestrator<S, SystemOpener, UuidChannelIdGenerator>, AppError> {
    let channels = load_channels(&store, seed)?;

    Ok(
        DefaultShellOrchestrator::new(channels, store, SystemOpener, UuidChannelIdGenerator)
            .with_about_url(about_url),
    )
}

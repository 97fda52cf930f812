use clap::Parser;
use program_suggester::app::text_report::render_interest_listing;
use program_suggester::utils::error::ErrorSeverity;
use program_suggester::utils::{logger, validation::Validate};
use program_suggester::{
    render_outcome, BuiltinCatalogSource, Catalog, CatalogSource, CliConfig, FileCatalogSource,
    OntologyStore, Outcome, RecommendationEngine, SuggesterError,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Program suggester failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 依錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(config: &CliConfig) -> Result<(), SuggesterError> {
    config.validate()?;

    let catalog = load_catalog(config).await?;
    tracing::info!(
        "📚 Loaded catalog '{}' ({} interests, {} programs)",
        catalog.name(),
        catalog.interest_count(),
        catalog.programs().len()
    );

    if config.list_interests {
        println!("{}", render_interest_listing(&catalog));
        return Ok(());
    }

    let selection = config.selection();

    // 沒有選擇時不呼叫引擎
    let outcome = if selection.is_empty() {
        Outcome::NoSelection
    } else {
        RecommendationEngine::new(&catalog).evaluate(&selection)
    };
    tracing::info!("✅ Evaluated {} interests: {}", selection.len(), outcome.kind());

    println!("{}", render_outcome(&outcome, &catalog, config.format)?);
    Ok(())
}

async fn load_catalog(config: &CliConfig) -> Result<Catalog, SuggesterError> {
    match &config.catalog {
        Some(path) => {
            tracing::info!("📁 Loading catalog from: {}", path);
            FileCatalogSource::new(path).load().await
        }
        None => BuiltinCatalogSource.load().await,
    }
}

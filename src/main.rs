use clap::Parser;
use oncourt_etl::core::{ConfigProvider, Pipeline, Sink, StatsSource};
use oncourt_etl::utils::{logger, validation::Validate};
use oncourt_etl::{
    CliConfig, EtlEngine, LogFormat, OnCourtPipeline, Result, StatsClient,
    StdoutSink, TomlConfig,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Text => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting oncourt-etl");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => run(config, cli.dry_run).await,
                Err(e) => Err(e),
            }
        }
        None => run(cli.clone(), cli.dry_run).await,
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run<C: ConfigProvider + Validate>(config: C, dry_run: bool) -> Result<()> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e);
    }
    tracing::info!(
        "Game {} from {} ({:?} output)",
        config.game_id(),
        config.base_url(),
        config.output_format()
    );

    let source = StatsClient::new(config.base_url())?;
    let pipeline = OnCourtPipeline::new(source, StdoutSink::new(), config);

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - boxscore queries will not be sent");
        return print_plan(&pipeline).await;
    }

    let engine = EtlEngine::new(pipeline);
    engine.run().await?;
    tracing::info!("✅ Done");
    Ok(())
}

async fn print_plan<F, S, C>(pipeline: &OnCourtPipeline<F, S, C>) -> Result<()>
where
    F: StatsSource,
    S: Sink,
    C: ConfigProvider,
{
    let play_by_play = pipeline.extract().await?;
    let windows = pipeline.plan(&play_by_play)?;

    println!("PERIOD\tBOUNDARY\tSTART_RANGE\tEND_RANGE\tURL");
    for planned in &windows {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            planned.sample.period,
            planned.sample.elapsed,
            planned.window.lower,
            planned.window.upper,
            planned.url
        );
    }
    tracing::info!("Planned {} boxscore queries", windows.len());
    Ok(())
}

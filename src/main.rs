use clap::Parser;
use numerology_calc::core::render::{render, render_letter_table};
use numerology_calc::utils::error::ErrorSeverity;
use numerology_calc::utils::{logger, validation::Validate};
use numerology_calc::{
    BatchEngine, BatchPipeline, CalculationOptions, CalculationRequest, Calculator, CliConfig,
    LocalStorage, NumerologyError, Settings,
};

fn exit_with(e: &NumerologyError) -> ! {
    tracing::error!(
        "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

async fn run_batch(input: &str, settings: Settings) -> numerology_calc::Result<()> {
    let source = LocalStorage::new(String::new());
    let sink = LocalStorage::new(settings.output_path.clone());
    let pipeline = BatchPipeline::new(source, sink, settings, input);
    let engine = BatchEngine::new(pipeline);

    let report = engine.run().await?;
    if report.failed > 0 {
        tracing::warn!("⚠️ {} of {} rows could not be calculated", report.failed, report.total);
    }

    println!(
        "✅ {} of {} rows calculated",
        report.succeeded, report.total
    );
    println!("📁 Output saved to: {}", report.output_path);
    Ok(())
}

fn run_single(config: &CliConfig, settings: &Settings) -> numerology_calc::Result<()> {
    let calculator = Calculator::new(CalculationOptions::from_config(settings));
    let request = CalculationRequest::new(
        config.name.clone().unwrap_or_default(),
        config.birth_date.clone(),
    );

    let result = calculator.calculate(&request)?;
    let output = render(&result, settings.format()?, settings.render_options())?;
    print!("{}", output);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 先載入 TOML，日誌等級可能來自設定檔
    let toml = match config.load_toml() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!(
                "❌ Failed to load config file '{}': {}",
                config.config.as_deref().unwrap_or_default(),
                e
            );
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    let log_level = toml.as_ref().and_then(|t| t.log_level());
    let log_json = config.log_json || toml.as_ref().is_some_and(|t| t.log_json());
    if log_json {
        logger::init_json_logger(config.verbose, log_level);
    } else {
        logger::init_cli_logger(config.verbose, log_level);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Some(toml) = &toml {
        if let Err(e) = toml.validate() {
            exit_with(&e);
        }
    }

    let settings = config.resolve(toml.as_ref());
    if let Err(e) = settings.validate() {
        exit_with(&e);
    }
    tracing::debug!("Effective settings: {:?}", settings);

    if config.show_table {
        print!("{}", render_letter_table());
        if config.name.is_none() && config.input.is_none() {
            return Ok(());
        }
        println!();
    }

    let outcome = match &config.input {
        Some(input) => {
            tracing::info!("🚀 Starting batch run for {}", input);
            run_batch(input, settings).await
        }
        None => run_single(&config, &settings),
    };

    if let Err(e) = outcome {
        exit_with(&e);
    }

    Ok(())
}

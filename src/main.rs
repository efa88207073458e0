use clap::Parser;
use hospital_charges::{build_report, AppConfig, ReportFormatter};
use std::path::PathBuf;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hospital-charges")]
#[command(about = "Summarise procedure pricing from a hospital standard charges file")]
struct Cli {
    /// Standard charges JSON file
    path: Option<PathBuf>,
    /// Rows listed per category
    #[arg(long)]
    rows: Option<usize>,
    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 日志输出到 stderr, stdout 只保留报表
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 加载配置, 命令行参数优先
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_overrides(cli.path, cli.rows);
    tracing::debug!("Running with config: {:?}", config);

    let report = build_report(config.input_path()?)?;
    let formatter = ReportFormatter::from(&config.report);
    print!("{}", report.render(&formatter));

    Ok(())
}

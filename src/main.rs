//! resume-genie: resume keyword analysis and cover letter tool

use clap::Parser;
use log::{debug, error, info};
use resume_genie::cli::{self, Cli, Commands, ConfigAction, OutputArgs};
use resume_genie::config::Config;
use resume_genie::error::{Result, ResumeGenieError};
use resume_genie::input::manager::RESUME_EXTENSIONS;
use resume_genie::interactive::InteractiveSession;
use resume_genie::output::cover_letter::CoverLetterRequest;
use resume_genie::output::formatter::{parse_output_format, save_report_to_file, ReportGenerator};
use resume_genie::output::report::Report;
use resume_genie::service;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Ats { resume, job, output } => {
            validate_resume(&resume)?;
            let job = job.source().map_err(ResumeGenieError::InvalidInput)?;
            info!("Running ATS check on {}", resume.display());

            let report = service::check_ats(&config, &resume, &job).await?;
            emit_report(&config, &Report::Ats(report), &output).await?;
        }

        Commands::Rank { resume, jobs, job_files, output } => {
            validate_resume(&resume)?;
            let sources = cli::rank_job_sources(&jobs, &job_files).map_err(ResumeGenieError::InvalidInput)?;
            info!("Ranking {} job descriptions against {}", sources.len(), resume.display());

            let report = service::rank_resume(&resume, &sources).await?;
            emit_report(&config, &Report::Ranking(report), &output).await?;
        }

        Commands::Enhance { resume, job, limit, output } => {
            validate_resume(&resume)?;
            let job = job.source().map_err(ResumeGenieError::InvalidInput)?;
            info!("Looking for missing keywords in {}", resume.display());

            let report = service::enhance_resume(&config, &resume, &job, limit).await?;
            emit_report(&config, &Report::Enhancement(report), &output).await?;
        }

        Commands::CoverLetter { name, title, company, save, output } => {
            let request = CoverLetterRequest::new(&name, &title, &company)?;
            let save_path: Option<PathBuf> = save.map(|path| path.unwrap_or_else(|| config.cover_letter_path()));

            let output = OutputArgs {
                output,
                ..OutputArgs::default()
            };

            match service::generate_cover_letter(&request, save_path.as_deref()).await {
                Ok(report) => emit_report(&config, &Report::CoverLetter(report), &output).await?,
                Err(save_error @ ResumeGenieError::CoverLetterSave { .. }) => {
                    // still show the letter so it is not lost
                    let report = service::generate_cover_letter(&request, None).await?;
                    emit_report(&config, &Report::CoverLetter(report), &output).await?;
                    return Err(save_error);
                }
                Err(e) => return Err(e),
            }
        }

        Commands::Menu => {
            let stdin = std::io::stdin();
            let mut session = InteractiveSession::new(&config, stdin.lock(), std::io::stdout());
            session.run().await?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| ResumeGenieError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("{}", content);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

fn validate_resume(resume: &Path) -> Result<()> {
    cli::validate_file_extension(resume, RESUME_EXTENSIONS)
        .map_err(|e| ResumeGenieError::InvalidInput(format!("Resume file: {}", e)))
}

async fn emit_report(config: &Config, report: &Report, output: &OutputArgs) -> Result<()> {
    let format = match &output.output {
        Some(format) => parse_output_format(format).map_err(ResumeGenieError::InvalidInput)?,
        None => config.output.format,
    };

    let generator = ReportGenerator::with_options(
        config.output.color_output && output.save.is_none(),
        config.output.detailed || output.detailed,
        true,
        true,
    );
    let rendered = generator.generate_report(report, &format)?;

    match &output.save {
        Some(path) => {
            save_report_to_file(&rendered, path).await?;
            println!("📁 Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    debug!("{} report rendered as {:?}", report.metadata().tool, format);

    Ok(())
}

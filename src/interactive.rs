//! Interactive menu over the four tools

use crate::config::{Config, OutputFormat};
use crate::error::{Result, ResumeGenieError};
use crate::output::cover_letter::CoverLetterRequest;
use crate::output::formatter::ReportGenerator;
use crate::output::report::Report;
use crate::processing::ranker::REQUIRED_JOB_DESCRIPTIONS;
use crate::service::{self, JobSource};
use crate::tool::Tool;
use log::{debug, error};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// A menu session reading answers from `input` and printing to `output`.
///
/// Each tool run is independent; a failure is reported and the menu is shown again.
pub struct InteractiveSession<'a, R: BufRead, W: Write> {
    config: &'a Config,
    input: R,
    output: W,
    reports: ReportGenerator,
}

impl<'a, R: BufRead, W: Write> InteractiveSession<'a, R, W> {
    pub fn new(config: &'a Config, input: R, output: W) -> Self {
        let reports = ReportGenerator::with_options(config.output.color_output, config.output.detailed, true, true);
        Self {
            config,
            input,
            output,
            reports,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        writeln!(self.output, "✨ ResumeGenie: Smart Tools for Resume, ATS, and Cover Letters")?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };
            let choice = choice.trim();
            if choice.is_empty() {
                continue;
            }
            if choice.eq_ignore_ascii_case("q") || choice.eq_ignore_ascii_case("quit") {
                break;
            }

            let Some(tool) = Tool::from_menu_choice(choice) else {
                writeln!(self.output, "⚠ Unknown choice: {}", choice)?;
                continue;
            };

            debug!("Menu selected {}", tool);
            match self.run_tool(tool).await {
                Ok(Some(report)) => {
                    let rendered = self.reports.generate_report(&report, &OutputFormat::Console)?;
                    writeln!(self.output, "{}", rendered)?;
                }
                Ok(None) => break,
                Err(e) => {
                    error!("{} failed: {}", tool, e);
                    writeln!(self.output, "❌ {}", e)?;
                }
            }
        }

        writeln!(self.output, "👋 Goodbye!")?;
        Ok(())
    }

    /// `Ok(None)` when input ends part-way through the prompts
    async fn run_tool(&mut self, tool: Tool) -> Result<Option<Report>> {
        writeln!(self.output, "\n## {}", tool)?;

        let report = match tool {
            Tool::CheckAts => {
                let Some(resume) = self.prompt_resume()? else { return Ok(None) };
                let Some(job) = self.prompt_job_description("📝 Paste the job description here")? else {
                    return Ok(None);
                };
                Report::Ats(service::check_ats(self.config, &resume, &job).await?)
            }
            Tool::RankResume => {
                let Some(resume) = self.prompt_resume()? else { return Ok(None) };
                let mut jobs = Vec::with_capacity(REQUIRED_JOB_DESCRIPTIONS);
                for n in 1..=REQUIRED_JOB_DESCRIPTIONS {
                    let Some(job) = self.prompt_job_description(&format!("📝 Job Description {}", n))? else {
                        return Ok(None);
                    };
                    jobs.push(job);
                }
                Report::Ranking(service::rank_resume(&resume, &jobs).await?)
            }
            Tool::EnhanceResume => {
                let Some(resume) = self.prompt_resume()? else { return Ok(None) };
                let Some(job) = self.prompt_job_description("📝 Paste the Job Description here")? else {
                    return Ok(None);
                };
                Report::Enhancement(service::enhance_resume(self.config, &resume, &job, None).await?)
            }
            Tool::GenerateCoverLetter => {
                let Some(name) = self.prompt("Enter your full name:")? else { return Ok(None) };
                let Some(job_title) = self.prompt("Enter the job title:")? else { return Ok(None) };
                let Some(company) = self.prompt("Enter the company name:")? else { return Ok(None) };
                let request = CoverLetterRequest::new(&name, &job_title, &company)?;

                let path = self.config.cover_letter_path();
                let Some(answer) = self.prompt(&format!("📥 Save cover letter to {}? [y/N]", path.display()))? else {
                    return Ok(None);
                };
                let save = matches!(answer.trim().to_lowercase().as_str(), "y" | "yes");

                match service::generate_cover_letter(&request, save.then_some(path.as_path())).await {
                    Ok(report) => Report::CoverLetter(report),
                    Err(save_error @ ResumeGenieError::CoverLetterSave { .. }) => {
                        writeln!(self.output, "❌ {}", save_error)?;
                        Report::CoverLetter(service::generate_cover_letter(&request, None).await?)
                    }
                    Err(e) => return Err(e),
                }
            }
        };

        Ok(Some(report))
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n📌 Choose a Tool")?;
        for (i, tool) in Tool::ALL.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, tool)?;
        }
        writeln!(self.output, "  q. Quit")?;
        write!(self.output, "> ")?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        writeln!(self.output, "{}", label)?;
        write!(self.output, "> ")?;
        self.output.flush()?;
        Ok(self.read_line()?.map(|line| line.trim().to_string()))
    }

    fn prompt_resume(&mut self) -> Result<Option<PathBuf>> {
        Ok(self
            .prompt("📄 Path to your resume (DOCX, PDF, TXT, MD)")?
            .map(PathBuf::from))
    }

    /// Multi-line text ended by an empty line, or `@path` to read a file
    fn prompt_job_description(&mut self, label: &str) -> Result<Option<JobSource>> {
        writeln!(self.output, "{} (finish with an empty line, or enter @path to load a file)", label)?;
        self.output.flush()?;

        let mut lines: Vec<String> = Vec::new();
        loop {
            let Some(line) = self.read_line()? else {
                if lines.is_empty() {
                    return Ok(None);
                }
                break;
            };
            let line = line.trim_end().to_string();

            if lines.is_empty() {
                if let Some(path) = line.trim().strip_prefix('@') {
                    return Ok(Some(JobSource::File(PathBuf::from(path.trim()))));
                }
            }
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }

        Ok(Some(JobSource::Text(lines.join("\n"))))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn test_config(dir: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.output.color_output = false;
        config.cover_letter.output_dir = dir.join("Documents");
        config
    }

    async fn run_session(config: &Config, script: &str) -> String {
        let mut output = Vec::new();
        let mut session = InteractiveSession::new(config, Cursor::new(script.to_string()), &mut output);
        session.run().await.unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_quit_immediately() {
        let dir = tempdir().unwrap();
        let output = run_session(&test_config(dir.path()), "q\n").await;

        assert!(output.contains("1. ATS Checker"));
        assert!(output.contains("4. Generate Cover Letter"));
        assert!(output.contains("Goodbye"));
    }

    #[tokio::test]
    async fn test_ats_checker_flow() {
        let dir = tempdir().unwrap();
        let resume = dir.path().join("resume.txt");
        std::fs::write(&resume, "Skills: Python and SQL").unwrap();

        let script = format!("1\n{}\npython sql docker\n\nq\n", resume.display());
        let output = run_session(&test_config(dir.path()), &script).await;

        assert!(output.contains("Matched Keywords (2): [python, sql]"));
        assert!(output.contains("Missing Keywords (1): [docker]"));
        assert!(output.contains("ATS Compatibility Score: 67/100"));
    }

    #[tokio::test]
    async fn test_ranker_rejects_empty_job_description() {
        let dir = tempdir().unwrap();
        let resume = dir.path().join("resume.txt");
        std::fs::write(&resume, "rust developer").unwrap();

        let script = format!("2\n{}\nrust developer\n\n\nq\n", resume.display());
        let output = run_session(&test_config(dir.path()), &script).await;

        assert!(output.contains("❌ Invalid input: Please provide 2 non-empty job descriptions"));
        assert!(output.contains("Goodbye"));
    }

    #[tokio::test]
    async fn test_missing_resume_is_reported_and_menu_continues() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.docx");

        let script = format!("3\n{}\nkafka\n\nq\n", missing.display());
        let output = run_session(&test_config(dir.path()), &script).await;

        assert!(output.contains("❌ Invalid input: File does not exist"));
        assert_eq!(output.matches("📌 Choose a Tool").count(), 2);
    }

    #[tokio::test]
    async fn test_cover_letter_is_saved() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());

        let output = run_session(&config, "4\nJane Doe\nData Engineer\nAcme\ny\nq\n").await;

        assert!(output.contains("Dear Hiring Manager at Acme,"));
        assert!(output.contains("Cover Letter saved at:"));
        assert!(config.cover_letter_path().exists());
    }

    #[tokio::test]
    async fn test_unknown_choice() {
        let dir = tempdir().unwrap();
        let output = run_session(&test_config(dir.path()), "9\n").await;

        assert!(output.contains("⚠ Unknown choice: 9"));
        assert!(output.contains("Goodbye"));
    }
}

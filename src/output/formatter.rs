//! Output formatters for console, JSON and Markdown

use crate::config::OutputFormat;
use crate::error::{Result, ResumeGenieError};
use crate::output::report::*;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting tool reports
pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn success(&self, text: &str) -> String {
        format!("{}\n", self.colorize(text, Color::Green))
    }

    fn warning(&self, text: &str) -> String {
        format!("{}\n", self.colorize(text, Color::Yellow))
    }

    fn failure(&self, text: &str) -> String {
        format!("{}\n", self.colorize(text, Color::Red))
    }

    fn format_ats(&self, report: &AtsReport) -> String {
        let result = &report.result;
        let mut output = String::new();

        output.push_str(&self.format_header("🔍 ATS Analysis Result", 1));
        output.push_str(&self.success(&format!(
            "✅ Matched Keywords ({}): {}",
            result.matched.len(),
            keyword_list(&result.matched)
        )));
        output.push_str(&self.failure(&format!(
            "❌ Missing Keywords ({}): {}",
            result.missing.len(),
            keyword_list(&result.missing)
        )));
        output.push_str(&format!(
            "📊 ATS Compatibility Score: {}\n",
            self.colorize(&format!("{}/100", result.score), Color::Cyan)
        ));

        output.push_str(&self.format_header("📋 Resume Formatting Tips", 2));
        let formatting = &report.formatting;
        if formatting.has_standard_sections {
            output.push_str(&self.success("✔ Standard sections found (Skills, Education, etc.)"));
            if self.detailed {
                output.push_str(&format!("  Sections: {}\n", formatting.sections_found.join(", ")));
            }
        } else {
            output.push_str(&self.warning("⚠ Consider adding common sections like Skills, Education, Projects."));
        }

        if formatting.too_short {
            output.push_str(&self.warning("⚠ Resume might be too short. Consider adding more details."));
        } else {
            output.push_str(&self.success("✔ Resume length looks good."));
        }
        if self.detailed {
            output.push_str(&format!(
                "  Word count: {} (minimum {})\n",
                formatting.word_count, formatting.min_word_count
            ));
        }

        output
    }

    fn format_ranking(&self, report: &RankingReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("🔍 Ranking Resume against Job Descriptions", 1));
        for (rank, ranked) in report.result.rankings.iter().enumerate() {
            output.push_str(&format!(
                "🏆 Rank {} → Job Description {} → Match Score: {}\n",
                rank + 1,
                ranked.job_description_index,
                self.colorize(&format!("{:.2}%", ranked.score), Color::Cyan)
            ));
        }

        if let Some(best) = report.result.best_match() {
            output.push_str(&self.success(&format!(
                "✅ Best Match: Job Description {} with a score of {:.2}%",
                best.job_description_index, best.score
            )));
        }

        output
    }

    fn format_enhancement(&self, report: &EnhancementReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("🔍 Keyword Match Analysis", 1));
        if report.suggestions.is_empty() {
            output.push_str(&self.success("✅ Great job! Your resume already includes the main keywords."));
        } else {
            output.push_str(&format!(
                "💡 Based on the job description, here are the TOP {} keywords to consider adding:\n",
                report.limit
            ));
            for (i, suggestion) in report.suggestions.iter().enumerate() {
                if self.detailed {
                    output.push_str(&format!(
                        "{}. {} (mentioned {} times)\n",
                        i + 1,
                        suggestion.keyword,
                        suggestion.frequency
                    ));
                } else {
                    output.push_str(&format!("{}. {}\n", i + 1, suggestion.keyword));
                }
            }
        }

        output
    }

    fn format_cover_letter(&self, report: &CoverLetterReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("📝 Generated Cover Letter", 1));
        output.push_str(&report.letter);
        output.push('\n');
        if let Some(path) = &report.saved_to {
            output.push_str(&self.success(&format!("✅ Cover Letter saved at: {}", path)));
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        Ok(match report {
            Report::Ats(r) => self.format_ats(r),
            Report::Ranking(r) => self.format_ranking(r),
            Report::Enhancement(r) => self.format_enhancement(r),
            Report::CoverLetter(r) => self.format_cover_letter(r),
        })
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn format_metadata(&self, metadata: &ReportMetadata) -> String {
        let mut md = String::new();
        md.push_str(&format!(
            "_Generated {} by resume-genie {}_\n\n",
            metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            metadata.version
        ));
        if let Some(path) = &metadata.resume_path {
            md.push_str(&format!("**Resume:** `{}`\n\n", path));
        }
        md
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut md = String::new();
        md.push_str(&format!("# {}\n\n", report.metadata().tool));

        if self.include_metadata {
            md.push_str(&self.format_metadata(report.metadata()));
        }

        match report {
            Report::Ats(r) => {
                md.push_str(&format!("**ATS Compatibility Score:** {}/100\n\n", r.result.score));
                md.push_str(&format!("## Matched Keywords ({})\n\n", r.result.matched.len()));
                md.push_str(&markdown_list(&r.result.matched));
                md.push_str(&format!("## Missing Keywords ({})\n\n", r.result.missing.len()));
                md.push_str(&markdown_list(&r.result.missing));
                md.push_str("## Formatting\n\n");
                md.push_str(&format!(
                    "| Check | Result |\n|---|---|\n| Standard sections | {} |\n| Word count | {} (minimum {}) |\n\n",
                    if r.formatting.has_standard_sections {
                        r.formatting.sections_found.join(", ")
                    } else {
                        "none found".to_string()
                    },
                    r.formatting.word_count,
                    r.formatting.min_word_count
                ));
            }
            Report::Ranking(r) => {
                md.push_str("| Rank | Job Description | Match Score |\n|---|---|---|\n");
                for (rank, ranked) in r.result.rankings.iter().enumerate() {
                    md.push_str(&format!(
                        "| {} | {} | {:.2}% |\n",
                        rank + 1,
                        ranked.job_description_index,
                        ranked.score
                    ));
                }
                md.push('\n');
                if let Some(best) = r.result.best_match() {
                    md.push_str(&format!(
                        "**Best Match:** Job Description {} ({:.2}%)\n",
                        best.job_description_index, best.score
                    ));
                }
            }
            Report::Enhancement(r) => {
                if r.suggestions.is_empty() {
                    md.push_str("Your resume already includes the main keywords.\n");
                } else {
                    md.push_str(&format!("## Top {} keywords to consider adding\n\n", r.limit));
                    for (i, suggestion) in r.suggestions.iter().enumerate() {
                        md.push_str(&format!(
                            "{}. `{}` ({}x)\n",
                            i + 1,
                            suggestion.keyword,
                            suggestion.frequency
                        ));
                    }
                }
            }
            Report::CoverLetter(r) => {
                md.push_str(&r.letter);
                md.push('\n');
            }
        }

        Ok(md)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &Report, format: &OutputFormat) -> Result<String> {
        self.formatter_for(format)?.format_report(report)
    }

    fn formatter_for(&self, format: &OutputFormat) -> Result<&dyn OutputFormatter> {
        let formatters: [&dyn OutputFormatter; 3] =
            [&self.console_formatter, &self.json_formatter, &self.markdown_formatter];

        formatters
            .into_iter()
            .find(|formatter| formatter.supports_format() == *format)
            .ok_or_else(|| ResumeGenieError::OutputFormatting(format!("No formatter for {:?}", format)))
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn keyword_list(keywords: &[String]) -> String {
    format!("[{}]", keywords.join(", "))
}

fn markdown_list(keywords: &[String]) -> String {
    if keywords.is_empty() {
        return "_none_\n\n".to_string();
    }
    let mut md: String = keywords.iter().map(|k| format!("- {}\n", k)).collect();
    md.push('\n');
    md
}

pub fn parse_output_format(format: &str) -> std::result::Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

pub async fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(file_path, content).await.map_err(|e| {
        ResumeGenieError::OutputFormatting(format!("Failed to save report to {}: {}", file_path.display(), e))
    })
}

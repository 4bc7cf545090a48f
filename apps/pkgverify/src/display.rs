//! Output rendering and formatting

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use console::{Style, Term};
use pkgverify_ops::{OperationResult, VerificationReport};
use pkgverify_types::ColorChoice;
use std::io;

/// Output renderer for CLI results
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
    /// Color configuration
    color_choice: ColorChoice,
    /// Terminal instance
    term: Term,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(json_output: bool, color_choice: ColorChoice) -> Self {
        Self {
            json_output,
            color_choice,
            term: Term::stdout(),
        }
    }

    /// Render operation result
    pub fn render_result(&self, result: &OperationResult) -> io::Result<()> {
        if self.json_output {
            self.render_json(result)
        } else {
            self.render_table(result)
        }
    }

    /// Render as JSON
    fn render_json(&self, result: &OperationResult) -> io::Result<()> {
        let json = result.to_json().map_err(io::Error::other)?;
        self.term.write_line(&json)
    }

    /// Render as formatted table
    fn render_table(&self, result: &OperationResult) -> io::Result<()> {
        match result {
            OperationResult::Verification(report) => self.render_verification_report(report),
            OperationResult::Config(toml) => self.term.write_str(toml),
        }
    }

    fn render_verification_report(&self, report: &VerificationReport) -> io::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        if !self.supports_color() {
            table.force_no_tty();
        }

        table.set_header(vec![
            Cell::new("Check").add_attribute(Attribute::Bold),
            Cell::new("Result").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("Archive"),
            Cell::new(report.archive.display().to_string()),
        ]);
        table.add_row(vec![
            Cell::new("Size"),
            Cell::new(format!("{} KB", report.size_kb())),
        ]);
        for file in &report.files {
            let status = if file.found {
                Cell::new("found").fg(Color::Green)
            } else {
                Cell::new("missing").fg(Color::Red)
            };
            table.add_row(vec![Cell::new(&file.path), status]);
        }
        for (label, value) in [
            ("Name", &report.manifest.name),
            ("Version", &report.manifest.version),
            ("Main", &report.manifest.main),
        ] {
            table.add_row(vec![
                Cell::new(label),
                Cell::new(value.as_deref().unwrap_or("-")),
            ]);
        }
        table.add_row(vec![
            Cell::new("Tests"),
            Cell::new(format!("passed: {}", report.test_command)).fg(Color::Green),
        ]);

        self.term.write_line(&table.to_string())?;
        self.term.write_line(&format!(
            "{} in {}ms",
            self.style_heading("Verified"),
            report.duration_ms
        ))
    }

    fn style_heading(&self, text: &str) -> String {
        if self.supports_color() {
            Style::new().bold().green().apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn supports_color(&self) -> bool {
        match self.color_choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.term.features().colors_supported(),
        }
    }
}

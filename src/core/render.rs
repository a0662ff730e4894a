use crate::core::letters::LETTER_TABLE;
use crate::domain::model::{DigitGrid, NumerologyResult, Reduction};
use crate::utils::error::{NumerologyError, Result};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub const VALUES: [&'static str; 2] = ["text", "json"];

    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(NumerologyError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Valid formats: {}", Self::VALUES.join(", ")),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub show_letters: bool,
    pub show_steps: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_letters: true,
            show_steps: true,
        }
    }
}

pub fn render(result: &NumerologyResult, format: OutputFormat, options: RenderOptions) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result, options)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

/// "35 → 8"
pub fn format_steps(reduction: &Reduction) -> String {
    reduction
        .steps()
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

pub fn render_grid(grid: &DigitGrid) -> String {
    let width = grid.cells.values().map(String::len).max().unwrap_or(0).max(1);
    let border = format!("+{}+", vec!["-".repeat(width + 2); 3].join("+"));

    let mut out = String::new();
    let _ = writeln!(out, "{}", border);
    for row in grid.rows() {
        let cells: Vec<String> = row.iter().map(|c| format!(" {:^width$} ", c)).collect();
        let _ = writeln!(out, "|{}|", cells.join("|"));
        let _ = writeln!(out, "{}", border);
    }
    out
}

pub fn render_text(result: &NumerologyResult, options: RenderOptions) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Name: {}", result.name);
    if let Some(date) = &result.birth_date {
        let _ = writeln!(out, "Birth date: {}", date.value);
    }
    let _ = writeln!(out);

    if let Some(grid) = &result.grid {
        let _ = writeln!(out, "Grid");
        out.push_str(&render_grid(grid));
        let _ = writeln!(out);
    }

    if let Some(bhagyank) = &result.bhagyank {
        let _ = writeln!(out, "Bhagyank:    {}", bhagyank.final_digit());
    }
    if let Some(moolank) = &result.moolank {
        let _ = writeln!(out, "Moolank:     {}", moolank.final_digit());
    }
    let _ = writeln!(out, "Name number: {}", result.name_number.final_digit());

    if options.show_letters {
        let letters: Vec<String> = result
            .letter_values
            .iter()
            .map(|v| format!("{} → {}", v.letter, v.value))
            .collect();
        let _ = writeln!(out);
        let _ = writeln!(out, "Letters: {}", letters.join(", "));
    }

    if options.show_steps {
        let _ = writeln!(out);
        let _ = writeln!(out, "Steps");
        if let Some(bhagyank) = &result.bhagyank {
            let _ = writeln!(out, "  Bhagyank (whole date): {}", format_steps(bhagyank));
        }
        if let Some(moolank) = &result.moolank {
            let _ = writeln!(out, "  Moolank (day):         {}", format_steps(moolank));
        }
        let _ = writeln!(
            out,
            "  Name number (total {}): {}",
            result.total,
            format_steps(&result.name_number)
        );
    }

    out
}

/// Letter-to-digit correspondence table.
pub fn render_letter_table() -> String {
    let mut out = String::new();
    for (letters, digit) in LETTER_TABLE {
        let grouped: Vec<String> = letters.chars().map(String::from).collect();
        let _ = writeln!(out, "{:<10} → {}", grouped.join(","), digit);
    }
    out
}

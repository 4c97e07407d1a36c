use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use unicode_width::UnicodeWidthStr;

use kana_engine::kana_core::settings;
use kana_engine::{analyzer_from_settings, normalize, TextAnalyzer, Token};

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn normalize_args(texts: &[String]) {
    for text in texts {
        println!("{}", normalize(text));
    }
}

pub fn analyze(file: Option<&str>, settings_file: Option<&str>, json: bool) {
    let analyzer = build_analyzer(settings_file);
    let reader: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(die!(
            File::open(path),
            "Error opening {path}: {}"
        ))),
        None => Box::new(io::stdin().lock()),
    };
    let tokens = die!(analyzer.analyze_reader(reader), "Error reading input: {}");
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    die!(write_tokens(&mut out, &tokens, json), "Error: {}");
    die!(out.flush(), "Error: {}");
}

fn build_analyzer(settings_file: Option<&str>) -> TextAnalyzer {
    let result = match settings_file {
        Some(path) => {
            let s = die!(
                settings::load_settings_file(Path::new(path)),
                "Error in {path}: {}"
            );
            analyzer_from_settings(&s)
        }
        None => analyzer_from_settings(settings::settings()),
    };
    die!(result, "Error: {}")
}

/// Render tokens as JSON lines or as an aligned text table.
pub fn write_tokens<W: Write>(
    out: &mut W,
    tokens: &[Token],
    json: bool,
) -> Result<(), OutputError> {
    if json {
        for token in tokens {
            serde_json::to_writer(&mut *out, token)?;
            writeln!(out)?;
        }
        return Ok(());
    }
    let width = tokens
        .iter()
        .map(|t| t.text.width())
        .max()
        .unwrap_or(0)
        .max("text".len());
    writeln!(out, "{:>4}  {}  offsets", "pos", pad("text", width))?;
    for token in tokens {
        writeln!(
            out,
            "{:>4}  {}  {}..{}",
            token.position,
            pad(&token.text, width),
            token.offset_from,
            token.offset_to
        )?;
    }
    Ok(())
}

/// Left-align by display width; full-width kana occupy two columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

//! Normalize command implementation.

use clap::Parser;
use std::path::PathBuf;

use super::NormalizerArgs;

/// Normalize command arguments.
#[derive(Parser)]
pub struct NormalizeCommand {
    /// Text to normalize ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub normalizer: NormalizerArgs,
}

use akshar_normalizer::Normalize;
use anyhow::{Context, Result as AnyhowResult};

pub fn run(cmd: NormalizeCommand) -> AnyhowResult<()> {
    let normalizer = cmd.normalizer.build()?;
    let input_text = super::read_input(cmd.input)?;

    let output = normalize_text(&normalizer, &input_text);
    tracing::debug!(bytes = input_text.len(), "normalized input");

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Normalized {} bytes to {}", input_text.len(), path.display());
        }
        None => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}

/// Normalize the whole input in one call.
///
/// Newlines and carriage returns are ordinary characters to the normalizer,
/// so the input is not split into lines first.
fn normalize_text<N: Normalize + ?Sized>(normalizer: &N, text: &str) -> String {
    normalizer.normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use akshar_normalizer::Normalizer;

    #[test]
    fn test_multiline_matches_library() {
        let normalizer = Normalizer::builder()
            .normalize_vowel_endings(true)
            .build()
            .unwrap();
        let text = "राम\nश्याम";
        let out = normalize_text(&normalizer, text);
        assert_eq!(out, normalizer.normalize(text));
        // a newline is not a word boundary for vowel endings
        assert_eq!(out, "राम\nश्याम्");
    }

    #[test]
    fn test_crlf_is_preserved() {
        let normalizer = Normalizer::builder().build().unwrap();
        assert_eq!(normalize_text(&normalizer, "a\r\nb\r\n"), "a\r\nb\r\n");
        assert_eq!(normalize_text(&normalizer, "क|\r\n"), "क।\r\n");
    }

    #[test]
    fn test_run_writes_library_output() {
        let path = std::env::temp_dir()
            .join(format!("akshar-normalize-{}.txt", std::process::id()));
        let text = "राम\r\nश्याम|\nसीता";
        let cmd = NormalizeCommand {
            input: text.to_string(),
            output: Some(path.clone()),
            normalizer: NormalizerArgs {
                lang: None,
                remove_nuktas: false,
                nasal_mode: None,
                fold_chandras: false,
                vowel_endings: true,
                vowel_policy: None,
                config: None,
            },
        };
        run(cmd).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let normalizer = Normalizer::builder()
            .normalize_vowel_endings(true)
            .build()
            .unwrap();
        assert_eq!(written, normalizer.normalize(text));
        assert_eq!(written, "राम\r\nश्याम।\nसीता");
    }
}

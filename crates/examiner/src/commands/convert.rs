//! Convert command implementation.
//!
//! Loads an outline, converts it and writes the quiz document next to the
//! input (or wherever `--output` points).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use examiner_core::{ConvertContext, FailurePolicy, convert};
use examiner_xml::{XmlDocument, write_document};

use super::{load_config, load_outline, render_diagnostics};

/// Arguments for the convert command
#[derive(Debug)]
pub struct ConvertArgs {
    /// Outline file
    pub input: PathBuf,
    /// Output file, `-` for stdout
    pub output: Option<String>,
    /// Settings file
    pub config: Option<PathBuf>,
    /// Skip unrecognized questions instead of aborting
    pub skip_invalid: bool,
}

/// Where the quiz document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// Resolve `--output`, defaulting to the input path with an `.xml` extension.
    pub fn resolve(input: &Path, output: Option<&str>) -> Self {
        match output {
            Some("-") => Destination::Stdout,
            Some(path) => Destination::File(PathBuf::from(path)),
            None => Destination::File(input.with_extension("xml")),
        }
    }
}

/// Execute the convert command
pub fn execute(args: ConvertArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if args.skip_invalid {
        config.on_invalid = FailurePolicy::Skip;
    }

    let mut outline = load_outline(&args.input)?;

    let mut ctx = ConvertContext::new();
    let result = convert(&mut outline, &config, &mut ctx);

    if ctx.has_diagnostics() {
        eprintln!("{}", render_diagnostics(ctx.diagnostics()));
    }

    let conversion = match result {
        Ok(conversion) => conversion,
        Err(err) => {
            eprintln!("{}", err.to_diagnostic().to_text());
            return Err(err).with_context(|| format!("Failed to convert {}", args.input.display()));
        }
    };

    let destination = Destination::resolve(&args.input, args.output.as_deref());
    write_quiz(&conversion.document, &destination)?;

    let report = &conversion.report;
    match &destination {
        Destination::Stdout => info!("Converted {} questions", report.converted()),
        Destination::File(path) => info!(
            "Converted {} questions to {}",
            report.converted(),
            path.display()
        ),
    }
    if report.skipped() > 0 {
        info!("Skipped {} questions", report.skipped());
    }

    Ok(())
}

fn write_quiz(document: &XmlDocument, destination: &Destination) -> Result<()> {
    match destination {
        Destination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            write_document(document, &mut stdout).context("Failed to write quiz to stdout")?;
            stdout.flush()?;
        }
        Destination::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_document(document, &mut writer)
                .with_context(|| format!("Failed to write quiz to {}", path.display()))?;
            writer.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const OUTLINE: &str = r#"
children:
  - heading: Geography
    children:
      - heading: Capital of Germany
        children:
          - heading: Berlin
            tags: ["100"]
          - heading: Bonn
            tags: [_100]
      - heading: Broken
        children:
          - heading: untagged answer
"#;

    fn args(dir: &TempDir, skip_invalid: bool) -> ConvertArgs {
        let input = dir.path().join("quiz.yaml");
        fs::write(&input, OUTLINE).unwrap();
        ConvertArgs {
            input,
            output: None,
            config: None,
            skip_invalid,
        }
    }

    #[test]
    fn test_destination_defaults_to_xml_next_to_input() {
        assert_eq!(
            Destination::resolve(Path::new("quiz/capitals.yaml"), None),
            Destination::File(PathBuf::from("quiz/capitals.xml"))
        );
        assert_eq!(
            Destination::resolve(Path::new("capitals.yaml"), Some("-")),
            Destination::Stdout
        );
        assert_eq!(
            Destination::resolve(Path::new("capitals.yaml"), Some("out/quiz.xml")),
            Destination::File(PathBuf::from("out/quiz.xml"))
        );
    }

    #[test]
    fn test_abort_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, false);

        let err = execute(args).unwrap_err();

        assert!(err.to_string().contains("Failed to convert"));
        assert!(!dir.path().join("quiz.xml").exists());
    }

    #[test]
    fn test_skip_invalid_writes_remaining_questions() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, true);

        execute(args).unwrap();

        let xml = fs::read_to_string(dir.path().join("quiz.xml")).unwrap();
        let quiz = examiner_xml::parse(&xml).unwrap().root;
        let types: Vec<&str> = quiz
            .get_children("question")
            .into_iter()
            .map(|q| q.get_attribute("type").unwrap())
            .collect();
        assert_eq!(types, vec!["category", "multichoice"]);
    }

    #[test]
    fn test_config_file_is_applied() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("examiner.toml");
        fs::write(&config, "on_invalid = \"skip\"\n").unwrap();

        let mut args = args(&dir, false);
        args.config = Some(config);
        args.output = Some(dir.path().join("out.xml").display().to_string());

        execute(args).unwrap();
        assert!(dir.path().join("out.xml").exists());
    }

    #[test]
    fn test_missing_input_is_reported() {
        let dir = TempDir::new().unwrap();
        let args = ConvertArgs {
            input: dir.path().join("missing.yaml"),
            output: None,
            config: None,
            skip_invalid: false,
        };

        let err = execute(args).unwrap_err();
        assert!(err.to_string().contains("Failed to load outline"));
    }
}

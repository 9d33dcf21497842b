mod archive;
mod display;
mod images;
mod loader;
mod parser;
mod settings;
mod suggest;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::debug;

use settings::Settings;

#[derive(Parser)]
#[command(
    name = "prompt_reader",
    about = "Summarise prompt.md and suggest plan.md updates"
)]
struct Cli {
    /// Directory holding prompt.md (default: current directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,
    /// Archive the prompt without asking
    #[arg(long, conflicts_with = "keep")]
    archive: bool,
    /// Leave the prompt in place without asking
    #[arg(long)]
    keep: bool,
    /// Print the parsed prompt as JSON instead of the summary (implies --keep unless --archive)
    #[arg(long)]
    json: bool,
    /// Decode embedded images to temp_image-<n>.<format>
    #[arg(long)]
    save_images: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load()?.with_workdir(cli.dir.clone());
    debug!(?settings, "Settings loaded");

    let input = settings.input_path();
    let mut notices = notice_stream(cli.json);
    let Some(content) = loader::load(&input)? else {
        writeln!(
            notices,
            "Created {} template. Please edit it and run again.",
            input.display()
        )?;
        return Ok(());
    };

    let doc = parser::parse_document(&content);
    let suggestions = suggest::suggest_plan_updates(&doc);
    debug!(
        chars = doc.raw_content.chars().count(),
        sections = doc.sections.len(),
        "Parsed {:?}",
        input
    );

    if cli.json {
        println!("{}", display::render_json(&doc, &suggestions)?);
    } else {
        display::print(&doc, &suggestions)?;
    }

    if cli.save_images {
        images::save_all(&doc.images, &settings.workdir, &mut notices)?;
    }

    let archive = if cli.archive {
        true
    } else if cli.keep || cli.json {
        false
    } else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        ask_to_archive(&mut stdin.lock(), &mut stdout.lock())?
    };

    if archive {
        let now = chrono::Local::now().naive_local();
        match archive::archive_prompt(&input, &settings.archive_path(), now)? {
            Some(dest) => {
                writeln!(notices, "Archived prompt to: {}", dest.display())?;
                writeln!(notices, "Prompt archived successfully!")?;
            }
            None => writeln!(
                notices,
                "{} is already gone, nothing to archive.",
                input.display()
            )?,
        }
    } else if !cli.json {
        println!("{} left in place for further editing.", settings.input_file);
    }

    debug!(elapsed = ?t0.elapsed(), "Done");
    Ok(())
}

/// Status lines go to stderr in JSON mode so stdout holds only the report.
fn notice_stream(json: bool) -> Box<dyn Write> {
    if json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    }
}

/// Ask whether to archive; only `y` or `yes` (any case) counts as a yes.
fn ask_to_archive<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
    writeln!(out, "\n{}", "-".repeat(60))?;
    write!(out, "Archive this prompt? (y/N): ")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

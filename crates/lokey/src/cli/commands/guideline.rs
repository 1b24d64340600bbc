//! Implementation of `lokey guideline`.

use std::process::ExitCode;

use serde::Serialize;

use crate::cli::args::GuidelineCommand;
use crate::cli::output;
use crate::guideline;

/// JSON output for `lokey guideline`.
#[derive(Serialize)]
struct JsonGuidelineOutput {
    /// The markdown guideline.
    guideline: String,
    /// The tone it was written in.
    tone: String,
}

/// Renders a writing guideline for the given keywords.
pub fn run(cmd: &GuidelineCommand) -> ExitCode {
    let tone = guideline::Tone::parse(&cmd.tone);
    let rendered = guideline::generate(&cmd.keywords, tone);

    if cmd.output.json {
        return output::print_json(&JsonGuidelineOutput {
            guideline: rendered,
            tone: tone.name().to_string(),
        });
    }
    println!("{rendered}");
    ExitCode::SUCCESS
}

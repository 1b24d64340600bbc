//! Implementation of `lokey facets`.

use std::process::ExitCode;

use lokey_keyword::facets;

use super::shared::model_backend;
use crate::cli::args::FacetsCommand;
use crate::cli::context::CommandContext;
use crate::cli::output;

/// Extracts facets and resolves the location.
pub fn run(ctx: &CommandContext, cmd: &FacetsCommand) -> ExitCode {
    let backend = model_backend(cmd.model);
    let mut extracted = facets::extract(backend.as_deref(), &cmd.place, &cmd.description);

    let location_text = cmd.address.as_deref().unwrap_or(&cmd.description);
    extracted.location = ctx.resolver().resolve(&cmd.place, location_text);

    if cmd.output.json {
        return output::print_json(&extracted);
    }
    output::print_facets(&extracted);
    ExitCode::SUCCESS
}

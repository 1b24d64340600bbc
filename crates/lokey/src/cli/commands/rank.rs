//! Implementation of `lokey rank`.

use std::process::ExitCode;

use serde::Serialize;

use lokey_score::{
    Combination, RankedKeyword, build_combinations, combination_notice, fallback_pool,
    rank_keywords,
};

use super::shared::read_facets;
use crate::cli::args::RankCommand;
use crate::cli::context::CommandContext;
use crate::cli::output;

/// JSON output for `lokey rank`.
#[derive(Serialize)]
struct JsonRankOutput<'out> {
    /// Up to four strategy combinations.
    recommended_combinations: &'out [Combination],
    /// The full ranked pool.
    all_keywords: &'out [RankedKeyword],
    /// User-facing note about the combination count.
    warning: String,
}

/// Ranks the broad keyword pool and builds strategy combinations.
pub fn run(_ctx: &CommandContext, cmd: &RankCommand) -> ExitCode {
    let facets = match read_facets(&cmd.facets) {
        Ok(facets) => facets,
        Err(code) => return code,
    };

    let ranked = rank_keywords(fallback_pool(&facets), &facets);
    let combinations = build_combinations(&ranked);
    let warning = combination_notice(combinations.len());

    if cmd.output.json {
        return output::print_json(&JsonRankOutput {
            recommended_combinations: &combinations,
            all_keywords: &ranked,
            warning,
        });
    }
    output::print_ranked(&ranked, &combinations, &warning);
    ExitCode::SUCCESS
}

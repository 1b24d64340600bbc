//! Implementation of `lokey select`.

use std::process::ExitCode;

use serde::Serialize;

use lokey_keyword::CandidateGenerator;
use lokey_score::{EvalContext, EvaluatedKeyword, SelectionResult, evaluate_candidates, select};
use lokey_trend::{TrendReport, TrendService};

use super::shared::{current_month, model_backend, read_facets, trend_subject};
use crate::cli::args::SelectCommand;
use crate::cli::context::CommandContext;
use crate::cli::output;

/// JSON output for `lokey select`.
#[derive(Serialize)]
struct JsonSelectOutput<'out> {
    /// Selected keywords with admission phases and stats.
    #[serde(flatten)]
    selection: &'out SelectionResult,
    /// Every evaluated keyword, best first.
    evaluated: &'out [EvaluatedKeyword],
}

/// Runs the low-competition selection pipeline.
pub fn run(ctx: &CommandContext, cmd: &SelectCommand) -> ExitCode {
    let facets = match read_facets(&cmd.facets) {
        Ok(facets) => facets,
        Err(code) => return code,
    };
    let month = cmd.month.unwrap_or_else(current_month);
    if !(1..=12).contains(&month) {
        eprintln!("error: month must be between 1 and 12");
        return ExitCode::FAILURE;
    }

    let generator = CandidateGenerator::new(model_backend(cmd.model));
    let candidates = generator.generate(&facets);

    let trends = if cmd.no_trends {
        TrendReport::default()
    } else {
        TrendService::naver(ctx.config.trend.clone()).report(&trend_subject(&facets))
    };

    let eval_ctx = EvalContext {
        facets: &facets,
        tables: &ctx.tables,
        config: &ctx.config,
        month,
        trends: &trends,
    };
    let evaluated = evaluate_candidates(&candidates, &eval_ctx);
    let threshold = ctx.config.thresholds.for_city(&facets.location.city);
    let selection = select(&evaluated, threshold, candidates.len(), &ctx.config.selector);

    if cmd.output.json {
        return output::print_json(&JsonSelectOutput {
            selection: &selection,
            evaluated: &evaluated,
        });
    }
    output::print_selection(&selection);
    ExitCode::SUCCESS
}

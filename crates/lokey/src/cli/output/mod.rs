//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use lokey_geo::Confidence;
use lokey_keyword::BusinessFacets;
use lokey_score::{
    Combination, CompetitionLevel, RankedKeyword, SelectionPhase, SelectionResult,
    efficiency_rating,
};
use lokey_trend::Hotness;
use serde::Serialize;

/// Serializes a value as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json_str) => {
            println!("{json_str}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

fn confidence_label(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::High => "high",
        Confidence::Medium => "medium",
        Confidence::Low => "low",
    }
}

fn phase_label(phase: SelectionPhase) -> &'static str {
    match phase {
        SelectionPhase::Threshold => "threshold",
        SelectionPhase::RelaxedHalf => "relaxed 1/2",
        SelectionPhase::RelaxedQuarter => "relaxed 1/4",
        SelectionPhase::LastResort => "last resort",
    }
}

fn hotness_label(hotness: Hotness) -> &'static str {
    match hotness {
        Hotness::High => "high",
        Hotness::Medium => "medium",
        Hotness::Low => "low",
        Hotness::None => "-",
    }
}

fn competition_label(level: CompetitionLevel) -> &'static str {
    match level {
        CompetitionLevel::VeryLow => "very low",
        CompetitionLevel::Low => "low",
        CompetitionLevel::Medium => "medium",
        CompetitionLevel::High => "high",
    }
}

fn list_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

/// Renders extracted facets as labeled lines.
pub fn print_facets(facets: &BusinessFacets) {
    println!("place:      {}", facets.place_name);
    println!("category:   {}", list_or_dash(&facets.category));

    let items: Vec<String> = facets
        .items
        .iter()
        .map(|item| {
            if item.signature {
                format!("{} (signature)", item.name)
            } else {
                item.name.clone()
            }
        })
        .collect();
    println!("items:      {}", list_or_dash(&items));
    println!("audience:   {}", list_or_dash(&facets.audience));
    println!("features:   {}", list_or_dash(&facets.features));
    println!("vibe:       {}", list_or_dash(&facets.vibe));
    println!(
        "price:      {}",
        facets.price_range.as_deref().unwrap_or("-")
    );

    let loc = &facets.location;
    let mut place = vec![loc.city.as_str(), loc.district.as_str()];
    if let Some(dong) = &loc.dong {
        place.push(dong);
    }
    if let Some(micro) = &loc.micro_area {
        place.push(micro);
    }
    place.retain(|part| !part.is_empty());
    let rendered = if place.is_empty() {
        "(unresolved)".to_string()
    } else {
        place.join(" ")
    };
    println!(
        "location:   {rendered} [{} via {}]",
        confidence_label(loc.confidence),
        loc.source
    );
}

/// Renders a selection result: recommended table, alternatives, stats.
pub fn print_selection(selection: &SelectionResult) {
    if selection.recommended.is_empty() {
        println!("No keywords selected.");
    } else {
        println!("Recommended keywords:");
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            "Keyword", "Phase", "Volume", "Docs", "Score", "Eff", "Rating", "Trend",
        ]);
        for selected in &selection.recommended {
            let k = &selected.keyword;
            table.add_row(vec![
                Cell::new(&k.phrase),
                Cell::new(phase_label(selected.phase)),
                Cell::new(format!("{:.0}", k.adjusted_sv)),
                Cell::new(format!("{:.0}", k.doc_count)),
                Cell::new(format!("{:.2}", k.score)),
                Cell::new(format!("{:.2}", k.efficiency)),
                Cell::new(efficiency_rating(k.efficiency)),
                Cell::new(hotness_label(k.trend_hotness)),
            ]);
        }
        println!("{table}");

        for selected in &selection.recommended {
            let k = &selected.keyword;
            if k.warnings.is_empty() {
                continue;
            }
            for warning in &k.warnings {
                println!("  {}: {warning}", k.phrase);
            }
        }
    }

    if !selection.alternatives.is_empty() {
        println!();
        println!("Alternatives:");
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec!["Keyword", "Volume", "Docs", "Score", "Eff"]);
        for k in &selection.alternatives {
            table.add_row(vec![
                Cell::new(&k.phrase),
                Cell::new(format!("{:.0}", k.adjusted_sv)),
                Cell::new(format!("{:.0}", k.doc_count)),
                Cell::new(format!("{:.2}", k.score)),
                Cell::new(format!("{:.2}", k.efficiency)),
            ]);
        }
        println!("{table}");
    }

    let stats = &selection.stats;
    println!();
    println!(
        "{} candidates, {} qualified, {} selected (threshold {:.0}, avg efficiency {:.2})",
        stats.total_candidates,
        stats.qualified_count,
        stats.final_count,
        stats.dynamic_threshold,
        selection.avg_efficiency
    );
    println!("action: {}", stats.recommended_action);
}

/// Renders strategy combinations and the ranked pool.
pub fn print_ranked(ranked: &[RankedKeyword], combinations: &[Combination], warning: &str) {
    for combo in combinations {
        println!("{} ({})", combo.name, combo.strategy);
        println!("  {}", combo.recommendation);
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec!["Keyword", "Volume", "Docs", "Competition", "Local"]);
        for k in &combo.keywords {
            table.add_row(vec![
                Cell::new(&k.phrase),
                Cell::new(format!("{:.0}", k.search_volume)),
                Cell::new(format!("{:.0}", k.doc_count)),
                Cell::new(competition_label(k.competition_level)),
                Cell::new(k.local_score.to_string()),
            ]);
        }
        println!("{table}");
        println!(
            "  total volume {:.0}, avg competition {:.0}",
            combo.total_volume, combo.avg_competition
        );
        println!();
    }

    println!("{warning}");
    println!();

    println!("Keyword pool ({} phrases):", ranked.len());
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        "Keyword", "Priority", "Volume", "Docs", "Competition", "Conf", "Why",
    ]);
    for k in ranked {
        table.add_row(vec![
            Cell::new(&k.phrase),
            Cell::new(k.priority.to_string()),
            Cell::new(format!("{:.0}", k.search_volume)),
            Cell::new(format!("{:.0}", k.doc_count)),
            Cell::new(competition_label(k.competition_level)),
            Cell::new(format!("{:.2}", k.confidence)),
            Cell::new(&k.why),
        ]);
    }
    println!("{table}");
}

//! Helpers shared across commands.

use std::io::Read;
use std::process::ExitCode;
use std::{fs, io};

use lokey_keyword::{BusinessFacets, GeminiGenerator, TextGenerator};
use lokey_trend::TrendSubject;

/// Reads a facets document from a file, or stdin when the path is "-".
pub fn read_facets(path: &str) -> Result<BusinessFacets, ExitCode> {
    let contents = if path == "-" {
        let mut buffer = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut buffer) {
            eprintln!("error: failed to read stdin: {err}");
            return Err(ExitCode::FAILURE);
        }
        buffer
    } else {
        match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                eprintln!("error: failed to read {path}: {err}");
                return Err(ExitCode::FAILURE);
            }
        }
    };
    match serde_json::from_str(&contents) {
        Ok(facets) => Ok(facets),
        Err(err) => {
            eprintln!("error: invalid facets JSON: {err}");
            Err(ExitCode::FAILURE)
        }
    }
}

/// The current calendar month, 1-12.
pub fn current_month() -> u32 {
    let now = time::OffsetDateTime::now_local()
        .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    u32::from(u8::from(now.month()))
}

/// A model backend when requested, otherwise none.
pub fn model_backend(enabled: bool) -> Option<Box<dyn TextGenerator>> {
    enabled.then(|| Box::new(GeminiGenerator::default()) as Box<dyn TextGenerator>)
}

/// Maps facets onto the slots trend derivation wants.
pub fn trend_subject(facets: &BusinessFacets) -> TrendSubject {
    TrendSubject {
        category: facets.primary_category().to_string(),
        city: facets.location.city.clone(),
        district: facets.location.district.clone(),
        dong: facets.location.dong.clone(),
        micro_area: facets.location.micro_area.clone(),
        first_item: facets.items.first().map(|item| item.name.clone()),
        first_feature: facets.features.first().cloned(),
    }
}

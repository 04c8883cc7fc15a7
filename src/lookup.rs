use anyhow::Result;

use crate::export::{ensure_dir, learners_csv_path, write_learners_csv};
use crate::fetch::{build_client, fetch_move_page};
use crate::format::OutputFormatter;
use crate::learnset::{LearnsetExtractor, PageExtractor};
use crate::model::{Lookup, LookupOptions};
use crate::ui;
use crate::utils::wiki::move_page_url;

/// Fetch the move page, extract its learners and write the CSV row.
///
/// Nothing is written unless fetching and extraction both succeed.
pub fn lookup(
    move_name: &str,
    opts: &LookupOptions,
    extractor: &dyn PageExtractor,
) -> Result<Lookup> {
    let url = move_page_url(&opts.wiki_base, move_name);

    let client = build_client(opts.timeout)?;
    let html = fetch_move_page(&client, &url)?;
    let learners = extractor.extract(&html)?;

    ui::info(found_message(learners.len(), move_name));

    let row = OutputFormatter::new(opts.punctuation).format_row(&learners);
    ensure_dir(&opts.out_dir)?;
    let csv_path = learners_csv_path(&opts.out_dir, move_name);
    write_learners_csv(&csv_path, &row)?;

    Ok(Lookup {
        url,
        learners,
        csv_path,
    })
}

/// Learners of `move_name`, or an empty list if anything went wrong.
/// Failures are reported on stdout and never surface as errors.
pub fn learners_for_move(move_name: &str, opts: &LookupOptions) -> Vec<String> {
    match lookup(move_name, opts, &LearnsetExtractor) {
        Ok(found) => {
            ui::success(format!("Saved {}", found.csv_path.display()));
            found.learners
        }
        Err(err) => {
            report_failure(&move_page_url(&opts.wiki_base, move_name), &err);
            Vec::new()
        }
    }
}

pub fn found_message(count: usize, move_name: &str) -> String {
    format!("Found {count} Pokémon that can learn {move_name}")
}

/// Anything raised by the HTTP client counts as a transport failure.
pub fn is_transport_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<reqwest::Error>())
}

fn report_failure(url: &str, err: &anyhow::Error) {
    if is_transport_error(err) {
        ui::error(format!("Error fetching data. Does the following URL exist?: {err:#}"));
    } else {
        ui::error(format!("Error processing data: {err:#}"));
        ui::warning(format!("URL attempted: {url}"));
    }
}

pub mod args;
pub mod prompt;
pub mod validate;

use anyhow::Result;
use clap::Parser;
use std::time::Duration;

use crate::format::PunctuationPolicy;
use crate::lookup::learners_for_move;
use crate::model::LookupOptions;
use crate::ui;
use crate::utils::wiki::move_page_url;

pub fn run() -> Result<()> {
    let cli = args::Cli::parse();

    if let Err(err) = validate::validate_cli(&cli) {
        ui::error(format!("{err:#}"));
        return Ok(());
    }

    if cli.no_color {
        ui::disable_color();
    }

    let move_name = match cli.move_name() {
        Some(name) => name,
        None => match prompt::ask_move_name() {
            Ok(Some(name)) => name,
            Ok(None) => {
                ui::warning("No move name given.");
                return Ok(());
            }
            Err(err) => {
                ui::error(format!("{err:#}"));
                return Ok(());
            }
        },
    };

    let opts = options_from(&cli);
    let learners = learners_for_move(&move_name, &opts);

    ui::print_learners(&move_name, &learners);
    println!("\nURL checked: {}", move_page_url(&opts.wiki_base, &move_name));

    Ok(())
}

fn options_from(cli: &args::Cli) -> LookupOptions {
    LookupOptions {
        wiki_base: cli.wiki.trim().to_string(),
        out_dir: cli.out_dir.clone(),
        punctuation: if cli.keep_punctuation {
            PunctuationPolicy::Preserve
        } else {
            PunctuationPolicy::Strip
        },
        timeout: cli.timeout.map(Duration::from_secs),
    }
}

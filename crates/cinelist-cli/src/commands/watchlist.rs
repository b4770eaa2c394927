use super::{load_config, open_directory, open_store, prompts};
use crate::output::Output;
use crate::spinner::RequestSpinner;
use cinelist_config::PathManager;
use cinelist_core::render_watchlist;
use color_eyre::eyre::eyre;
use color_eyre::Result;

/// Outside the shell there is no displayed result set, so the record to
/// save is looked up in the catalog by id.
pub async fn run_add(id: &str, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config = load_config(&path_manager)?;
    let mut store = open_store(&config, &path_manager)?;

    if store.contains(id) {
        output.info(format!("{} is already in your watchlist", id));
        return Ok(());
    }

    let directory = open_directory(&config)?;
    let spinner = RequestSpinner::start(format!("Looking up {}...", id), output.is_human());
    let detail = directory.fetch_detail(id).await;
    spinner.finish();

    let Some(detail) = detail else {
        return Err(eyre!("Could not find movie {} in the catalog", id));
    };

    let movie = detail.summary();
    let title = movie.title.clone();
    store
        .add(movie)
        .map_err(|e| eyre!("Failed to save watchlist: {}", e))?;

    output.success(format!("Added {} ({}) to your watchlist", title, id));
    output.region(
        "Watchlist",
        &render_watchlist(store.snapshot(), &config.display.placeholder_poster),
    );
    Ok(())
}

pub fn run_remove(id: &str, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config = load_config(&path_manager)?;
    let mut store = open_store(&config, &path_manager)?;

    let removed = store
        .remove(id)
        .map_err(|e| eyre!("Failed to save watchlist: {}", e))?;
    if removed {
        output.success(format!("Removed {} from your watchlist", id));
    } else {
        output.info(format!("{} is not in your watchlist", id));
    }

    output.region(
        "Watchlist",
        &render_watchlist(store.snapshot(), &config.display.placeholder_poster),
    );
    Ok(())
}

pub fn run_list(output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config = load_config(&path_manager)?;
    let store = open_store(&config, &path_manager)?;

    output.region(
        "Watchlist",
        &render_watchlist(store.snapshot(), &config.display.placeholder_poster),
    );
    Ok(())
}

pub fn run_clear(yes: bool, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config = load_config(&path_manager)?;
    let mut store = open_store(&config, &path_manager)?;

    if store.is_empty() {
        output.info("Your watchlist is already empty");
        return Ok(());
    }

    if !yes {
        let confirmed = prompts::prompt_yes_no(
            &format!("Remove all {} movies from your watchlist?", store.len()),
            Some(false),
        )?;
        if !confirmed {
            output.info("Nothing removed");
            return Ok(());
        }
    }

    let removed = store
        .clear()
        .map_err(|e| eyre!("Failed to save watchlist: {}", e))?;
    output.success(format!("Removed {} movie(s) from your watchlist", removed));
    Ok(())
}

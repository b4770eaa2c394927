use super::build_controller;
use crate::output::Output;
use crate::spinner::RequestSpinner;
use color_eyre::Result;

pub async fn run_search(term: &str, output: &Output) -> Result<()> {
    tracing::debug!("Search command started");

    let (mut controller, _) = build_controller()?;

    let spinner = RequestSpinner::start(format!("Searching for '{}'...", term.trim()), output.is_human());
    let submitted = controller.submit_search(term).await;
    spinner.finish();

    if !submitted {
        output.warn("Search term is empty");
        return Ok(());
    }

    output.region("Results", &controller.view().results);
    Ok(())
}

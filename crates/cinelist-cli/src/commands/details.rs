use super::build_controller;
use crate::output::Output;
use crate::spinner::RequestSpinner;
use color_eyre::Result;

pub async fn run_details(id: &str, output: &Output) -> Result<()> {
    let (mut controller, _) = build_controller()?;

    let spinner = RequestSpinner::start(format!("Fetching details for {}...", id), output.is_human());
    controller.show_details(id).await;
    spinner.finish();

    if let Some(modal) = &controller.view().modal {
        output.modal(modal);
    }
    Ok(())
}

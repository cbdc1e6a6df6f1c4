use anyhow::Result;
use consulta::cli::{actions, actions::Action, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let action = start()?;

    // Handle the action
    match action {
        Action::Check { .. } => actions::check::handle(action).await?,
        Action::Export { .. } => actions::export::handle(action).await?,
    }

    Ok(())
}

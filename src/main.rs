// Entrypoint for the CLI application.
// - Keeps `main` small: create an API client and hand it to the UI loop.
// - Returns `anyhow::Result` so prompt failures surface cleanly.

use dogdex_cli::{api::ApiClient, ui::main_menu};

fn main() -> anyhow::Result<()> {
    // Create an API client configured by the environment variable
    // `DOG_API_URL` or default to the public Dog CEO service. See
    // `api::ApiClient::from_env`.
    let api = ApiClient::from_env()?;

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(&api)?;
    Ok(())
}

// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive menu.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with the Dog CEO service
//   (breed directory, random breed/sub-breed images) behind the
//   `DogApi` trait.
// - `ui`: Implements the terminal menu loop and the presentation
//   helpers, delegating requests to `api`.
//
// Keeping this separation lets the flow logic run against a stub API
// in tests, with no network or terminal involved.
pub mod api;
pub mod ui;

// UI layer: provides the interactive menu using `dialoguer`.
// The functions are small and synchronous to make the flow easy to follow.
// Everything that decides what to print is kept out of `main_menu` so it
// can be exercised against a stub `DogApi` without a terminal.

use crate::api::{BreedDirectory, DogApi};
use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

/// How many breed names go on one line of the breed listing.
const BREEDS_PER_LINE: usize = 5;

/// The four menu actions. Anything that does not parse to one of these
/// is an invalid choice and leaves the loop where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListBreeds,
    BreedImage,
    SubBreedImage,
    Exit,
}

impl MenuChoice {
    /// Parse a raw input line into a menu choice. Surrounding whitespace
    /// is ignored; anything but "1".."4" is None.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::ListBreeds),
            "2" => Some(MenuChoice::BreedImage),
            "3" => Some(MenuChoice::SubBreedImage),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Case-fold a user-entered name so it can be matched against the
/// lowercase keys the API uses. Trim plus lowercase is the only
/// normalization applied anywhere.
pub fn fold_input(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Render the breed directory as sorted, comma-separated lines of five
/// names each. An empty directory produces no lines.
pub fn breed_lines(dir: &BreedDirectory) -> Vec<String> {
    let names: Vec<&str> = dir.keys().map(String::as_str).collect();
    names
        .chunks(BREEDS_PER_LINE)
        .map(|chunk| chunk.join(", "))
        .collect()
}

/// Fetch the breed directory, mapping any failure to the fixed error
/// message plus an empty directory. Callers treat empty as "no data
/// available", not as "zero breeds exist".
pub fn fetch_directory(api: &impl DogApi) -> BreedDirectory {
    match api.all_breeds() {
        Ok(dir) => dir,
        Err(_) => {
            println!("Error: could not fetch the breed list from the API.");
            BreedDirectory::new()
        }
    }
}

/// Look up the sub-breeds of `breed`. None when the breed is absent or
/// has no sub-breeds; option 3 reports both the same way.
pub fn sub_breeds<'a>(dir: &'a BreedDirectory, breed: &str) -> Option<&'a [String]> {
    match dir.get(breed) {
        Some(subs) if !subs.is_empty() => Some(subs),
        _ => None,
    }
}

/// Option 2: validate the breed against the directory and fetch a random
/// image for it. Returns the single line to print.
pub fn breed_image_line(api: &impl DogApi, dir: &BreedDirectory, breed: &str) -> String {
    if !dir.contains_key(breed) {
        return "Error: breed not found. Please try again.".into();
    }
    match api.random_breed_image(breed) {
        Ok(url) => format!("Random image URL for {}: {}", breed, url),
        Err(_) => "Error: could not fetch an image for that breed.".into(),
    }
}

/// Option 3, second half: validate the sub-breed against the breed's
/// sub-breed list and fetch a random image. Returns the line to print.
pub fn sub_breed_image_line(
    api: &impl DogApi,
    subs: &[String],
    breed: &str,
    sub_breed: &str,
) -> String {
    if !subs.iter().any(|s| s == sub_breed) {
        return "Error: sub-breed not found. Please try again.".into();
    }
    match api.random_sub_breed_image(breed, sub_breed) {
        Ok(url) => format!("Random image URL for {} - {}: {}", breed, sub_breed, url),
        Err(_) => "Error: could not fetch an image for that sub-breed.".into(),
    }
}

/// Main interactive menu. Receives the API client and runs a read/act
/// loop until the user chooses "4". Every error path prints its message
/// and falls through to the next iteration; only exit ends the loop.
pub fn main_menu(api: &impl DogApi) -> Result<()> {
    loop {
        println!();
        println!("What would you like to do?");
        println!("1. Show all breeds");
        println!("2. Get a random image from a breed");
        println!("3. Get a random image from a sub-breed");
        println!("4. Exit");

        // allow_empty lets a blank line fall through to the invalid
        // choice branch instead of dialoguer re-prompting on its own.
        let raw: String = Input::new()
            .with_prompt("Enter your choice (1-4)")
            .allow_empty(true)
            .interact_text()?;

        match MenuChoice::parse(&raw) {
            Some(MenuChoice::ListBreeds) => {
                let dir = with_spinner("Fetching breeds...", || fetch_directory(api));
                for line in breed_lines(&dir) {
                    println!("{}", line);
                }
            }
            Some(MenuChoice::BreedImage) => {
                let dir = with_spinner("Fetching breeds...", || fetch_directory(api));
                let breed = fold_input(&prompt_line("Enter breed name")?);
                let line = with_spinner("Fetching image...", || {
                    breed_image_line(api, &dir, &breed)
                });
                println!("{}", line);
            }
            Some(MenuChoice::SubBreedImage) => {
                let dir = with_spinner("Fetching breeds...", || fetch_directory(api));
                let breed = fold_input(&prompt_line("Enter breed name")?);
                match sub_breeds(&dir, &breed) {
                    None => {
                        println!("Error: breed has no sub-breeds or does not exist. Please try again.");
                    }
                    Some(subs) => {
                        println!("Available sub-breeds for {}: {}", breed, subs.join(", "));
                        let sub = fold_input(&prompt_line("Enter sub-breed name")?);
                        let line = with_spinner("Fetching image...", || {
                            sub_breed_image_line(api, subs, &breed, &sub)
                        });
                        println!("{}", line);
                    }
                }
            }
            Some(MenuChoice::Exit) => {
                println!("Goodbye!");
                break;
            }
            None => {
                println!("Invalid choice. Please select a number between 1 and 4.");
            }
        }
    }
    Ok(())
}

/// Prompt for one line of input.
fn prompt_line(msg: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(msg)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Show a spinner while `f` runs. The network calls block, so this is
/// the only feedback the user gets that a request is in flight.
fn with_spinner<T>(msg: &str, f: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(msg.to_string());
    let out = f();
    spinner.finish_and_clear();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir_of(entries: &[(&str, &[&str])]) -> BreedDirectory {
        entries
            .iter()
            .map(|(b, subs)| (b.to_string(), subs.iter().map(|s| s.to_string()).collect()))
            .collect()
    }

    #[test]
    fn menu_choices_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::ListBreeds));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::BreedImage));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::SubBreedImage));
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::Exit));
    }

    #[test]
    fn anything_else_is_invalid() {
        for input in ["", "0", "5", "12", "one", "exit", "1.0"] {
            assert_eq!(MenuChoice::parse(input), None, "input {:?}", input);
        }
    }

    #[test]
    fn fold_input_trims_and_lowercases() {
        assert_eq!(fold_input("  LABRADOR \n"), "labrador");
        assert_eq!(fold_input("Retriever"), "retriever");
        assert_eq!(fold_input("pug"), "pug");
    }

    #[test]
    fn breed_lines_groups_five_per_line_sorted() {
        let dir = dir_of(&[
            ("pug", &[]),
            ("akita", &[]),
            ("boxer", &[]),
            ("corgi", &["cardigan"]),
            ("dingo", &[]),
            ("eskimo", &[]),
            ("hound", &["afghan"]),
        ]);
        let lines = breed_lines(&dir);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "akita, boxer, corgi, dingo, eskimo");
        assert_eq!(lines[1], "hound, pug");
    }

    #[test]
    fn breed_lines_empty_directory_prints_nothing() {
        assert!(breed_lines(&BreedDirectory::new()).is_empty());
    }

    #[test]
    fn breed_lines_exact_multiple_of_five() {
        let dir = dir_of(&[
            ("a", &[]),
            ("b", &[]),
            ("c", &[]),
            ("d", &[]),
            ("e", &[]),
        ]);
        assert_eq!(breed_lines(&dir), vec!["a, b, c, d, e"]);
    }

    #[test]
    fn sub_breeds_absent_and_empty_are_none() {
        let dir = dir_of(&[("pug", &[]), ("hound", &["afghan", "basset"])]);
        assert!(sub_breeds(&dir, "pug").is_none());
        assert!(sub_breeds(&dir, "x-not-real").is_none());
        assert_eq!(
            sub_breeds(&dir, "hound").unwrap(),
            &["afghan".to_string(), "basset".to_string()]
        );
    }
}

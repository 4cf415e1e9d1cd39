use clap::Parser;
use wasm_bindgen::prelude::*;

mod board;

pub use board::BoardView;

/// Options read from the page URL hash, e.g. `index.html#-vv`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

impl Args {
    /// Parses `#-v&-v` style fragments; `#` and `&` separate arguments.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();

    // A mistyped hash should not keep the board from loading.
    let (args, hash_error) = match Args::from_location_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (
            Args::from_location_hash("").expect("empty hash always parses"),
            Some(err),
        ),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = hash_error {
        log::error!("ignoring URL hash {:?}: {}", location_hash, err);
    }

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("mounting board");
    yew::Renderer::<BoardView>::with_root(root).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_arguments_set_verbosity() {
        let args = Args::from_location_hash("#-vv").unwrap();
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));

        let args = Args::from_location_hash("#-v&-v&-v").unwrap();
        assert_eq!(args.verbose.log_level(), Some(log::Level::Debug));

        let args = Args::from_location_hash("").unwrap();
        assert_eq!(args.verbose.log_level(), Some(log::Level::Error));

        let args = Args::from_location_hash("#-q").unwrap();
        assert_eq!(args.verbose.log_level(), None);
    }

    #[test]
    fn unknown_hash_arguments_are_rejected() {
        assert!(Args::from_location_hash("#--seed&1").is_err());
    }
}

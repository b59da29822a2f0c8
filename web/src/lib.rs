use breaklock_core::SummaryConfig;
use clap::Parser;
use wasm_bindgen::prelude::*;

pub use dom::WebDom;
pub use screen::{Outcome, SummaryScreen, SummaryScreenProps};
pub use share::WindowShare;

mod dom;
mod screen;
mod share;

const CONFIG: &str = include_str!("../summary.toml");

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Language of the summary texts, the browser's by default
    #[arg(short, long)]
    lang: Option<String>,

    /// Preview a lost round instead of a won one
    #[arg(long)]
    fail: bool,

    /// Attempts shown in the preview
    #[arg(short, long, default_value_t = 1)]
    attempts: u32,
}

fn load_config() -> SummaryConfig {
    SummaryConfig::from_toml(CONFIG).unwrap_or_else(|err| {
        log::error!("bundled summary config is invalid: {}", err);
        SummaryConfig::default()
    })
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }

    let lang = args
        .lang
        .or_else(|| window().navigator().language())
        .unwrap_or_else(|| "en".to_string());
    log::debug!("lang: {}", lang);

    let root = document()
        .get_element_by_id("summary")
        .expect("Could not find id=\"summary\" element");

    let props = SummaryScreenProps {
        config: load_config(),
        lang: lang.into(),
        outcome: Some(Outcome::new(1, !args.fail, args.attempts)),
        on_action: Default::default(),
    };

    log::debug!("App started");
    yew::Renderer::<SummaryScreen>::with_root_and_props(root, props).render();
}

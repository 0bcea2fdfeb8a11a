mod cli;
mod commands;
mod logging;

use cli::{StubParams, build_cli};

fn main() {
    logging::init();

    let matches = build_cli().get_matches();
    let params = StubParams::from_matches(&matches);
    commands::stub::run(params.into());
}

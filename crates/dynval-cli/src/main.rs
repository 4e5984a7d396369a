mod cli;
mod commands;

use cli::{EvalParams, GenParams, KindsParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("gen", m)) => {
            let params = GenParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("eval", m)) => {
            let params = EvalParams::from_matches(m);
            commands::eval::run(params.into());
        }
        Some(("kinds", m)) => {
            let _params = KindsParams::from_matches(m);
            commands::kinds::run();
        }
        _ => unreachable!("clap should have caught this"),
    }
}

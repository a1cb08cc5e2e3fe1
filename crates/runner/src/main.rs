use opdiag_runner::{Command, PRESET_NAMES, parse_args, run};

fn print_help() {
    eprintln!(
        r#"opdiag - option payoff diagrams at expiration

USAGE:
    opdiag [OPTIONS]

OPTIONS:
    --config, -c <PATH>     Load strategy from JSON file
    --preset, -p <NAME>     Use a built-in strategy (default: straddle)
    --min <PRICE>           Lower bound of the price range (default: 0)
    --max <PRICE>           Upper bound of the price range (default: 200)
    --format, -f <FORMAT>   Output format: ascii (default) or json
    --help, -h              Print this help message

PRESETS:
    {}

ENVIRONMENT VARIABLES:
    RUST_LOG                Log level filter (default: info)

EXAMPLES:
    # Long straddle over 0..200
    opdiag

    # Iron condor, zoomed in
    opdiag --preset iron_condor --min 60 --max 140

    # Series for an external plotting tool
    opdiag --config strategy.json --format json > series.json
"#,
        PRESET_NAMES.join(", ")
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Command::Help) => {
            print_help();
            return;
        }
        Ok(Command::Run(options)) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_help();
            std::process::exit(2);
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = run(&options, stdout.lock()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

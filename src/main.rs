use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use sysdash::ui::dashboard::restore_terminal;
use sysdash::ui::{dimmed, error};

fn cli() -> Command {
    Command::new("sysdash")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Live terminal dashboard for CPU, memory, disk, network and temperature")
        .arg(
            Arg::new("interface")
                .short('i')
                .long("interface")
                .value_name("INDEX")
                .help("Network interface shown in the inspector panel")
                .value_parser(value_parser!(usize))
                .default_value("0"),
        )
        .arg(
            Arg::new("once")
                .long("once")
                .help("Render a single frame and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print one JSON snapshot per cycle instead of the dashboard")
                .action(ArgAction::SetTrue),
        )
}

/// Whether this run owns the terminal (and so has to restore it on exit)
fn draws_dashboard(matches: &ArgMatches) -> bool {
    !matches.get_flag("json")
}

fn main() {
    sysdash::init_logging();

    let matches = cli().get_matches();
    let dashboard = draws_dashboard(&matches);

    // The loop never ends on its own; put the terminal back before dying.
    // In JSON mode stdout carries only JSON lines.
    if let Err(e) = ctrlc::set_handler(move || {
        if dashboard {
            restore_terminal();
            println!();
        }
        std::process::exit(130);
    }) {
        log::warn!("Could not install Ctrl-C handler: {}", e);
    }

    if let Err(e) = sysdash::commands::monitor(&matches) {
        if dashboard {
            restore_terminal();
        }
        error(&format!("Error: {:#}", e));
        dimmed("Run with RUST_LOG=debug for more detail.");
        std::process::exit(1);
    }
}

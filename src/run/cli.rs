use anyhow::Result;

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args.get(1).map(String::as_str) {
        Some("--help" | "-h" | "help") => {
            print_usage();
            Ok(())
        }
        Some("--version" | "-V" | "version") => {
            println!("fintrack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(other) => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
        None => Ok(()),
    }
}

fn print_usage() {
    println!("Fintrack — in-memory personal finance tracker");
    println!();
    println!("Usage: fintrack [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Environment:");
    println!("  FINTRACK_USER                 Name recorded on new expenses (default: me)");
    println!("  FINTRACK_LOG                  Log filter (default: fintrack=info)");
    println!("  FINTRACK_LOG_DIR              Log directory (default: platform data dir)");
}

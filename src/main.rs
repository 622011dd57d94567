use triad::cli::{exit_code, run};

fn main() {
    let _ = enable_ansi_support::enable_ansi_support();
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("TRIAD_LOG", "warn"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run() {
        let code = exit_code(&e);
        if code == 1 {
            // User error: bad input file, missing data, incomplete archive
            eprintln!("Error: {:#}", e);
            std::process::exit(code);
        }

        eprintln!("Internal error: {}", e);
        // Show error chain if available
        let mut causes = e.chain().skip(1).peekable();
        if causes.peek().is_some() {
            eprintln!("\nCaused by:");
            for (indent, cause) in causes.enumerate() {
                eprintln!("{:indent$}  {}", "", cause, indent = indent + 1);
            }
        }
        std::process::exit(code);
    }
}

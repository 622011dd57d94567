// Render the triad man page to stdout: `generate-man > triad.1`

use clap::CommandFactory;
use triad::cli::Cli;

fn main() -> std::io::Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    let mut stdout = std::io::stdout();
    man.render(&mut stdout)
}

//! Renders manual pages for the binary and each of its subcommands.

use clap::{Command, CommandFactory};
use clap_mangen::Man;
use std::path::Path;
use std::{env, fs, io};

#[path = "src/cli.rs"]
#[expect(
    dead_code,
    reason = "Only type definitions are needed for man page generation"
)]
mod cli;

const MAN_DIR: &str = "target/generated-man";

fn render(dir: &Path, page: &str, cmd: Command) -> io::Result<()> {
    let mut buf = Vec::new();
    Man::new(cmd).title(page.to_uppercase()).render(&mut buf)?;
    fs::write(dir.join(format!("{page}.1")), buf)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-env-changed=CARGO_PKG_VERSION");

    let package = env::var("CARGO_PKG_NAME")?;
    let cmd = cli::Cli::command();
    if cmd.get_name() != package {
        return Err(format!(
            "CLI name '{}' differs from package name '{package}'",
            cmd.get_name()
        )
        .into());
    }

    let dir = Path::new(MAN_DIR);
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;

    // One page per subcommand, named the way `man locale-match-resolve`
    // expects.
    for sub in cmd.get_subcommands() {
        render(dir, &format!("{package}-{}", sub.get_name()), sub.clone())?;
    }
    render(dir, &package, cmd)?;
    Ok(())
}

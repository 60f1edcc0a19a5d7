use clap::Parser;
use colored::*;
use wd_migrate::cli::args::Args;
use wd_migrate::cli::commands;

fn main() {
    let args = Args::parse();
    commands::setup_logging(&args);

    match commands::run(&args) {
        Ok(report) => {
            if !args.quiet {
                println!(
                    "{} {} rows migrated, {} rows emitted in {}",
                    "Done:".bright_green().bold(),
                    report.rows,
                    report.rows_emitted,
                    indicatif::HumanDuration(report.elapsed)
                );
            }
        }
        Err(e) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), anyhow::Error::new(e));
            std::process::exit(1);
        }
    }
}

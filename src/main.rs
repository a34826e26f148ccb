use clap::Parser;
use parca_push::cli::Flags;

#[tokio::main]
async fn main() {
    let flags = match Flags::try_parse() {
        Ok(flags) => flags,
        Err(err) => {
            // Usage goes to stderr (stdout for help); with that stream gone
            // the exit code is all that is left to report.
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    colog::default_builder().filter_level(flags.log_level).init();

    if let Err(err) = parca_push::run(flags).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

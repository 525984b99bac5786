use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod address;

#[derive(Parser, Debug)]
#[command(name = "wasm-sysaddr")]
#[command(
    about = "Convert a Syscoin address between legacy P2PKH (S...) and segwit v0 P2WPKH (sys1q...)",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// The Syscoin address to convert
    address: String,
}

fn init_tracing() {
    // RUST_LOG=debug shows what was detected; stdout stays reserved for the address
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Exit status for a failed parse: help and version are not failures, every usage
/// error exits with 1 rather than clap's 2
fn parse_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // help and version go to stdout, usage errors to stderr
            let _ = e.print();
            return ExitCode::from(parse_exit_code(&e));
        }
    };

    match address::handle_convert(&cli.address) {
        Ok(converted) => {
            println!("{}", converted);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_address_argument() {
        let cli = Cli::try_parse_from(["wasm-sysaddr", "SPd281HLz89nvKZ1js6eeefD3YsjcP78AX"])
            .unwrap();
        assert_eq!(cli.address, "SPd281HLz89nvKZ1js6eeefD3YsjcP78AX");
    }

    #[test]
    fn test_missing_address() {
        let err = Cli::try_parse_from(["wasm-sysaddr"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_too_many_arguments() {
        let err = Cli::try_parse_from(["wasm-sysaddr", "a", "b"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help() {
        let err = Cli::try_parse_from(["wasm-sysaddr", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(parse_exit_code(&err), 0);
    }

    #[test]
    fn test_usage_errors_exit_with_one() {
        for args in [
            vec!["wasm-sysaddr"],
            vec!["wasm-sysaddr", "a", "b"],
            vec!["wasm-sysaddr", "--bogus", "a"],
        ] {
            let err = Cli::try_parse_from(args.iter().copied()).unwrap_err();
            assert_eq!(parse_exit_code(&err), 1, "{:?}", args);
        }
    }

    #[test]
    fn test_version_is_not_a_failure() {
        let err = Cli::try_parse_from(["wasm-sysaddr", "--version"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), 0);
    }
}

//! idxgather CLI - Print a random matrix and its indexed gather transform.
use clap::{Parser, ValueEnum};
use idxgather::display::{delimiter, render_matrix};
use idxgather::pipeline::{self, TransformConfig};
use idxgather::{LocalTransport, Transport, TransformError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "idxgather")]
#[command(about = "Gather a diagonal-biased selection of a random matrix through an indexed descriptor")]
struct Cli {
    /// Number of matrix rows (positive integer)
    #[arg(value_parser = parse_rows)]
    rows: usize,

    /// Number of matrix columns (positive integer)
    #[arg(value_parser = parse_cols)]
    columns: usize,

    /// Seed for the random matrix
    #[arg(short, long)]
    seed: Option<u64>,

    /// Carrier of the flattened matrix
    #[arg(short, long, value_enum, default_value_t = TransportKind::Local)]
    transport: TransportKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TransportKind {
    /// In-process gather
    Local,
    /// Mpi send-receive to the own rank (requires feature `mpi`)
    Mpi,
}

/// Accept plain decimal digits only, zero excluded
fn parse_dimension(value: &str, what: &str) -> Result<usize, TransformError> {
    let invalid = || TransformError::ArgumentError(format!("Invalid number of {}", what));
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(invalid()),
    }
}

fn parse_rows(value: &str) -> Result<usize, TransformError> {
    parse_dimension(value, "rows")
}

fn parse_cols(value: &str) -> Result<usize, TransformError> {
    parse_dimension(value, "columns")
}

fn make_transport(kind: TransportKind) -> anyhow::Result<Box<dyn Transport>> {
    match kind {
        TransportKind::Local => Ok(Box::new(LocalTransport)),
        #[cfg(feature = "mpi")]
        TransportKind::Mpi => Ok(Box::new(idxgather::transport::MpiTransport::initialize()?)),
        #[cfg(not(feature = "mpi"))]
        TransportKind::Mpi => Err(TransformError::Transport(
            "idxgather was built without the `mpi` feature".to_string(),
        )
        .into()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = TransformConfig::new(cli.rows, cli.columns);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    tracing::info!(?config, transport = ?cli.transport, "starting transform");

    let transport = make_transport(cli.transport)?;
    let mut source = config.source();
    let report = pipeline::run(&config, &mut source, transport.as_ref())?;

    print!("{}", render_matrix(&report.matrix));
    println!("{}", delimiter(config.cols));
    print!("{}", report.grid);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_rows("12"), Ok(12));
        assert_eq!(
            parse_rows("0"),
            Err(TransformError::ArgumentError("Invalid number of rows".to_string()))
        );
        assert!(parse_cols("-3").is_err());
        assert!(parse_cols("+3").is_err());
        assert!(parse_cols("3.5").is_err());
        assert!(parse_cols("").is_err());
        assert!(parse_cols("99999999999999999999999999").is_err());
    }

    #[test]
    fn test_cli_parses_positionals() {
        let cli = Cli::try_parse_from(["idxgather", "3", "4", "--seed", "9"]).unwrap();
        assert_eq!((cli.rows, cli.columns, cli.seed), (3, 4, Some(9)));
        assert_eq!(cli.transport, TransportKind::Local);
    }

    #[test]
    fn test_cli_rejects_missing_and_invalid() {
        assert!(Cli::try_parse_from(["idxgather", "3"]).is_err());
        assert!(Cli::try_parse_from(["idxgather", "3", "x"]).is_err());
        assert!(Cli::try_parse_from(["idxgather", "0", "2"]).is_err());
    }
}

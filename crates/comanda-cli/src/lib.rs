//! Comanda CLI
//!
//! Loads comandas from JSON and runs the grouping engine or the mass-update
//! planner over them.
//!
//! ```text
//! comanda group --input comandas.json --by ruta,cliente
//! comanda plan --input comandas.json --estado e5:"En distribución" --camion t1:Iveco
//! comanda regression --input comandas.json --next-status e1:Pendiente
//! ```

#![warn(unreachable_pub)]

pub mod app;
pub mod config;
pub mod input;
pub mod report;

pub use app::{cli, log_level, run, EXIT_REGRESSION};
pub use config::{AppConfig, ConfigError};

use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber; `RUST_LOG` wins over `default_filter`
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Flush `out` and return the process exit code: `code`, or 1 when the
/// report could not be written
pub fn finish(code: i32, out: &mut impl Write) -> i32 {
    match out.flush() {
        Ok(()) => code,
        Err(err) => {
            tracing::error!("cannot write output: {err}");
            eprintln!("error: cannot write output: {err}");
            1
        }
    }
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn finish_keeps_code_after_flush() {
        assert_eq!(finish(0, &mut Vec::new()), 0);
        assert_eq!(finish(2, &mut Vec::new()), 2);
    }

    #[test]
    fn finish_fails_when_flush_fails() {
        assert_eq!(finish(0, &mut BrokenPipe), 1);
        assert_eq!(finish(2, &mut BrokenPipe), 1);
    }
}

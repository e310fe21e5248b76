use comanda_cli::{cli, finish, init_logging, log_level, run};

fn main() {
    let matches = cli().get_matches();
    init_logging(log_level(&matches));

    let mut stdout = std::io::stdout().lock();
    let code = match run(&matches, &mut stdout) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("error: {err:#}");
            1
        }
    };
    std::process::exit(finish(code, &mut stdout));
}

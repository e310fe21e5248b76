//! Command definitions and dispatch

use crate::config::AppConfig;
use crate::input::load_comandas;
use crate::report::{render_groups, render_plan, PlanReport, RegressionReport};
use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use comanda_grouping::{build_groups, Dimension};
use comanda_logistics::{build_mass_update_plan, Choice, MassUpdateSelections};
use std::io::Write;
use std::path::PathBuf;

/// Exit code when the selected status would move comandas backward
pub const EXIT_REGRESSION: i32 = 2;

fn input_arg() -> Arg {
    Arg::new("input")
        .long("input")
        .short('i')
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON file with the comandas (`-` for stdin)")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

fn choice_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("ID[:LABEL]")
        .value_parser(value_parser!(Choice))
        .help(help)
}

/// Command-line definition
#[must_use]
pub fn cli() -> Command {
    let dimensions = Dimension::ALL.map(Dimension::as_str).join(", ");
    Command::new("comanda")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Group comandas and plan dispatch mass updates")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value("warn")
                .help("Log filter when RUST_LOG is not set"),
        )
        .subcommand(
            Command::new("group")
                .about("Group comandas into a tree")
                .arg(input_arg())
                .arg(
                    Arg::new("by")
                        .long("by")
                        .value_delimiter(',')
                        .help(format!("Grouping dimensions, in order ({dimensions})")),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("plan")
                .about("Plan a mass update of status, driver, truck and distribution point")
                .arg(input_arg())
                .arg(choice_arg("estado", "Next status"))
                .arg(choice_arg("camionero", "Driver to assign"))
                .arg(choice_arg("camion", "Truck to assign"))
                .arg(
                    Arg::new("punto")
                        .long("punto")
                        .value_name("TEXT")
                        .help("Distribution point to assign"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("regression")
                .about("Check whether a status would move comandas backward")
                .arg(input_arg())
                .arg(
                    Arg::new("next-status")
                        .long("next-status")
                        .required(true)
                        .value_name("ID[:LABEL]")
                        .value_parser(value_parser!(Choice))
                        .help("Proposed status"),
                )
                .arg(json_arg()),
        )
}

/// Log filter requested on the command line
#[must_use]
pub fn log_level(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("log-level")
        .map_or("warn", String::as_str)
}

/// Run the selected subcommand, writing its report to `out`
///
/// Returns the process exit code.
pub fn run(matches: &ArgMatches, out: &mut impl Write) -> Result<i32> {
    let config_path = matches.get_one::<PathBuf>("config").map(PathBuf::as_path);
    let config = AppConfig::load_or_default(config_path)?;

    match matches.subcommand() {
        Some(("group", args)) => run_group(args, &config, out),
        Some(("plan", args)) => run_plan(args, &config, out),
        Some(("regression", args)) => run_regression(args, &config, out),
        _ => anyhow::bail!("no subcommand given"),
    }
}

fn input_path(args: &ArgMatches) -> Result<&PathBuf> {
    args.get_one::<PathBuf>("input")
        .context("--input is required")
}

fn run_group(args: &ArgMatches, config: &AppConfig, out: &mut impl Write) -> Result<i32> {
    let comandas = load_comandas(input_path(args)?)?;
    let dimensions: Vec<String> = match args.get_many::<String>("by") {
        Some(values) => values.cloned().collect(),
        None => config.default_dimensions.clone(),
    };
    let groups = build_groups(&comandas, &dimensions);

    if args.get_flag("json") {
        serde_json::to_writer_pretty(&mut *out, &groups)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_groups(&groups))?;
    }
    Ok(0)
}

fn run_plan(args: &ArgMatches, config: &AppConfig, out: &mut impl Write) -> Result<i32> {
    let comandas = load_comandas(input_path(args)?)?;
    let selections = MassUpdateSelections {
        estado: args.get_one::<Choice>("estado").cloned(),
        camionero: args.get_one::<Choice>("camionero").cloned(),
        camion: args.get_one::<Choice>("camion").cloned(),
        punto_distribucion: args.get_one::<String>("punto").cloned(),
    };
    if selections.is_empty() {
        tracing::warn!("no field selected, the plan will be empty");
    }

    let plan = build_mass_update_plan(&comandas, &selections);
    let next_status = selections.estado.as_ref().map(Choice::to_estado);
    let regression = next_status
        .as_ref()
        .is_some_and(|next| config.status.detect_regression(&comandas, next));
    if regression {
        tracing::warn!("selected status regresses dispatched comandas");
    }

    if args.get_flag("json") {
        let report = PlanReport {
            plan: &plan,
            regression,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_plan(&plan, regression))?;
    }
    Ok(if regression { EXIT_REGRESSION } else { 0 })
}

fn run_regression(args: &ArgMatches, config: &AppConfig, out: &mut impl Write) -> Result<i32> {
    let comandas = load_comandas(input_path(args)?)?;
    let next = args
        .get_one::<Choice>("next-status")
        .context("--next-status is required")?;
    let next_status = next.to_estado();
    let regression = config.status.detect_regression(&comandas, &next_status);

    if args.get_flag("json") {
        let report = RegressionReport {
            next_status: &next.id,
            regression,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else if regression {
        writeln!(
            out,
            "retroceso detectado hacia {}",
            next.label().unwrap_or(&next.id)
        )?;
    } else {
        writeln!(out, "sin retrocesos")?;
    }
    Ok(if regression { EXIT_REGRESSION } else { 0 })
}

extern crate clap;
extern crate colored;
extern crate log;
extern crate log_panics;
extern crate simple_logging;

mod reporting;
pub use self::reporting::*;

use log::LevelFilter;
use std::process::exit;
use std::str::FromStr;
use variance::semantics::{Analysis, Variance, VarianceChecker};
use variance::{BasicReporter, Diagnostic, Manifest, Reporter, Source};

const DEFAULT_MANIFESTS: &str = "**/*.variance.yml";

fn log_to_stderr() {
    log_panics::init();
    #[cfg(debug_assertions)]
    simple_logging::log_to_stderr(LevelFilter::Debug);
    #[cfg(not(debug_assertions))]
    simple_logging::log_to_stderr(LevelFilter::Error);
}

fn main() -> Result<(), clap::Error> {
    let files = clap::Arg::with_name("files")
        .takes_value(true)
        .multiple(true)
        .value_name("FILES");

    let mut app = clap::App::new("variance").subcommands(vec![
        clap::SubCommand::with_name("check")
            .about("Checks declared interfaces and bindings")
            .arg(
                clap::Arg::with_name("plain")
                    .long("plain")
                    .help("Prints diagnostics without formatting"),
            )
            .arg(files.clone().index(1)),
        clap::SubCommand::with_name("query")
            .about("Decides whether I<SOURCE> can be used where I<TARGET> is expected")
            .arg(
                clap::Arg::with_name("variance")
                    .long("variance")
                    .takes_value(true)
                    .possible_values(&[
                        "out",
                        "in",
                        "inout",
                        "covariant",
                        "contravariant",
                        "invariant",
                    ])
                    .default_value("inout"),
            )
            .arg(
                clap::Arg::with_name("source")
                    .required(true)
                    .index(1)
                    .value_name("SOURCE"),
            )
            .arg(
                clap::Arg::with_name("target")
                    .required(true)
                    .index(2)
                    .value_name("TARGET"),
            )
            .arg(files.index(3)),
    ]);
    let cli = app.clone().get_matches();

    if let None = cli.subcommand_name() {
        app.print_help()?;
        println!();
        return Ok(());
    }

    log_to_stderr();

    match cli.subcommand() {
        ("check", Some(matches)) => {
            let (analysis, mut diagnostics) = load(matches.values_of("files"));
            diagnostics.extend(analysis.check());

            if matches.is_present("plain") {
                <BasicReporter as Reporter>::report(&diagnostics);
            } else {
                <PrettyReporter as Reporter>::report(&diagnostics);
            }

            if Diagnostic::failed(&diagnostics) {
                exit(1);
            }
        }

        ("query", Some(matches)) => {
            let (analysis, diagnostics) = load(matches.values_of("files"));
            if Diagnostic::failed(&diagnostics) {
                <PrettyReporter as Reporter>::report(&diagnostics);
                exit(1);
            }

            let variance = matches
                .value_of("variance")
                .and_then(|v| Variance::from_str(v).ok())
                .unwrap_or_default();

            let find = |name: Option<&str>| {
                let name = name.unwrap_or_default();
                match analysis.hierarchy.get(name) {
                    Some(type_) => type_.clone(),
                    None => {
                        eprintln!("`{}` is undefined.", name);
                        exit(1);
                    }
                }
            };
            let source = find(matches.value_of("source"));
            let target = find(matches.value_of("target"));

            match VarianceChecker::is_assignable(variance, &source, &target) {
                Ok(assignable) => println!("{}", assignable),
                Err(error) => {
                    eprintln!("{}", error);
                    exit(1);
                }
            }
        }

        _ => eprintln!("{}", cli.usage()),
    }

    Ok(())
}

fn load<'a, I: Iterator<Item = &'a str>>(files: Option<I>) -> (Analysis, Vec<Diagnostic>) {
    let patterns = files
        .map(|f| f.collect())
        .unwrap_or_else(|| vec![DEFAULT_MANIFESTS]);

    let mut sources = vec![];
    for pattern in patterns {
        if pattern == "-" {
            match Source::stdin() {
                Ok(source) => sources.push(source),
                Err(error) => {
                    eprintln!("failed to read stdin: {}", error);
                    exit(1);
                }
            }
            continue;
        }

        match Source::files(pattern) {
            Ok(found) => sources.extend(found),
            Err(error) => {
                eprintln!("failed to read {}: {}", pattern, error);
                exit(1);
            }
        }
    }

    log::info!("Loading {} manifests", sources.len());
    Manifest::analyze(&sources)
}

use clap::{value_parser, Arg, ArgMatches, ColorChoice, Command};

use std::str::FromStr;

use iri_query::prelude::{ChapmanParameters, DensityUnit};

#[derive(Debug, Clone, Default)]
pub struct Cli {
    matches: ArgMatches,
}

impl Cli {
    pub fn new() -> Self {
        Self {
            matches: {
                Command::new("iri-query")
                    .author("Guillaume W. Bres, <guillaume.bressaix@gmail.com>")
                    .version(env!("CARGO_PKG_VERSION"))
                    .about("Electron density queries, one request (9 lines) per answer")
                    .color(ColorChoice::Auto)
                    .arg(
                        Arg::new("external")
                            .short('x')
                            .long("external")
                            .value_name("COMMAND")
                            .help("Evaluate with an external IRI worker (program and arguments)"),
                    )
                    .arg(
                        Arg::new("unit")
                            .short('u')
                            .long("unit")
                            .value_name("cm3|m3")
                            .value_parser(DensityUnit::from_str)
                            .help("Density unit of the answers (default: cm3)"),
                    )
                    .next_help_heading("Chapman model")
                    .arg(
                        Arg::new("hmf2")
                            .long("hmf2")
                            .value_name("KM")
                            .value_parser(value_parser!(f64))
                            .help("F2 layer peak altitude"),
                    )
                    .arg(
                        Arg::new("scale-height")
                            .long("scale-height")
                            .value_name("KM")
                            .value_parser(value_parser!(f64))
                            .help("Neutral scale height"),
                    )
                    .arg(
                        Arg::new("f107")
                            .long("f107")
                            .value_name("SFU")
                            .value_parser(value_parser!(f64))
                            .help("F10.7 solar radio flux"),
                    )
                    .get_matches()
            },
        }
    }

    /// Returns external worker (program, arguments), if requested
    pub fn external_command(&self) -> Option<(String, Vec<String>)> {
        let command = self.matches.get_one::<String>("external")?;
        let mut items = command.split_ascii_whitespace().map(|s| s.to_string());
        let program = items.next()?;
        Some((program, items.collect()))
    }

    /// Returns [DensityUnit] to use, based on user command line
    pub fn density_unit(&self) -> DensityUnit {
        self.matches
            .get_one::<DensityUnit>("unit")
            .copied()
            .unwrap_or_default()
    }

    /// Returns [ChapmanParameters], customized by the command line
    pub fn chapman_parameters(&self) -> ChapmanParameters {
        let mut params = ChapmanParameters::default();
        if let Some(hmf2) = self.matches.get_one::<f64>("hmf2") {
            params.hmf2_km = *hmf2;
        }
        if let Some(h) = self.matches.get_one::<f64>("scale-height") {
            params.scale_height_km = *h;
        }
        if let Some(f107) = self.matches.get_one::<f64>("f107") {
            params.f107_sfu = *f107;
        }
        params
    }
}

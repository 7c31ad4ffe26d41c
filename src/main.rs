use std::fs::File;
use std::io::{stdin, stdout, BufRead, BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{App, Arg, ArgMatches};
use tracing::{debug, info, Level};

use titlecase::{TitleCaseOptions, TitleCaser};

fn main() -> Result<()> {
    let matches = App::new("titlecase")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Aleksei Voronov <despawn@gmail.com>")
        .about("Convert sentences into Title Case, one sentence per line.")
        .arg(
            Arg::with_name("exception")
                .short("e")
                .long("exception")
                .value_name("WORD")
                .help("Word that must not be title cased. Can be given multiple times.")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name("case-sensitive")
                .long("case-sensitive")
                .help("Match exceptions with their exact casing and keep that casing."),
        )
        .arg(
            Arg::with_name("skip-capitals")
                .short("s")
                .long("skip-capitals")
                .help("Leave fully capitalized words, such as acronyms, untouched."),
        )
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("JSON file with options. Command line flags are applied on top of it.")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("FILE")
                .help("File containing sentences to convert, one sentence per line. stdin by default.")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("File into which converted sentences will be written. stdout by default.")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log what is going on to stderr."),
        )
        .get_matches();

    let level = if matches.is_present("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let options = build_options(&matches)?;
    debug!(?options, "resolved options");

    do_title_case(
        TitleCaser::new(options),
        matches.value_of("input"),
        matches.value_of("output"),
    )
}

fn build_options(matches: &ArgMatches) -> Result<TitleCaseOptions> {
    let mut options = match matches.value_of("config") {
        Some(filename) => TitleCaseOptions::load_from_file(filename)
            .with_context(|| format!("cannot load options from {}", filename))?,
        None => TitleCaseOptions::default(),
    };

    if let Some(words) = matches.values_of("exception") {
        options.exceptions.extend(words.map(str::to_owned));
    }
    if matches.is_present("case-sensitive") {
        options.case_sensitive_exceptions = true;
    }
    if matches.is_present("skip-capitals") {
        options.skip_capital_words = true;
    }

    Ok(options)
}

fn do_title_case(
    caser: TitleCaser,
    input_filename: Option<&str>,
    output_filename: Option<&str>,
) -> Result<()> {
    let input: Box<dyn BufRead> = match input_filename {
        Some(filename) => Box::new(BufReader::new(
            File::open(filename).with_context(|| format!("cannot open {}", filename))?,
        )),
        None => Box::new(BufReader::new(stdin())),
    };

    let mut output: Box<dyn Write> = match output_filename {
        Some(filename) => Box::new(BufWriter::new(
            File::create(filename).with_context(|| format!("cannot create {}", filename))?,
        )),
        None => Box::new(stdout()),
    };

    let mut count = 0;
    for sentence in input.lines() {
        let converted = caser.convert(&sentence.context("cannot read input")?);
        output.write_all(converted.as_bytes())?;
        output.write_all(b"\n")?;
        count += 1;
    }
    output.flush()?;

    info!(sentences = count, "done");
    Ok(())
}

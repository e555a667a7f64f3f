use clap::Parser;
use log::{error, info};
use org_abbrev::{
    abbreviate_title, abbreviate_with_custom_config, AbbreviatorConfig, Error,
    DEFAULT_LANGUAGE, DEFAULT_MIN_ACRONYM_WORD_COUNT,
};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(version, about = "Abbreviate organization names (or job titles) read from stdin")]
struct Cli {
    /// Language code selecting the suffix and noise-word tables
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    lang: String,

    /// Only keep acronyms already present in the input
    #[arg(long, default_value_t = false)]
    no_acronym: bool,

    /// Fewest words a name needs before an acronym is proposed
    #[arg(long, default_value_t = DEFAULT_MIN_ACRONYM_WORD_COUNT)]
    min_words: usize,

    /// Read `name,lang` CSV records and write `name,lang,abbreviation`
    #[arg(long, default_value_t = false)]
    csv: bool,

    /// Abbreviate job titles instead of organization names
    #[arg(long, default_value_t = false)]
    title: bool,
}

impl Cli {
    fn abbreviate(&self, text: &str, lang: &str) -> String {
        if self.title {
            return abbreviate_title(text, lang);
        }

        let config = AbbreviatorConfig {
            lang,
            propose_acronym: !self.no_acronym,
            min_acronym_word_count: self.min_words,
        };

        abbreviate_with_custom_config(text, &config)
    }
}

fn run_lines(cli: &Cli) -> Result<(), Error> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        writeln!(stdout, "{}", cli.abbreviate(&line, &cli.lang))?;
    }

    Ok(())
}

fn run_csv(cli: &Cli) -> Result<(), Error> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(io::stdin().lock());
    let mut writer = csv::Writer::from_writer(io::stdout().lock());

    writer.write_record(["name", "lang", "abbreviation"])?;

    let mut count = 0;
    for record in reader.records() {
        let record = record?;

        let name = record
            .get(0)
            .ok_or_else(|| Error::ParserError(format!("Missing name column: {:?}", record)))?;
        let lang = record
            .get(1)
            .filter(|lang| !lang.is_empty())
            .unwrap_or(&cli.lang);

        writer.write_record([name, lang, cli.abbreviate(name, lang).as_str()])?;
        count += 1;
    }

    writer.flush()?;
    info!("Abbreviated {} records", count);

    Ok(())
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let cli = Cli::parse();

    let result = if cli.csv { run_csv(&cli) } else { run_lines(&cli) };

    if let Err(e) = result {
        error!("Error abbreviating input: {}", e);
        std::process::exit(1);
    }
}

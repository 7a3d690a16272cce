use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use doorquotelib::{
    aggregate::aggregate,
    config::QuoteConfig,
    dimension::parse_inches,
    error::{QuoteError, Result},
    formats::{csv::Csv, text::ShareText, xml::QuotationXml},
    model::{CoatingKind, NewDoorEntry, PricingMode},
    quotation::{format_rupees, format_square_feet, Customer, Quotation},
    rounding::round_dimensions_traced,
    store::{CsvFileStore, EntryStore},
    traits::{RenderQuotation, WriteEntries},
};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Coating {
    Single,
    Double,
    DoubleSagwan,
    Laminate,
}

impl From<Coating> for CoatingKind {
    fn from(c: Coating) -> Self {
        match c {
            Coating::Single => CoatingKind::Single,
            Coating::Double => CoatingKind::Double,
            Coating::DoubleSagwan => CoatingKind::DoubleSagwan,
            Coating::Laminate => CoatingKind::Laminate,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    /// Все виды покрытия для каждой двери
    All,
    /// Только выбранные покрытия
    Selected,
}

impl From<Mode> for PricingMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::All => PricingMode::AllKinds,
            Mode::Selected => PricingMode::Selected,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum DocFmt {
    Text,
    Xml,
}

#[derive(Parser, Debug)]
#[command(name = "doorquote", version, about = "Сметы на покрытие дверей")]
struct Cli {
    /// Файл настроек (TOML)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Файл записей (CSV); по умолчанию из настроек
    #[arg(short = 's', long = "store", global = true)]
    store: Option<PathBuf>,

    /// Режим оценки; по умолчанию из настроек
    #[arg(long = "mode", value_enum, global = true)]
    mode: Option<Mode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Добавить дверь: высота и ширина, например "79 1/4" "30 3/8"
    Add {
        height: String,
        width: String,
        /// Вид покрытия (можно несколько раз)
        #[arg(short = 'k', long = "coating", value_enum)]
        coatings: Vec<Coating>,
    },
    /// Показать все записи
    List,
    /// Удалить запись по id
    Delete { id: u64 },
    /// Удалить все записи
    Clear,
    /// Итоги по всем записям
    Totals,
    /// Показать округление без сохранения
    Round { width: String, height: String },
    /// Сформировать смету
    Quote {
        #[arg(long)]
        customer: String,
        #[arg(long)]
        mobile: String,
        #[arg(long = "format", value_enum, default_value = "text")]
        format: DocFmt,
        /// Дата сметы (YYYY-MM-DD), по умолчанию сегодня
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Выходной файл (по умолчанию stdout)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
    /// Выгрузить записи в CSV
    Export {
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
}

fn output(path: Option<PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    })
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => QuoteConfig::from_file(path)?,
        None => QuoteConfig::default(),
    };
    if let Some(store) = cli.store {
        config.store = store;
    }
    if let Some(mode) = cli.mode {
        config.mode = mode.into();
    }
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Round { width, height } => {
            let (pair, rule) = round_dimensions_traced(parse_inches(&width)?, parse_inches(&height)?);
            println!("{}\" x {}\" -> {} ({rule:?})", height.trim(), width.trim(), pair);
        }
        Command::Add { height, width, coatings } => {
            let mut store = CsvFileStore::open(&config.store)?;
            let new = NewDoorEntry {
                height: parse_inches(&height)?,
                width: parse_inches(&width)?,
                coatings: coatings.into_iter().map(CoatingKind::from).collect(),
            };
            let e = store.create(new)?;
            println!(
                "#{}: {}\" x {}\" -> {} = {} sq.ft",
                e.id,
                e.height_display(),
                e.width_display(),
                e.rounded,
                format_square_feet(e.square_feet)
            );
        }
        Command::List => {
            let store = CsvFileStore::open(&config.store)?;
            for e in store.list()? {
                println!(
                    "#{}\t{}\" x {}\"\t{}\t{} sq.ft\t{}",
                    e.id,
                    e.height_display(),
                    e.width_display(),
                    e.rounded,
                    format_square_feet(e.square_feet),
                    e.coatings.to_codes()
                );
            }
        }
        Command::Delete { id } => {
            CsvFileStore::open(&config.store)?.delete(id)?;
        }
        Command::Clear => {
            CsvFileStore::open(&config.store)?.delete_all()?;
        }
        Command::Totals => {
            let entries = CsvFileStore::open(&config.store)?.list()?;
            let totals = aggregate(&entries, &config.rates, config.mode);
            println!(
                "Doors: {}  Total: {} sq.ft",
                totals.entries,
                format_square_feet(totals.total_square_feet)
            );
            for kind in CoatingKind::ALL {
                println!(
                    "{:<32} @ {:>4}/sq.ft  Rs.{}",
                    kind.label(),
                    config.rates.rate(kind).to_string(),
                    format_rupees(totals.amount(kind))
                );
            }
            if let Some(total) = totals.grand_total {
                println!("Grand total: Rs.{}", format_rupees(total));
            }
        }
        Command::Quote { customer, mobile, format, date, output: out } => {
            let entries = CsvFileStore::open(&config.store)?.list()?;
            let q = Quotation::assemble(
                Customer { name: customer, mobile },
                date.unwrap_or_else(|| Local::now().date_naive()),
                &entries,
                &config.rates,
                config.mode,
            );
            let mut writer = output(out)?;
            match format {
                DocFmt::Text => ShareText::render(&mut writer, &q),
                DocFmt::Xml => QuotationXml::render(&mut writer, &q),
            }?;
            writer.flush().map_err(QuoteError::from)?;
        }
        Command::Export { output: out } => {
            let entries = CsvFileStore::open(&config.store)?.list()?;
            let mut writer = output(out)?;
            Csv::write(&mut writer, &entries)?;
            writer.flush().map_err(QuoteError::from)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use doorquotelib::model::CoatingSelection;

    #[test]
    fn coating_flags_map_to_kinds() {
        let sel: CoatingSelection = [Coating::Laminate, Coating::Single]
            .into_iter()
            .map(CoatingKind::from)
            .collect();
        assert_eq!(sel.to_codes(), "single|laminate");
    }

    #[test]
    fn cli_parses_fraction_dimensions() {
        let cli = Cli::try_parse_from(["doorquote", "add", "79 1/4", "30 3/8", "-k", "double-sagwan"])
            .expect("parse cli");
        match cli.command {
            Command::Add { height, width, coatings } => {
                assert_eq!(height, "79 1/4");
                assert_eq!(width, "30 3/8");
                assert!(matches!(coatings.as_slice(), [Coating::DoubleSagwan]));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}

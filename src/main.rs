use clap::{Parser, Subcommand};
use oneinten::{commander, config, touchosc, Mixer, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(about = "Generate TouchOSC and OSC Commander mixer layouts.")]
pub struct Args {
    #[arg(long, default_value = "info", help = "Maximum log level")]
    log_level: Level,

    #[arg(long, help = "JSON file describing tracks and pages")]
    mixer: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a zipped TouchOSC layout
    Touchosc {
        #[arg(long, help = "Existing .touchosc file whose first page is used as template")]
        template: Option<PathBuf>,

        #[arg(short, long, default_value = touchosc::DEFAULT_OUTPUT)]
        output: PathBuf,

        #[arg(short, long, help = "Do not print the layout to stdout")]
        quiet: bool,
    },

    /// Write OSC Commander layouts, one per page
    Commander {
        #[arg(long, help = "Only write the layout of this page")]
        page: Option<String>,

        #[arg(short, long, default_value = commander::DEFAULT_OUTPUT, help = "Output file for --page")]
        output: PathBuf,

        #[arg(long, default_value = ".", help = "Output directory when writing all pages")]
        out_dir: PathBuf,

        #[arg(short, long, help = "Do not print the layouts to stdout")]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {e}");
    }

    info!("Starting oneinten > version: {}", VERSION.unwrap_or("?"));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mixer = config::load_mixer(args.mixer.as_deref())?;

    match args.command {
        Command::Touchosc {
            template,
            output,
            quiet,
        } => write_touchosc(&mixer, template.as_deref(), &output, quiet),
        Command::Commander {
            page,
            output,
            out_dir,
            quiet,
        } => match page {
            Some(page) => {
                let (bank, page) = mixer.find_bank(&page)?;
                let layout = commander::create_layout(&mixer.tracks, bank, page);
                write_commander(&layout, &output, quiet)
            }
            None => {
                for (layout, page) in commander::create_layouts(&mixer).iter().zip(&mixer.pages) {
                    let path = out_dir.join(commander::page_file_name(&page.name));
                    write_commander(layout, &path, quiet)?;
                }
                Ok(())
            }
        },
    }
}

fn write_touchosc(mixer: &Mixer, template: Option<&Path>, output: &Path, quiet: bool) -> Result<()> {
    let layout = match template {
        Some(path) => {
            info!("| Template: {path:?}");
            let layout = touchosc::read_template(File::open(path)?)?;
            touchosc::translate_template(layout, mixer)?
        }
        None => touchosc::create_layout(mixer),
    };

    if !quiet {
        println!("{}", touchosc::to_pretty_xml(&layout)?);
    }

    touchosc::write_package(File::create(output)?, &layout)?;
    info!(
        "| Wrote {output:?}: {} pages, {} controls",
        layout.tab_pages.len(),
        layout.control_count()
    );
    Ok(())
}

fn write_commander(layout: &commander::Layout, output: &Path, quiet: bool) -> Result<()> {
    let xml = commander::to_xml(layout)?;
    if !quiet {
        println!("{xml}");
    }

    let mut file = BufWriter::new(File::create(output)?);
    file.write_all(xml.as_bytes())?;
    file.flush()?;
    info!(
        "| Wrote {output:?}: {} ({} controls)",
        layout.layout_name,
        layout.widgets.len()
    );
    Ok(())
}

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use penguin_stats::config::{AppConfig, DEFAULT_CONFIG_FILE};
use penguin_stats::logging::{self, Stage};
use penguin_stats::pipeline;

fn prompt_for_input() -> io::Result<PathBuf> {
    print!("Enter the path to your penguins CSV file: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

fn main() -> Result<(), Box<dyn Error>> {
    let config_path = Path::new(DEFAULT_CONFIG_FILE);
    let config = AppConfig::load_or_default(config_path)?;
    logging::init_logger(
        config.logging.level,
        config.logging.file.as_deref(),
        config.logging.timestamps,
    );
    if config_path.exists() {
        logging::debug(Stage::Config, config_path.to_str(), "Loaded configuration");
    } else {
        logging::debug(Stage::Config, None, "No config file found, using defaults");
    }

    let input = prompt_for_input()?;
    match pipeline::run(&input, &config.output) {
        Ok(report) => {
            println!(
                "Done! {} of {} rows used; results written to {}, {} and {}.",
                report.rows_kept,
                report.rows_read,
                config.output.avg_mass_csv.display(),
                config.output.heaviest_csv.display(),
                config.output.summary_txt.display(),
            );
            Ok(())
        }
        Err(e) => {
            logging::error(Stage::System, input.to_str(), &e.to_string());
            Err(e.into())
        }
    }
}

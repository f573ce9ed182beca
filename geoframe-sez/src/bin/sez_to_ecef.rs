use clap::{ArgAction, Parser};
use geoframe_sez::output::write_result;
use geoframe_sez::{
    execute, Error, OutputFormat, RotationConvention, SezRequest, TransformOptions,
    ValidationMode, USAGE,
};
use tracing::Level;

#[derive(Parser)]
#[command(name = "sez_to_ecef")]
#[command(about = "Convert a South-East-Zenith offset at an observer into an ECEF position (km)")]
#[command(version)]
struct Cli {
    /// o_lat_deg o_lon_deg o_hae_km s_km e_km z_km (options go before these)
    #[arg(value_name = "VALUE", trailing_var_arg = true, allow_hyphen_values = true)]
    values: Vec<String>,

    /// SEZ rotation convention
    #[arg(long, value_enum, default_value_t = RotationConvention::Reference)]
    rotation: RotationConvention,

    /// Transform NaN, infinite and out-of-range inputs instead of rejecting them
    #[arg(long)]
    no_validate: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> TransformOptions {
        TransformOptions {
            rotation: self.rotation,
            validation: if self.no_validate {
                ValidationMode::Unchecked
            } else {
                ValidationMode::Checked
            },
            format: self.format,
            ..TransformOptions::default()
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let request = match SezRequest::from_args(&cli.values) {
        Ok(request) => request,
        Err(Error::Usage { found }) => {
            tracing::debug!(found, "wrong number of positional arguments");
            println!("{}", USAGE);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let options = cli.options();
    let ecef = execute(&request, &options)?;

    write_result(&mut std::io::stdout().lock(), options.format, &ecef)?;
    Ok(())
}

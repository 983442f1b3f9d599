//! Implementation of the `ago diff` command.

use std::path::PathBuf;

use ago::{FormatOptions, InstantInput};

/// Arguments for the diff command.
#[derive(Debug, clap::Args)]
pub struct DiffArgs {
    /// Target instant: RFC 3339 date or integer epoch milliseconds
    pub target: String,

    /// Reference instant (same forms as the target); defaults to now
    #[arg(long)]
    pub reference: Option<String>,

    /// Locale key (e.g. en, vi)
    #[arg(long, default_value = "en")]
    pub locale: String,

    /// JSON file of extra locale packs (key -> partial pack)
    #[arg(long)]
    pub packs: Option<PathBuf>,

    /// Output the full result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Interpret a CLI argument as an instant: integers are epoch milliseconds,
/// anything else is handed to the RFC 3339 parser.
fn parse_instant(arg: &str) -> InstantInput {
    match arg.parse::<i64>() {
        Ok(ms) => InstantInput::EpochMs(ms),
        Err(_) => InstantInput::from(arg),
    }
}

/// Run the diff command.
pub fn run_diff(args: DiffArgs) -> miette::Result<i32> {
    let registry = super::build_registry(args.packs.as_deref())?;

    let options = FormatOptions::builder()
        .locale(args.locale.as_str())
        .maybe_reference(args.reference.as_deref().map(parse_instant))
        .build();

    let diff = registry
        .format(parse_instant(&args.target), options)
        .map_err(|e| miette::miette!("{}", e))?;

    if args.json {
        let json = serde_json::to_string_pretty(&diff)
            .map_err(|e| miette::miette!("Failed to serialize result: {}", e))?;
        println!("{json}");
    } else {
        println!("{diff}");
    }

    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::parse_instant;
    use ago::InstantInput;

    #[test]
    fn integer_arguments_are_epoch_ms() {
        assert!(matches!(
            parse_instant("1698400800000"),
            InstantInput::EpochMs(1_698_400_800_000)
        ));
        assert!(matches!(parse_instant("-500"), InstantInput::EpochMs(-500)));
    }

    #[test]
    fn non_integer_arguments_stay_text() {
        assert!(matches!(
            parse_instant("2023-10-27T10:00:00Z"),
            InstantInput::Text(_)
        ));
    }
}

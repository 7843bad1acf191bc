// SPDX-License-Identifier: MPL-2.0
use pick_media::app::{self, paths, Flags};

const HELP: &str = "\
pick_media

USAGE:
  pick_media [OPTIONS]

OPTIONS:
  --lang <id>         UI language (e.g. en-US, fr)
  --config-dir <dir>  Directory holding settings.toml
  --verbose           Echo diagnostics to stderr
  -h, --help          Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|e| {
            eprintln!("Invalid --lang: {e}");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|e| {
            eprintln!("Invalid --config-dir: {e}");
            None
        }),
        verbose: args.contains("--verbose"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

// SPDX-License-Identifier: MPL-2.0
use iced_picker::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
Usage: iced_picker [OPTIONS] [IMAGE]

Arguments:
  [IMAGE]                   Image to open in the viewer on startup

Options:
  --library <DIR>           Photo library directory
  --camera <DIR>            Folder a tethered camera drops its captures into
  --max-selectable <N>      Maximum number of images the picker may select
  --config <FILE>           Settings file to use instead of the default one
  -h, --help                Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        library_dir: args.opt_value_from_str("--library")?,
        camera_dir: args.opt_value_from_str("--camera")?,
        max_selectable: args.opt_value_from_str("--max-selectable")?,
        config_path: args.opt_value_from_str("--config")?,
        file_path: args.finish().into_iter().next().map(PathBuf::from),
    };

    Ok(flags)
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

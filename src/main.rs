use clearview::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print_help();
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}

fn print_help() {
    println!(
        "ClearView - AI-powered watermark removal\n\n\
         USAGE:\n    clearview [OPTIONS] [IMAGE]\n\n\
         OPTIONS:\n    \
         --lang <code>    Interface language (e.g. en-US, fr)\n    \
         -h, --help       Print this help\n\n\
         ARGS:\n    <IMAGE>    Image file to load at startup"
    );
}

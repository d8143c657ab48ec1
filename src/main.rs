use std::env;
use std::io::{self, BufRead};
use std::process;

use texsane::compiler::{build_command, CompilerProcess};
use texsane::report::{JsonSink, Sink, TerminalSink};
use texsane::scanner::{Driver, Reassembler, DEFAULT_WRAP_COLUMN};

struct Options {
    json: bool,
    wrap_column: usize,
    compiler: Option<Vec<String>>,
    passthrough: Vec<String>,
}

fn main() -> io::Result<()> {
    let opts = parse_args();

    let code = if opts.json {
        run(JsonSink::new(io::stdout().lock()), &opts)?
    } else {
        run(TerminalSink, &opts)?
    };

    if code != 0 {
        eprintln!("compiler exited with code {}", code);
        process::exit(code);
    }
    Ok(())
}

fn run<S: Sink>(sink: S, opts: &Options) -> io::Result<i32> {
    // No compiler arguments means the transcript is piped to us.
    if opts.passthrough.is_empty() && opts.compiler.is_none() {
        let stdin = io::stdin();
        render(sink, stdin.lock(), opts.wrap_column)?;
        return Ok(0);
    }

    let command = build_command(opts.compiler.clone(), &opts.passthrough);
    eprintln!("running: {}", command.join(" "));

    let mut compiler = CompilerProcess::spawn(&command)?;
    render(sink, &mut compiler.stdout, opts.wrap_column)?;
    compiler.wait()
}

fn render<S: Sink, R: BufRead>(sink: S, reader: R, wrap_column: usize) -> io::Result<()> {
    let mut driver = Driver::new(sink);
    let mut lines = Reassembler::with_wrap_column(reader, wrap_column);
    driver.run(&mut lines)
}

fn parse_args() -> Options {
    let mut opts = Options {
        json: false,
        wrap_column: DEFAULT_WRAP_COLUMN,
        compiler: None,
        passthrough: Vec::new(),
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => opts.json = true,
            "--wrap" => {
                opts.wrap_column = args
                    .next()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(|| usage("--wrap expects a column number"));
            }
            "--compiler" => {
                let spec = args
                    .next()
                    .unwrap_or_else(|| usage("--compiler expects a command"));
                match shlex::split(&spec).filter(|parts| !parts.is_empty()) {
                    Some(parts) => opts.compiler = Some(parts),
                    None => usage("--compiler command could not be parsed"),
                }
            }
            _ => opts.passthrough.push(arg),
        }
    }

    opts
}

fn usage(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("usage: texsane [--json] [--wrap <n>] [--compiler <cmd>] [compiler args...]");
    process::exit(2);
}

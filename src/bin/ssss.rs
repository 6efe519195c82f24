//! `ssss` command-line front end.
//!
//! Exposes [`gf2ss::split`] and [`gf2ss::combine`] as an interactive tool
//! compatible with the historical `ssss-split`/`ssss-combine` hardlink
//! convention: when invoked as (or through a symlink/hardlink named)
//! `*split` or `*combine`, that personality is selected automatically;
//! otherwise an explicit `split`/`combine` subcommand is required.
//!
//! None of the argv parsing, secret prompting, or terminal echo
//! suppression in this file is part of the library — it is this binary's
//! own responsibility, same as the original tool kept all of it out of
//! `libssss`.

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use gf2ss::rng::Csprng;
use gf2ss::{combine, split, CombineConfig, Error, Share, SplitConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const MAX_TOKEN_LEN: usize = 128;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Split,
    Combine,
}

/// Split or combine secrets using Shamir's Secret Sharing Scheme.
#[derive(Parser, Debug)]
#[command(name = "ssss", about, disable_version_flag = true)]
struct Cli {
    /// Mode to run in, when not inferred from the binary's name.
    mode: Option<Mode>,

    /// Print version information and exit.
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Number of shares required to reconstruct the secret.
    #[arg(short = 't', long)]
    threshold: Option<u8>,

    /// Total number of shares to generate (split only).
    #[arg(short = 'n', long)]
    number: Option<u8>,

    /// Label prefixed to each share's text encoding (split only).
    #[arg(short = 'w', long)]
    token: Option<String>,

    /// Explicit security level in bits; inferred from the secret's length
    /// when omitted.
    #[arg(short = 's', long)]
    security: Option<usize>,

    /// Treat the secret (split) or the recovered secret (combine) as hex
    /// rather than ASCII. Shares are always hex.
    #[arg(short = 'x', long)]
    hex: bool,

    /// Suppress informational prompts.
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Suppress informational prompts and warnings.
    #[arg(short = 'Q', long = "very-quiet")]
    very_quiet: bool,

    /// Disable the diffusion layer.
    #[arg(short = 'D', long = "no-diffusion")]
    no_diffusion: bool,

    /// Fail if memory locking is unavailable, instead of only warning.
    #[arg(short = 'M', long = "require-lock")]
    require_lock: bool,
}

fn warn(quiet: bool, very_quiet: bool, msg: &str) {
    if !very_quiet && !quiet {
        eprintln!("warning: {msg}");
    }
}

fn fatal(msg: &str) -> ! {
    eprintln!("fatal: {msg}");
    std::process::exit(1);
}

fn lock_memory(require: bool, quiet: bool, very_quiet: bool) {
    #[cfg(unix)]
    {
        let ret = unsafe { libc::mlockall(libc::MCL_CURRENT | libc::MCL_FUTURE) };
        if ret < 0 {
            warn(quiet, very_quiet, "couldn't lock process memory");
            if require {
                fatal("memory lock is required to proceed");
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = (require, quiet, very_quiet);
    }
}

#[cfg(unix)]
fn read_line_no_echo(prompt: &str) -> io::Result<String> {
    use std::os::fd::AsRawFd;
    use termios::*;

    eprint!("{prompt}");
    io::stderr().flush()?;

    let stdin_fd = io::stdin().as_raw_fd();
    let original = Termios::from_fd(stdin_fd).ok();
    if let Some(orig) = original {
        let mut muted = orig;
        muted.c_lflag &= !ECHO;
        let _ = tcsetattr(stdin_fd, TCSANOW, &muted);
    }

    let mut line = String::new();
    let result = io::stdin().lock().read_line(&mut line);

    if let Some(orig) = original {
        let _ = tcsetattr(stdin_fd, TCSANOW, &orig);
    }
    eprintln!();

    result.map(|_| line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(not(unix))]
fn read_line_no_echo(prompt: &str) -> io::Result<String> {
    eprint!("{prompt}");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn import_secret(s: &str, hex_mode: bool) -> Vec<u8> {
    if hex_mode {
        let padded = if s.len() % 2 == 1 { format!("0{s}") } else { s.to_string() };
        hex::decode(&padded).unwrap_or_else(|_| fatal("invalid hex secret"))
    } else {
        s.as_bytes().to_vec()
    }
}

fn print_secret(buf: &[u8], hex_mode: bool) {
    if hex_mode {
        println!("{}", hex::encode(buf));
    } else {
        let rendered: String = buf
            .iter()
            .map(|&b| if (32..127).contains(&b) { b as char } else { '.' })
            .collect();
        println!("{rendered}");
    }
}

fn run_split(cli: &Cli) {
    let threshold = cli.threshold.unwrap_or_else(|| fatal("missing required -t/--threshold"));
    let number = cli.number.unwrap_or_else(|| fatal("missing required -n/--number"));
    if threshold < 2 {
        fatal("invalid parameters: invalid threshold value");
    }
    if number < threshold {
        fatal("invalid parameters: number of shares smaller than threshold");
    }
    if let Some(token) = &cli.token {
        if token.len() > MAX_TOKEN_LEN {
            fatal("invalid parameters: token too long");
        }
    }
    if let Some(bits) = cli.security {
        if bits == 0 || bits % 8 != 0 {
            fatal("invalid parameters: security level must be a positive multiple of 8");
        }
    }

    if !cli.quiet {
        eprint!("Generating shares using a ({threshold},{number}) scheme with ");
        match cli.security {
            Some(s) => eprint!("a {s} bit"),
            None => eprint!("dynamic"),
        }
        eprintln!(" security level.");
    }

    let prompt = if cli.hex { "Enter the secret, as hex digits: " } else { "Enter the secret, as ASCII characters: " };
    let line = read_line_no_echo(prompt).unwrap_or_else(|_| fatal("I/O error while reading secret"));

    let secret = import_secret(&line, cli.hex);

    let cfg = SplitConfig {
        threshold,
        shares: number,
        diffusion: !cli.no_diffusion,
        token: cli.token.clone(),
        hex: cli.hex,
        security_bits: cli.security,
    };

    if cfg.diffusion && secret.len() < 8 {
        warn(cli.quiet, cli.very_quiet, "security level too small for the diffusion layer");
    }

    let mut rng = Csprng::new().unwrap_or_else(|e| fatal(&e.to_string()));
    let shares = split(&secret, &cfg, &mut rng).unwrap_or_else(|e| fatal(&e.to_string()));

    let width = number.to_string().len();
    for share in &shares {
        println!("{}", share.to_text(cli.token.as_deref(), width));
    }
}

fn run_combine(cli: &Cli) {
    let threshold = cli.threshold.unwrap_or_else(|| fatal("missing required -t/--threshold"));
    if threshold < 2 {
        fatal("invalid parameters: invalid threshold value");
    }

    if !cli.quiet {
        eprintln!("Enter {threshold} shares separated by newlines:");
    }

    let mut shares: Vec<Share> = Vec::with_capacity(threshold as usize);
    for i in 0..threshold {
        let prompt = if cli.quiet { String::new() } else { format!("Share [{}/{threshold}]: ", i + 1) };
        let line = read_line_no_echo(&prompt).unwrap_or_else(|_| fatal("I/O error while reading shares"));
        let mut share = Share::from_text(&line).unwrap_or_else(|e| fatal(&e.to_string()));
        share.threshold = threshold;
        shares.push(share);
    }

    let cfg = CombineConfig { threshold, diffusion: !cli.no_diffusion, hex: cli.hex };
    let secret = combine(&shares, &cfg).unwrap_or_else(|e: Error| fatal(&e.to_string()));

    if !cli.quiet {
        eprint!("Resulting secret: ");
    }
    print_secret(&secret, cli.hex);
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    if cli.version {
        println!("ssss {}", env!("CARGO_PKG_VERSION"));
        return;
    }
    lock_memory(cli.require_lock, cli.quiet, cli.very_quiet);

    let argv0 = std::env::args().next().unwrap_or_default();
    let basename = argv0.rsplit(['/', '\\']).next().unwrap_or(&argv0);

    let mode = if basename.contains("split") {
        Mode::Split
    } else if basename.contains("combine") {
        Mode::Combine
    } else {
        cli.mode.unwrap_or_else(|| fatal("specify a mode: split or combine"))
    };

    match mode {
        Mode::Split => run_split(&cli),
        Mode::Combine => run_combine(&cli),
    }
}

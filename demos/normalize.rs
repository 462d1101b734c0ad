//! An example to normalize a WebFinger resource identifier from the CLI argument.

use webfinger_resource::discovery::{DiscoveryRequest, ISSUER_REL};
use webfinger_resource::normalize;

const USAGE: &str = "\
USAGE:
    normalize [FLAGS] [--] IDENTIFIER

FLAGS:
    -h, --help          Prints this help
    -d, --discovery     Also prints the WebFinger discovery URL for the issuer
    --force-https       Use https for the discovery URL even for http resources

ARGS:
    <IDENTIFIER>        Resource identifier (e.g. `nov@example.com`)
";

fn print_help() {
    eprintln!("{}", USAGE);
}

fn help_and_exit() -> ! {
    print_help();
    std::process::exit(1);
}

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", msg);
    eprintln!();
    print_help();
    std::process::exit(1);
}

/// CLI options.
#[derive(Default, Debug, Clone)]
struct CliOpt {
    /// Raw identifier.
    identifier: String,
    /// Whether to print the discovery URL.
    discovery: bool,
    /// Whether to force https for the discovery URL.
    force_https: bool,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut identifier = None;
        let mut discovery = false;
        let mut force_https = false;

        for arg in args.by_ref() {
            match arg.as_str() {
                "--discovery" | "-d" => discovery = true,
                "--force-https" => force_https = true,
                "--help" | "-h" => help_and_exit(),
                "--" => break,
                opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
                _ => {
                    if identifier.replace(arg).is_some() {
                        die("IDENTIFIER can be specified at most once");
                    }
                }
            }
        }

        for arg in args {
            if identifier.replace(arg).is_some() {
                die("IDENTIFIER can be specified at most once");
            }
        }

        let identifier = identifier.unwrap_or_else(|| die("IDENTIFIER should be specified"));
        Self {
            identifier,
            discovery,
            force_https,
        }
    }
}

fn main() {
    let opt = CliOpt::parse();

    let resource = match normalize(&opt.identifier) {
        Ok(v) => v,
        Err(e) => die(format_args!("Failed to normalize {:?}: {}", opt.identifier, e)),
    };
    println!("{}", resource);

    if opt.discovery {
        let request = match DiscoveryRequest::new(resource) {
            Some(v) => v,
            None => die(format_args!("{} has no host to send a request to", resource)),
        };
        let request = request
            .with_rels(&[ISSUER_REL])
            .force_https(opt.force_https);
        println!("{}", request);
    }
}

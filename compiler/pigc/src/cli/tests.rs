use super::*;
use pretty_assertions::assert_eq;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("pigc").chain(args.iter().copied()))
}

#[test]
fn defaults_to_stdio_and_parallel() {
    let Ok(cli) = parse(&[]) else {
        panic!("empty argument list should parse");
    };
    assert_eq!(cli.input, None);
    assert_eq!(cli.out, None);
    assert!(!cli.pretty);

    let options = cli.compile_options();
    assert!(options.parallel);
    assert_eq!(options.threads, None);
}

#[test]
fn flags_map_to_options() {
    let Ok(cli) = parse(&["-i", "u.json", "-o", "out.json", "--threads", "3", "--pretty"])
    else {
        panic!("flags should parse");
    };
    assert_eq!(cli.input, Some(PathBuf::from("u.json")));
    assert_eq!(cli.out, Some(PathBuf::from("out.json")));
    assert!(cli.pretty);
    assert_eq!(cli.compile_options().threads, Some(3));

    let Ok(cli) = parse(&["--sequential"]) else {
        panic!("--sequential should parse");
    };
    assert!(!cli.compile_options().parallel);
}

#[test]
fn sequential_conflicts_with_threads() {
    assert!(parse(&["--sequential", "--threads", "2"]).is_err());
}

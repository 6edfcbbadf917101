// Copyright @yucwang 2026

use geographics::core::bound::BoundName;
use geographics::core::geographics::GeographicsComponent;
use geographics::core::property::PropertyStore;
use geographics::io::bounds_loader::load_bounds;
use geographics::math::constants::Float;

use console::style;
use std::env;

fn usage(program: &str) {
    eprintln!("Usage: {} [bounds.xml] [--lon-min D] [--lon-max D] [--lat-min D] [--lat-max D] \
               [--height-min M] [--height-max M]", program);
}

fn flag_bound(flag: &str) -> Option<BoundName> {
    match flag {
        "--lon-min" => Some(BoundName::LongitudeMin),
        "--lon-max" => Some(BoundName::LongitudeMax),
        "--lat-min" => Some(BoundName::LatitudeMin),
        "--lat-max" => Some(BoundName::LatitudeMax),
        "--height-min" => Some(BoundName::HeightMin),
        "--height-max" => Some(BoundName::HeightMax),
        _ => None,
    }
}

#[derive(Debug, PartialEq)]
struct CliArgs {
    input_path: Option<String>,
    overrides: Vec<(BoundName, Float)>,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs { input_path: None, overrides: Vec::new(), help: false };

    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "-h" || arg == "--help" {
            cli.help = true;
            return Ok(cli);
        }
        match flag_bound(arg) {
            Some(name) => {
                i += 1;
                let value = args.get(i)
                    .and_then(|v| v.parse::<Float>().ok())
                    .ok_or_else(|| format!("{} expects a number", arg))?;
                cli.overrides.push((name, value));
            }
            None if arg.starts_with('-') => return Err(format!("unknown option: {}", arg)),
            None if cli.input_path.is_none() => cli.input_path = Some(arg.to_string()),
            None => return Err(format!("unexpected argument: {}", arg)),
        }
        i += 1;
    }
    Ok(cli)
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(msg) => {
            log::error!("{}.", msg);
            usage(&args[0]);
            std::process::exit(1);
        }
    };
    if cli.help {
        usage(&args[0]);
        return;
    }

    let store = match cli.input_path.as_deref() {
        Some(path) => match load_bounds(path) {
            Ok(config) => config.into_store(),
            Err(e) => {
                log::error!("Failed to load {}: {}.", path, e);
                std::process::exit(1);
            }
        },
        None => PropertyStore::new(),
    };

    let mut component = match GeographicsComponent::new(store) {
        Ok(component) => component,
        Err(e) => {
            log::error!("Failed to set up geographics: {}.", e);
            std::process::exit(1);
        }
    };
    for (name, value) in cli.overrides {
        component.set_bound(name, value);
    }

    println!("{}", style("Bounds").bold().cyan());
    for name in BoundName::ALL.iter() {
        println!("  {:<14} {:>14.6} -> {:.6}", name.as_str(), component.raw_bound(*name), component.bound(*name));
    }

    let rot = component.rotate_matrix();
    let m = rot.get();
    println!("{}", style(rot.name()).bold().cyan());
    for (row, label) in ["east", "north", "up"].iter().enumerate() {
        println!("  {:<6} [{:>10.6}, {:>10.6}, {:>10.6}]", label, m[(row, 0)], m[(row, 1)], m[(row, 2)]);
    }
}

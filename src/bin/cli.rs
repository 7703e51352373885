use std::env;
use std::process::exit;

use widgetflow::call_context::CallContext;
use widgetflow::io::{self, InputFormat};
use widgetflow::network::{BuildOptions, DuplicatePolicy, Network};

const USAGE: &str = "Usage: cli [--json] [--duplicates <reject|last|sum>] [--source <product>] [--sink <product>] <records file>";

struct Args {
    format: InputFormat,
    options: BuildOptions,
    file: String,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut format = InputFormat::Csv;
    let mut options = BuildOptions::default();
    let mut file = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => format = InputFormat::Json,
            "--duplicates" => {
                options.duplicates = match args.next().as_deref() {
                    Some("reject") => DuplicatePolicy::Reject,
                    Some("last") => DuplicatePolicy::LastWins,
                    Some("sum") => DuplicatePolicy::Sum,
                    other => return Err(format!("Unknown duplicate policy: {other:?}")),
                }
            }
            "--source" => options.source = Some(args.next().ok_or("Expected a product after --source")?),
            "--sink" => options.sink = Some(args.next().ok_or("Expected a product after --sink")?),
            _ if arg.starts_with("--") => return Err(format!("Unknown option {arg}")),
            _ if file.is_none() => file = Some(arg),
            _ => return Err(format!("Unexpected argument {arg}")),
        }
    }
    let file = file.ok_or("Please provide a filename for the input records.")?;
    Ok(Args {
        format,
        options,
        file,
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            println!("{message}");
            println!("{USAGE}");
            println!("Option --json reads a JSON array of records instead of CSV.");
            println!("Option --duplicates decides what happens to repeated input/output pairs (default: reject).");
            exit(1);
        }
    };

    let call_context = CallContext::new(&args.file);
    let network = match io::read_records(&args.file, args.format)
        .and_then(|records| Network::build(&records, &args.options))
    {
        Ok(network) => network,
        Err(err) => {
            eprintln!("Error loading machines from file \"{}\": {err}", args.file);
            exit(1);
        }
    };
    let assignment = network.optimise(&call_context);
    println!("Found flow: {}", assignment.value);

    let mut machines = json::JsonValue::new_object();
    for (machine, flow) in &assignment.machines {
        machines[machine.as_str()] = (*flow).into();
    }
    let result = json::object! {
        maxFlowValue: assignment.value,
        feedstock: assignment.feedstock.as_str(),
        finalProduct: assignment.final_product.as_str(),
        machines: machines,
    };
    println!("{result}");
}

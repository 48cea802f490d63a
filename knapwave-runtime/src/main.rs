use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use knapwave_challenge::*;
use knapwave_utils::{compress_obj, dejsonify, jsonify, timed, u8s_from_str};
use serde::{Deserialize, Serialize};
use std::{fs, io::Read, path::PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SolveOutput {
    pub num_items: usize,
    pub capacity: u32,
    pub optimal_value: u64,
    pub elapsed_secs: f64,
    pub solution: Solution,
    pub table: Option<Vec<Vec<u64>>>,
}

fn cli() -> Command {
    Command::new("knapwave-runtime")
        .about("Solves 0/1 knapsack instances with a wavefront dynamic program")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Computes the optimal profit and one optimal selection")
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to a json file, or path to a text file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--verbose "Print the solution vector and the full table")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the output data will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress "If output file is set, the output data will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generates a random instance")
                .arg(arg!(<SEED> "A string used in seed generation").value_parser(clap::value_parser!(String)))
                .arg(
                    arg!(<NUM_ITEMS> "Number of items")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--budget [BUDGET] "Capacity as a percentage of the total weight")
                        .default_value("50")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the instance is saved to this file path (json if it ends with .json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a solution is feasible and optimal")
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to a json file, or path to a text file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    env_logger::init();
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve(
            sub_m.get_one::<String>("INSTANCE").unwrap().clone(),
            sub_m.get_flag("verbose"),
            sub_m.get_one::<PathBuf>("output").cloned(),
            sub_m.get_flag("compress"),
        ),
        Some(("generate", sub_m)) => generate(
            sub_m.get_one::<String>("SEED").unwrap().clone(),
            *sub_m.get_one::<usize>("NUM_ITEMS").unwrap(),
            *sub_m.get_one::<u32>("budget").unwrap(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("verify_solution", sub_m)) => verify_solution(
            sub_m.get_one::<String>("INSTANCE").unwrap().clone(),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn solve(
    instance: String,
    verbose: bool,
    output_file: Option<PathBuf>,
    compress: bool,
) -> Result<()> {
    let instance = load_instance(&instance)?;
    println!(
        "The number of objects is {}, and the capacity is {}.",
        instance.num_items(),
        instance.capacity
    );

    // Only the table build is timed
    let (table, elapsed) = timed(|| build_table(&instance));
    let table = table?;
    println!(
        "The optimal profit is {} Time taken : {:.6}.",
        table.optimal_value(),
        elapsed.as_secs_f64()
    );

    let solution = reconstruct(&table, &instance)?;
    log::info!(
        "selected items {:?}",
        solution.selected_items().collect::<Vec<_>>()
    );
    print!("{}", solution_report(&solution, &table, verbose));

    if let Some(path) = output_file {
        let output_data = SolveOutput {
            num_items: instance.num_items(),
            capacity: instance.capacity,
            optimal_value: table.optimal_value(),
            elapsed_secs: elapsed.as_secs_f64(),
            solution,
            table: verbose.then(|| table.to_rows()),
        };
        if compress {
            fs::write(&path, compress_obj(&output_data)?)?;
        } else {
            fs::write(&path, jsonify(&output_data)?)?;
        }
        println!("output_data written to: {:?}", path);
    }
    Ok(())
}

pub fn generate(
    seed: String,
    num_items: usize,
    budget: u32,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let difficulty = Difficulty { num_items, budget };
    let instance = Instance::generate_instance(&u8s_from_str(&seed), &difficulty)?;
    log::info!(
        "generated {} items with capacity {}",
        instance.num_items(),
        instance.capacity
    );

    match output_file {
        Some(path) => {
            if is_json_path(&path.to_string_lossy()) {
                fs::write(&path, jsonify(&instance)?)?;
            } else {
                fs::write(&path, instance.to_text())?;
            }
            println!("instance written to: {:?}", path);
        }
        None => print!("{}", instance.to_text()),
    }
    Ok(())
}

pub fn verify_solution(instance: String, solution: String) -> Result<()> {
    let instance = load_instance(&instance)?;
    let solution = load_solution(&solution)?;
    instance
        .verify_solution(&solution)
        .map_err(|e| anyhow!("Invalid solution: {}", e))?;
    println!("Solution is valid");
    Ok(())
}

/// The header is always printed; the vector and table only when verbose.
fn solution_report(solution: &Solution, table: &Table, verbose: bool) -> String {
    let mut report = String::from("Solution vector is: \n");
    if verbose {
        report.push_str(&format!(" --> {}\nTable:\n{}", solution, table));
    }
    report
}

fn is_json_path(path: &str) -> bool {
    path.ends_with(".json")
}

fn load_instance(instance: &str) -> Result<Instance> {
    let trimmed = instance.trim_start();
    if trimmed.starts_with('{') {
        return dejsonify::<Instance>(trimmed)
            .map_err(|e| KnapsackError::InvalidInput(format!("Failed to parse instance: {}", e)).into());
    }

    let contents = fs::read_to_string(instance)
        .map_err(|e| anyhow!("Failed to read file named '{}': {}", instance, e))?;
    log::debug!("read {} bytes from {}", contents.len(), instance);
    if is_json_path(instance) {
        dejsonify::<Instance>(&contents)
            .map_err(|e| KnapsackError::InvalidInput(format!("Failed to parse instance: {}", e)).into())
    } else {
        Ok(contents.parse::<Instance>()?)
    }
}

fn load_solution(solution: &str) -> Result<Solution> {
    let solution = if solution == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read solution from stdin: {}", e))?;
        buffer
    } else if is_json_path(solution) {
        fs::read_to_string(solution)
            .map_err(|e| anyhow!("Failed to read solution file '{}': {}", solution, e))?
    } else {
        solution.to_string()
    };

    dejsonify::<Solution>(&solution).map_err(|e| anyhow!("Failed to parse solution: {}", e))
}

use std::path::Path;

use crate::data::loader::load_payload;
use crate::data::lookup::LookupStore;
use crate::data::registry::load_registry;
use crate::parallel::batch::validate_release;
use crate::parallel::pool::WorkerPool;
use crate::schema::datasets::schema_for;
use crate::schema::model::DatasetKind;
use crate::schema::validate::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Validate,
    Batch,
    Schemas,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("validate") => Some(Command::Validate),
        Some("batch") => Some(Command::Batch),
        Some("schemas") => Some(Command::Schemas),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Validate) => handle_validate(args),
        Some(Command::Batch) => handle_batch(args),
        Some(Command::Schemas) => handle_schemas(),
        None => {
            eprintln!("usage: coaltracker <validate|batch|schemas>");
            2
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let as_json = args.iter().any(|arg| arg == "--json");
    let positional = positional_args(args);
    let (Some(kind_name), Some(path)) = (positional.first(), positional.get(1)) else {
        eprintln!("usage: coaltracker validate <kind> <path-to-dataset.json> [--json]");
        return 2;
    };

    let Some(kind) = DatasetKind::from_name(kind_name) else {
        eprintln!("unknown dataset kind '{kind_name}' (see: coaltracker schemas)");
        return 2;
    };

    let payload = match load_payload(path) {
        Ok(payload) => payload,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };

    // Single-file mode has no cross-file context; membership comes from
    // the built-in ISO table.
    let store = LookupStore::from_static_table();
    let report = validate(&payload, &schema_for(kind), &store);

    if as_json {
        match serde_json::to_string_pretty(&report) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => {
                eprintln!("failed to serialize validation report: {err}");
                return 1;
            }
        }
        return if report.is_valid() { 0 } else { 1 };
    }

    if report.is_valid() {
        println!("validation passed: {path}");
        0
    } else {
        eprintln!("validation failed: {} issue(s)", report.error_count());
        for diagnostic in &report.diagnostics {
            eprintln!("- {diagnostic}");
        }
        1
    }
}

fn handle_batch(args: &[String]) -> i32 {
    let as_json = args.iter().any(|arg| arg == "--json");
    let workers = parse_workers_arg(args);
    let positional = positional_args(args);
    let data_dir = positional
        .first()
        .map(String::as_str)
        .unwrap_or("data");

    let registry_path = Path::new(data_dir).join("registry.json");
    let registry = match load_registry(&registry_path) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("{err}: {}", registry_path.display());
            return 1;
        }
    };

    let pool = WorkerPool::with_workers(workers);
    let batch = validate_release(Path::new(data_dir), &registry, &pool);

    if as_json {
        match serde_json::to_string_pretty(&batch) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => {
                eprintln!("failed to serialize batch report: {err}");
                return 1;
            }
        }
        return if batch.all_passed() { 0 } else { 1 };
    }

    for file in &batch.files {
        if file.passed {
            println!("ok   {} ({})", file.name, file.path);
        } else {
            eprintln!(
                "fail {} ({}): {} issue(s)",
                file.name,
                file.path,
                file.report.error_count()
            );
            for diagnostic in &file.report.diagnostics {
                eprintln!("  - {diagnostic}");
            }
        }
    }
    println!(
        "validated {} datasets, {} ok, {} failed",
        batch.files.len(),
        batch.passed,
        batch.failed
    );

    if batch.all_passed() {
        0
    } else {
        1
    }
}

fn handle_schemas() -> i32 {
    for kind in DatasetKind::all() {
        println!("{kind}");
    }
    0
}

/// Positional arguments after the subcommand, skipping flags and the
/// value consumed by `--workers`.
fn positional_args(args: &[String]) -> Vec<String> {
    let mut positional = Vec::new();
    let mut skip_next = false;
    for arg in args.iter().skip(2) {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--workers" {
            skip_next = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        positional.push(arg.clone());
    }
    positional
}

fn parse_workers_arg(args: &[String]) -> usize {
    let Some(position) = args.iter().position(|arg| arg == "--workers") else {
        return 0;
    };
    let raw = args.get(position + 1);
    raw.and_then(|value| value.parse::<usize>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid worker count '{value}', defaulting to all cores");
            }
            0
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn commands_parse() {
        assert_eq!(
            parse_command(&args(&["coaltracker", "validate"])),
            Some(Command::Validate)
        );
        assert_eq!(
            parse_command(&args(&["coaltracker", "batch"])),
            Some(Command::Batch)
        );
        assert_eq!(
            parse_command(&args(&["coaltracker", "schemas"])),
            Some(Command::Schemas)
        );
        assert_eq!(parse_command(&args(&["coaltracker", "serve"])), None);
    }

    #[test]
    fn workers_flag_consumes_its_value() {
        let argv = args(&["coaltracker", "batch", "--workers", "4", "out"]);
        assert_eq!(parse_workers_arg(&argv), 4);
        assert_eq!(positional_args(&argv), vec!["out".to_string()]);
    }

    #[test]
    fn invalid_workers_falls_back_to_default() {
        let argv = args(&["coaltracker", "batch", "--workers", "many"]);
        assert_eq!(parse_workers_arg(&argv), 0);
    }
}

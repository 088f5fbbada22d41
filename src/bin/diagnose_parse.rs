// Segment a payload from the command line and print the decoded AIs
use std::fs;
use std::process;

use ean128::{Segmenter, definitions_from_json};

fn main() {
    let mut args = std::env::args().skip(1);
    let Some(payload) = args.next() else {
        eprintln!("usage: diagnose_parse <payload> [definitions.json]");
        process::exit(2);
    };

    let segmenter = match args.next() {
        Some(path) => {
            let json = match fs::read_to_string(&path) {
                Ok(json) => json,
                Err(err) => {
                    eprintln!("failed to read {}: {}", path, err);
                    process::exit(2);
                }
            };
            match definitions_from_json(&json) {
                Ok(definitions) => Segmenter::new(definitions),
                Err(err) => {
                    eprintln!("failed to parse {}: {}", path, err);
                    process::exit(2);
                }
            }
        }
        None => Segmenter::with_default_table(),
    };

    println!(
        "Parsing {:?} against {} definitions",
        payload,
        segmenter.config().len()
    );

    match segmenter.parse(&payload) {
        Ok(result) => {
            println!("OK: {} -> {} AIs", payload, result.ais.len());
            for (ai_code, value) in &result.ais {
                println!("  [{}] {:?}", ai_code, value);
            }
            let json = serde_json::to_string_pretty(&result).expect("serialize result");
            println!("{}", json);
        }
        Err(err) => {
            println!("FAIL: {}", err);
            process::exit(1);
        }
    }
}
